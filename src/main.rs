//! # chatscope CLI
//!
//! Command-line interface for the chatscope library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatscope::cli::Args;
use chatscope::format::{OutputFormat, write_to_format};
use chatscope::{ChatscopeError, TranscriptParser};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// `-v` wins over `RUST_LOG`; without it the environment decides, default `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatscopeError> {
    let total_start = Instant::now();
    let format: OutputFormat = args.format.into();
    let output_path = args.output_path();

    println!("🔎 chatscope v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {output_path}");
    println!("📄 Format:  {format} ({})", format.mime_type());
    println!();

    let parser = TranscriptParser::with_config(args.parser_config());
    let parse_start = Instant::now();
    let chat = parser.parse(Path::new(&args.input))?;
    let parse_time = parse_start.elapsed();

    match chat.detected_grammar() {
        Some(grammar) => println!("🧭 Grammar: {grammar}"),
        None => println!("🧭 Grammar: not recognized"),
    }
    println!("📅 Dates:   {}", chat.date_strategy());
    for warning in chat.warnings() {
        println!("⚠️  {warning}");
    }
    println!(
        "   Parsed {} records ({:.2}s)",
        chat.len(),
        parse_time.as_secs_f64()
    );

    let records = if args.sort {
        chat.sorted_by_timestamp()
    } else {
        chat.records().to_vec()
    };

    println!("💾 Writing {format}...");
    write_to_format(&records, &output_path, format, &args.output_config())?;

    println!();
    println!("✅ Done! Output saved to {output_path}");
    println!();
    println!("📊 Summary:");
    println!("   Records:   {}", chat.len());
    println!("   Senders:   {}", chat.senders().join(", "));
    if let Some((first, last)) = chat.date_range() {
        println!("   Range:     {first} to {last}");
    }
    println!("   Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
