//! Final record validation.
//!
//! A [`MessageRecord`] can't exist without a timestamp, so the only row-level
//! check left here is the body. The dataset as a whole must then reach the
//! configured minimum size or the parse fails.

use crate::error::{ChatscopeError, Result};
use crate::record::MessageRecord;

/// Drops records with an empty body and enforces `min_records`.
///
/// Returns the surviving records in their original order together with the
/// number of records dropped.
pub fn validate(
    records: Vec<MessageRecord>,
    min_records: usize,
) -> Result<(Vec<MessageRecord>, usize)> {
    let before = records.len();
    let kept: Vec<MessageRecord> = records
        .into_iter()
        .filter(|record| !record.body.trim().is_empty())
        .collect();
    let dropped = before - kept.len();

    if kept.len() < min_records {
        return Err(ChatscopeError::insufficient_data(kept.len(), min_records));
    }

    Ok((kept, dropped))
}
