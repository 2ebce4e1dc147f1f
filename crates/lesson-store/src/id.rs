//! Lesson plan identifiers.

use lesson_core::lesson_plan::LESSON_PLAN_PREFIX;

use crate::error::StoreError;

/// Mint a new id: `lpn-` followed by 8 random lowercase hex characters.
///
/// # Errors
///
/// Returns `StoreError::IdGeneration` if the OS random source fails.
pub fn new_plan_id() -> Result<String, StoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| StoreError::IdGeneration(e.to_string()))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{LESSON_PLAN_PREFIX}-{hex}"))
}

/// Whether `id` has the shape produced by [`new_plan_id`].
#[must_use]
pub fn is_plan_id(id: &str) -> bool {
    id.strip_prefix(LESSON_PLAN_PREFIX)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| {
            hex.len() == 8 && hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        })
}
