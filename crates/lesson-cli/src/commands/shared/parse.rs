use std::io::Read;
use std::path::Path;

use anyhow::Context;
use lesson_core::enums::{ArtifactKind, Locale};
use lesson_core::{AppError, ErrorCode};

/// Parse an artifact kind argument in any accepted spelling.
pub fn parse_kind(value: &str, locale: Locale) -> Result<ArtifactKind, AppError> {
    value.parse().map_err(|message: String| {
        AppError::localized(ErrorCode::ValidationInvalidInput, message, locale)
            .with_context("accepted", ArtifactKind::ALL.map(ArtifactKind::as_str).join(", "))
    })
}

/// Read raw input from a file, or stdin for `None` / `-`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
