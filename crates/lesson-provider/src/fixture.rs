//! Canned-response provider for offline runs, demos, and tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lesson_config::STATIC;
use lesson_core::RawContent;

use crate::ContentProvider;
use crate::error::ProviderError;
use crate::prompt::GenerationRequest;

/// Serves pre-recorded responses keyed by [`GenerationRequest::fixture_name`].
///
/// In-memory responses win; otherwise `<dir>/<fixture_name>.json` is read,
/// falling back to `<dir>/<artifactKind>.json` for difficulty-specific
/// requests. File contents are returned as text so fenced or prose-wrapped
/// recordings go through extraction exactly like live output.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    responses: HashMap<String, RawContent>,
    dir: Option<PathBuf>,
}

impl StaticProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve fixtures from a directory.
    #[must_use]
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            responses: HashMap::new(),
            dir: Some(dir.into()),
        }
    }

    /// Register an in-memory response.
    #[must_use]
    pub fn with_response(mut self, name: impl Into<String>, content: impl Into<RawContent>) -> Self {
        self.responses.insert(name.into(), content.into());
        self
    }

    async fn read_fixture(dir: &Path, request: &GenerationRequest) -> Result<RawContent, ProviderError> {
        let specific = dir.join(format!("{}.json", request.fixture_name()));
        let path = if request.difficulty.is_some() && !tokio::fs::try_exists(&specific).await.unwrap_or(false) {
            dir.join(format!("{}.json", request.kind))
        } else {
            specific
        };

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ProviderError::Fixture {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "serving fixture");
        Ok(RawContent::Text(text))
    }
}

impl ContentProvider for StaticProvider {
    fn name(&self) -> &str {
        STATIC
    }

    fn model(&self) -> &str {
        "fixture"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<RawContent, ProviderError> {
        let name = request.fixture_name();
        if let Some(content) = self
            .responses
            .get(&name)
            .or_else(|| self.responses.get(request.prompt_type()))
        {
            return Ok(content.clone());
        }

        let Some(dir) = &self.dir else {
            return Err(ProviderError::Fixture {
                path: PathBuf::from(name),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no in-memory response"),
            });
        };
        let content = Self::read_fixture(dir, request).await?;
        if content.is_blank() {
            return Err(ProviderError::EmptyResponse {
                provider: STATIC.to_string(),
            });
        }
        Ok(content)
    }
}
