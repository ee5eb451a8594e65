use async_trait::async_trait;
use rancang_state::Value;
use thiserror::Error;

/// Failure while rendering or delivering an export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("export failed: {0}")]
    Failed(String),
}

/// Renders the finished plan into a deliverable (document file, printout,
/// share target) as one side effect.
///
/// Failures surface to the caller for logging and nowhere else; the
/// authoring core never shows them to the user.
#[async_trait]
pub trait PlanExporter: Send + Sync {
    async fn export(&self, plan: &Value) -> Result<(), ExportError>;
}
