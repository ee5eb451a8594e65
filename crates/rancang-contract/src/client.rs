use crate::{ActivityIdea, ActivityPlan, AnecdoteNote, ChecklistEntry, UnderstandingDraft};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a drafting request.
///
/// Drives the failure arm of a flow and the logs. User-facing text is a
/// fixed per-section string and is never built from these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("response could not be decoded: {0}")]
    Decode(String),
}

/// Plan-level context sent with every drafting request, read from the
/// trigger-time snapshot. Fields not yet filled in arrive empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanContext {
    pub topik: String,
    pub kelas: String,
}

/// The remote drafting service: one request shape per plan section, plus
/// the activity-idea search.
///
/// Implementations own transport, prompt construction, and decoding. No
/// retry, timeout, or cancellation policy lives behind this trait — one
/// trigger is one attempt that runs to completion.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn draft_objectives(&self, ctx: &PlanContext) -> Result<String, ClientError>;

    async fn draft_understanding(
        &self,
        ctx: &PlanContext,
        objectives: &str,
    ) -> Result<UnderstandingDraft, ClientError>;

    async fn draft_opening(&self, ctx: &PlanContext, objectives: &str)
        -> Result<String, ClientError>;

    async fn draft_core_activities(
        &self,
        ctx: &PlanContext,
        objectives: &str,
    ) -> Result<Vec<ActivityPlan>, ClientError>;

    async fn draft_closing(&self, ctx: &PlanContext) -> Result<String, ClientError>;

    async fn draft_checklist(
        &self,
        ctx: &PlanContext,
        objectives: &str,
    ) -> Result<Vec<ChecklistEntry>, ClientError>;

    async fn draft_anecdote(&self, ctx: &PlanContext) -> Result<AnecdoteNote, ClientError>;

    async fn suggest_activity_ideas(
        &self,
        ctx: &PlanContext,
        activity: &ActivityPlan,
    ) -> Result<Vec<ActivityIdea>, ClientError>;
}
