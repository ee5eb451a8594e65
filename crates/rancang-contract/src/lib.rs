//! Contracts between the plan-authoring core and its collaborators.
//!
//! The core treats everything beyond itself as a black box behind a narrow
//! trait: the remote drafting service ([`GenerationClient`]), the document
//! exporter ([`PlanExporter`]), and the per-section drafting flows
//! ([`SectionGenerator`]) that bind the two to the document. Typed payload
//! records mirror the document's field spelling so drafted values land
//! as-is.

mod client;
mod export;
mod section;
mod types;

#[cfg(feature = "test-support")]
pub mod testing;

pub use client::{ClientError, GenerationClient, PlanContext};
pub use export::{ExportError, PlanExporter};
pub use section::{SectionGenerator, SectionKind};
pub use types::{ActivityIdea, ActivityPlan, AnecdoteNote, ChecklistEntry, UnderstandingDraft};
