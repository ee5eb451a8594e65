//! The modul-ajar authoring session.
//!
//! One [`PlanStudio`] owns a lesson-plan document and everything that
//! changes it: direct field edits, the seven AI-drafted section flows, the
//! single activity-idea panel, and export. Sections draft concurrently and
//! land by completion order; a failed draft leaves the plan untouched and
//! stores a fixed Indonesian message on that section's record.
//!
//! The crate is UI-agnostic. A rendering layer holds a clone of the
//! studio, calls the trigger methods, and reads the document, the section
//! records, and the idea-panel view back out.

mod board;
mod composer;
mod export;
mod ideas;
mod sections;
mod seed;
mod studio;

pub use board::{SectionBoard, SectionStatus};
pub use composer::SectionComposer;
pub use export::ExportFlag;
pub use ideas::{IdeaPanel, IdeaPanelView, IdeaTicket, IDEA_FAILURE_MESSAGE};
pub use sections::{
    AnecdoteSection, ChecklistSection, ClosingSection, CoreSection, ObjectivesSection,
    OpeningSection, SectionTable, UnderstandingSection,
};
pub use seed::starter_plan;
pub use studio::{BuildError, PlanStudio, PlanStudioBuilder};
