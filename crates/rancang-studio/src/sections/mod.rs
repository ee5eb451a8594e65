//! The fixed section table and the seven drafting flows behind it.
//!
//! Each generator reads its inputs from the trigger-time snapshot it is
//! handed, awaits one client call, and shapes the result into a patch.
//! Adding a section means adding a generator here; nothing else in the
//! studio enumerates sections by hand.

mod activities;
mod assessment;
mod design;

pub use activities::{ClosingSection, CoreSection, OpeningSection};
pub use assessment::{AnecdoteSection, ChecklistSection};
pub use design::{ObjectivesSection, UnderstandingSection};

use rancang_contract::{ClientError, PlanContext, SectionGenerator, SectionKind};
use rancang_state::{get_at_path, path, Path, Value};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One generator per section kind, established at startup.
pub struct SectionTable {
    generators: BTreeMap<SectionKind, Arc<dyn SectionGenerator>>,
}

impl SectionTable {
    /// The lesson-plan sections in document order.
    pub fn standard() -> Self {
        let generators: [Arc<dyn SectionGenerator>; 7] = [
            Arc::new(ObjectivesSection),
            Arc::new(UnderstandingSection),
            Arc::new(OpeningSection),
            Arc::new(CoreSection),
            Arc::new(ClosingSection),
            Arc::new(ChecklistSection),
            Arc::new(AnecdoteSection),
        ];
        Self {
            generators: generators
                .into_iter()
                .map(|generator| (generator.kind(), generator))
                .collect(),
        }
    }

    pub fn generator(&self, kind: SectionKind) -> Option<Arc<dyn SectionGenerator>> {
        self.generators.get(&kind).cloned()
    }

    pub fn kinds(&self) -> Vec<SectionKind> {
        self.generators.keys().copied().collect()
    }
}

/// Plan-level request context, read from the snapshot. Fields not filled
/// in yet travel as empty strings.
pub(crate) fn plan_context(plan: &Value) -> PlanContext {
    PlanContext {
        topik: string_at(plan, &path!("informasiUmum", "topik")),
        kelas: string_at(plan, &path!("informasiUmum", "kelas")),
    }
}

/// Objectives drafted so far. Empty until the objectives section has run.
fn objectives_context(plan: &Value) -> String {
    string_at(plan, &path!("design", "tujuanPembelajaran"))
}

fn string_at(plan: &Value, path: &Path) -> String {
    get_at_path(plan, path)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn draft_value<T: Serialize>(payload: &T) -> Result<Value, ClientError> {
    serde_json::to_value(payload).map_err(|err| ClientError::Decode(err.to_string()))
}
