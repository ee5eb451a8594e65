use crate::board::SectionBoard;
use crate::sections::SectionTable;
use rancang_contract::{GenerationClient, SectionKind};
use rancang_state::{paths_overlap, touched_paths, Path, PlanStore};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Drives one section's drafting flow end to end: record the start,
/// snapshot the plan, draft against the snapshot, land the patch on the
/// live document, record the outcome.
pub struct SectionComposer {
    store: PlanStore,
    board: Arc<SectionBoard>,
    table: Arc<SectionTable>,
    client: Arc<dyn GenerationClient>,
}

impl SectionComposer {
    pub fn new(
        store: PlanStore,
        board: Arc<SectionBoard>,
        table: Arc<SectionTable>,
        client: Arc<dyn GenerationClient>,
    ) -> Self {
        Self {
            store,
            board,
            table,
            client,
        }
    }

    /// Run `kind` once, through to success or failure. Never returns an
    /// error: the outcome lives in the board and, on success, the store.
    pub async fn run(&self, kind: SectionKind) {
        let Some(generator) = self.table.generator(kind) else {
            error!(section = %kind, "no generator registered for section");
            return;
        };

        self.board.begin(kind);
        info!(section = %kind, "drafting section");

        let snapshot = self.store.snapshot().await;
        match generator.draft(&snapshot, self.client.as_ref()).await {
            Ok(patch) => {
                let touched = touched_paths(&patch);
                self.warn_overlaps(kind, &touched);
                let landed: Vec<String> = touched.iter().map(Path::to_string).collect();
                match self.store.commit(kind.as_str(), patch).await {
                    Ok(_) => {
                        self.board.succeed(kind);
                        debug!(section = %kind, paths = ?landed, "section draft landed");
                    }
                    Err(err) => {
                        error!(section = %kind, error = %err, "drafted patch failed to land");
                        self.board.fail(kind, generator.failure_message());
                    }
                }
            }
            Err(err) => {
                warn!(section = %kind, error = %err, "section draft failed");
                self.board.fail(kind, generator.failure_message());
            }
        }
    }

    /// Log-only check at landing time: other in-flight sections whose
    /// declared write targets touch the paths this patch writes. Nothing is
    /// blocked; last completion wins per leaf.
    fn warn_overlaps(&self, kind: SectionKind, landing: &[Path]) {
        for other in self.board.running() {
            if other == kind {
                continue;
            }
            let Some(generator) = self.table.generator(other) else {
                continue;
            };
            let clash = generator
                .writes()
                .iter()
                .any(|theirs| landing.iter().any(|ours| paths_overlap(ours, theirs)));
            if clash {
                warn!(
                    section = %kind,
                    other = %other,
                    "concurrent drafts write overlapping branches"
                );
            }
        }
    }
}
