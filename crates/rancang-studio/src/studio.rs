use crate::board::{SectionBoard, SectionStatus};
use crate::composer::SectionComposer;
use crate::export::ExportFlag;
use crate::ideas::{IdeaPanel, IdeaPanelView};
use crate::sections::{plan_context, SectionTable};
use crate::seed::starter_plan;
use rancang_contract::{ActivityPlan, GenerationClient, PlanExporter, SectionKind};
use rancang_state::{path, CommitRecord, Op, Patch, Path, PlanStore, StateError, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Commit source recorded for direct field edits.
const EDITOR_SOURCE: &str = "editor";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("no generation client configured")]
    MissingClient,
    #[error("no exporter configured")]
    MissingExporter,
}

/// Assembles a [`PlanStudio`]. The seed document and section table have
/// defaults; the client and exporter do not.
pub struct PlanStudioBuilder {
    seed: Value,
    table: SectionTable,
    client: Option<Arc<dyn GenerationClient>>,
    exporter: Option<Arc<dyn PlanExporter>>,
}

impl PlanStudioBuilder {
    pub fn new() -> Self {
        Self {
            seed: starter_plan(),
            table: SectionTable::standard(),
            client: None,
            exporter: None,
        }
    }

    /// Start from `seed` instead of the empty starter plan.
    pub fn with_seed(mut self, seed: Value) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_table(mut self, table: SectionTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_client(mut self, client: Arc<dyn GenerationClient>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_exporter(mut self, exporter: Arc<dyn PlanExporter>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    pub fn build(self) -> Result<PlanStudio, BuildError> {
        let client = self.client.ok_or(BuildError::MissingClient)?;
        let exporter = self.exporter.ok_or(BuildError::MissingExporter)?;

        let store = PlanStore::new(self.seed);
        let board = Arc::new(SectionBoard::new());
        let composer = Arc::new(SectionComposer::new(
            store.clone(),
            Arc::clone(&board),
            Arc::new(self.table),
            Arc::clone(&client),
        ));

        Ok(PlanStudio {
            store,
            board,
            composer,
            panel: Arc::new(IdeaPanel::new()),
            export_flag: Arc::new(ExportFlag::new()),
            exporter,
            client,
        })
    }
}

impl Default for PlanStudioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The authoring session: one plan document, the section flows over it,
/// the idea panel, and export.
///
/// Clones share every piece of state, so one clone per UI surface or
/// spawned task is the intended usage.
#[derive(Clone)]
pub struct PlanStudio {
    store: PlanStore,
    board: Arc<SectionBoard>,
    composer: Arc<SectionComposer>,
    panel: Arc<IdeaPanel>,
    export_flag: Arc<ExportFlag>,
    exporter: Arc<dyn PlanExporter>,
    client: Arc<dyn GenerationClient>,
}

impl std::fmt::Debug for PlanStudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanStudio").finish_non_exhaustive()
    }
}

impl PlanStudio {
    pub fn builder() -> PlanStudioBuilder {
        PlanStudioBuilder::new()
    }

    /// The current plan document.
    pub async fn plan(&self) -> Value {
        self.store.snapshot().await
    }

    /// Directly set one field, as typed in the plan form. Strict
    /// addressing: a path through a missing branch is the caller's bug and
    /// surfaces as an error, leaving the plan untouched.
    pub async fn edit_field(&self, path: Path, value: Value) -> Result<Value, StateError> {
        debug!(path = %path, "editing field");
        self.store
            .commit(EDITOR_SOURCE, Patch::new().with_op(Op::set(path, value)))
            .await
    }

    /// Remove the core activity at `index`. Out of bounds surfaces as an
    /// error; the remaining activities keep their order.
    pub async fn remove_core_activity(&self, index: usize) -> Result<Value, StateError> {
        debug!(index, "removing core activity");
        self.store
            .commit(
                EDITOR_SOURCE,
                Patch::new().with_op(Op::delete(path!("kegiatan", "inti", index))),
            )
            .await
    }

    /// Run one section's drafting flow to completion.
    pub async fn generate_section(&self, kind: SectionKind) {
        self.composer.run(kind).await;
    }

    /// Trigger one section's drafting flow and return immediately. The
    /// outcome lands in the board and the document whenever the remote
    /// call resolves; the handle is only for callers that want to await it.
    pub fn spawn_section(&self, kind: SectionKind) -> JoinHandle<()> {
        let composer = Arc::clone(&self.composer);
        tokio::spawn(async move {
            composer.run(kind).await;
        })
    }

    pub fn section_status(&self, kind: SectionKind) -> SectionStatus {
        self.board.status(kind)
    }

    pub fn sections(&self) -> BTreeMap<SectionKind, SectionStatus> {
        self.board.snapshot()
    }

    /// Open the idea panel for `activity` and start the search. Returns
    /// once the search is in flight; the panel view tracks the rest.
    pub async fn open_activity_ideas(&self, activity: ActivityPlan) {
        let ctx = plan_context(&self.store.snapshot().await);
        let ticket = self.panel.open(activity.clone());
        info!(activity = %activity.nama, "searching activity ideas");

        let client = Arc::clone(&self.client);
        let panel = Arc::clone(&self.panel);
        tokio::spawn(async move {
            match client.suggest_activity_ideas(&ctx, &activity).await {
                Ok(ideas) => {
                    if !panel.succeed(ticket, ideas) {
                        debug!(activity = %activity.nama, "late idea result discarded");
                    }
                }
                Err(err) => {
                    warn!(activity = %activity.nama, error = %err, "idea search failed");
                    if !panel.fail(ticket) {
                        debug!(activity = %activity.nama, "late idea failure discarded");
                    }
                }
            }
        });
    }

    /// Close the idea panel. An in-flight search keeps running but its
    /// result is discarded on arrival.
    pub fn close_activity_ideas(&self) {
        self.panel.close();
    }

    pub fn idea_panel(&self) -> IdeaPanelView {
        self.panel.view()
    }

    /// Export the current plan. Failures are logged and absorbed; the
    /// advisory busy flag is set for the duration either way.
    pub async fn export_plan(&self) {
        self.export_flag.begin();
        info!("exporting plan");
        let plan = self.store.snapshot().await;
        if let Err(err) = self.exporter.export(&plan).await {
            warn!(error = %err, "plan export failed");
        }
        self.export_flag.finish();
    }

    pub fn is_exporting(&self) -> bool {
        self.export_flag.is_busy()
    }

    /// Every commit of this session, oldest first.
    pub async fn history(&self) -> Vec<CommitRecord> {
        self.store.history().await
    }
}
