use rancang_contract::SectionKind;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// One section's task record.
///
/// Deliberately a two-field record rather than a phase enum: idle-never-run
/// and idle-after-success look the same to the UI, and a section is never
/// running with an error at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionStatus {
    pub running: bool,
    pub error: Option<String>,
}

/// Per-section task records for the fixed section set.
///
/// Every section owns its cell. Transitions mutate exactly one entry in
/// place, so a completion on one section can never clobber, or be seen
/// through, another section's record.
#[derive(Debug)]
pub struct SectionBoard {
    cells: Mutex<BTreeMap<SectionKind, SectionStatus>>,
}

impl SectionBoard {
    /// All sections start `{ running: false, error: None }`.
    pub fn new() -> Self {
        let cells = SectionKind::ALL
            .iter()
            .map(|kind| (*kind, SectionStatus::default()))
            .collect();
        Self {
            cells: Mutex::new(cells),
        }
    }

    /// Mark `kind` running and clear any previous error. Legal while
    /// already running; a second run of the same section is allowed.
    pub fn begin(&self, kind: SectionKind) {
        self.update(kind, |cell| {
            cell.running = true;
            cell.error = None;
        });
    }

    pub fn succeed(&self, kind: SectionKind) {
        self.update(kind, |cell| {
            cell.running = false;
            cell.error = None;
        });
    }

    pub fn fail(&self, kind: SectionKind, message: &str) {
        self.update(kind, |cell| {
            cell.running = false;
            cell.error = Some(message.to_string());
        });
    }

    pub fn status(&self, kind: SectionKind) -> SectionStatus {
        self.cells
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> BTreeMap<SectionKind, SectionStatus> {
        self.cells.lock().unwrap().clone()
    }

    /// Kinds currently running, in stable order.
    pub fn running(&self) -> Vec<SectionKind> {
        self.cells
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, status)| status.running)
            .map(|(kind, _)| *kind)
            .collect()
    }

    fn update(&self, kind: SectionKind, apply: impl FnOnce(&mut SectionStatus)) {
        let mut cells = self.cells.lock().unwrap();
        apply(cells.entry(kind).or_default());
    }
}

impl Default for SectionBoard {
    fn default() -> Self {
        Self::new()
    }
}
