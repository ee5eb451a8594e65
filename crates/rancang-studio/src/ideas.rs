use rancang_contract::{ActivityIdea, ActivityPlan};
use serde::Serialize;
use std::sync::Mutex;

/// Fixed, user-facing text stored when the idea search fails.
pub const IDEA_FAILURE_MESSAGE: &str = "Gagal mencari ide kegiatan. Silakan coba lagi.";

/// What the rendering layer sees of the idea panel.
///
/// Closed, opening, loaded, and errored are derived from the fields rather
/// than stored: `open` alone distinguishes closed, and an open panel is
/// opening while `running`, errored once `error` is set, loaded otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdeaPanelView {
    pub open: bool,
    pub activity: Option<ActivityPlan>,
    pub ideas: Vec<ActivityIdea>,
    pub running: bool,
    pub error: Option<String>,
}

impl IdeaPanelView {
    pub fn is_closed(&self) -> bool {
        !self.open
    }

    pub fn is_opening(&self) -> bool {
        self.open && self.running
    }

    pub fn is_loaded(&self) -> bool {
        self.open && !self.running && self.error.is_none()
    }

    pub fn is_errored(&self) -> bool {
        self.open && !self.running && self.error.is_some()
    }
}

/// Proof that a completion belongs to the panel's current opening.
///
/// `open` hands one out; `close` and a later `open` both invalidate every
/// ticket issued before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdeaTicket(u64);

#[derive(Debug, Default)]
struct PanelCell {
    epoch: u64,
    view: IdeaPanelView,
}

/// The single idea-search slot.
///
/// There is one panel for the whole studio. Opening replaces whatever was
/// there; closing discards selection, results, and error unconditionally.
/// An in-flight search is never aborted — its completion is simply refused
/// when its ticket is no longer current, so a result arriving after close
/// cannot resurrect the panel.
#[derive(Debug, Default)]
pub struct IdeaPanel {
    cell: Mutex<PanelCell>,
}

impl IdeaPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `activity` and enter the opening state, dropping any prior
    /// selection, results, and error.
    pub fn open(&self, activity: ActivityPlan) -> IdeaTicket {
        let mut cell = self.cell.lock().unwrap();
        cell.epoch += 1;
        cell.view = IdeaPanelView {
            open: true,
            activity: Some(activity),
            ideas: Vec::new(),
            running: true,
            error: None,
        };
        IdeaTicket(cell.epoch)
    }

    /// Reset to closed regardless of any in-flight search.
    pub fn close(&self) {
        let mut cell = self.cell.lock().unwrap();
        cell.epoch += 1;
        cell.view = IdeaPanelView::default();
    }

    /// Land a successful search. Returns false, changing nothing, when
    /// `ticket` is no longer the current opening.
    pub fn succeed(&self, ticket: IdeaTicket, ideas: Vec<ActivityIdea>) -> bool {
        self.settle(ticket, |view| {
            view.ideas = ideas;
            view.error = None;
        })
    }

    /// Land a failed search as the fixed message. Same staleness rule as
    /// [`succeed`](IdeaPanel::succeed).
    pub fn fail(&self, ticket: IdeaTicket) -> bool {
        self.settle(ticket, |view| {
            view.ideas = Vec::new();
            view.error = Some(IDEA_FAILURE_MESSAGE.to_string());
        })
    }

    pub fn view(&self) -> IdeaPanelView {
        self.cell.lock().unwrap().view.clone()
    }

    fn settle(&self, ticket: IdeaTicket, apply: impl FnOnce(&mut IdeaPanelView)) -> bool {
        let mut cell = self.cell.lock().unwrap();
        if cell.epoch != ticket.0 {
            return false;
        }
        cell.view.running = false;
        apply(&mut cell.view);
        true
    }
}
