//! Scripted collaborators for exercising the authoring flows without a
//! live drafting service or exporter.
//!
//! Only compiled with the `test-support` feature; production code never
//! sees these.

use crate::{
    ActivityIdea, ActivityPlan, AnecdoteNote, ChecklistEntry, ClientError, ExportError,
    GenerationClient, PlanContext, PlanExporter, UnderstandingDraft,
};
use async_trait::async_trait;
use rancang_state::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// One scripted outcome, optionally delivered after an artificial delay.
#[derive(Debug, Clone)]
pub struct Scripted<T> {
    outcome: Result<T, ClientError>,
    delay: Option<Duration>,
}

impl<T> Scripted<T> {
    pub fn ok(value: T) -> Self {
        Self {
            outcome: Ok(value),
            delay: None,
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            outcome: Err(ClientError::Request(message.to_string())),
            delay: None,
        }
    }

    /// Deliver the outcome only after `delay` has elapsed.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

struct Slot<T> {
    queue: Mutex<VecDeque<Scripted<T>>>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
        }
    }
}

impl<T> Slot<T> {
    fn push(&self, scripted: Scripted<T>) {
        self.queue.lock().unwrap().push_back(scripted);
    }

    async fn take(&self, method: &'static str) -> Result<T, ClientError> {
        let next = self.queue.lock().unwrap().pop_front();
        match next {
            Some(scripted) => {
                if let Some(delay) = scripted.delay {
                    tokio::time::sleep(delay).await;
                }
                scripted.outcome
            }
            None => Err(ClientError::Request(format!(
                "no scripted response for {method}"
            ))),
        }
    }
}

/// What one drafting request looked like from the client's side.
#[derive(Debug, Clone)]
pub struct CallRecord {
    pub method: &'static str,
    pub ctx: PlanContext,
    /// Objectives context, for the request shapes that carry it.
    pub objectives: Option<String>,
    /// Selected activity, for the idea search.
    pub activity: Option<ActivityPlan>,
}

/// A [`GenerationClient`] that replays queued scripts.
///
/// Each method pops its own queue per call, so double-trigger scenarios
/// script two outcomes with different latencies. An unscripted call fails
/// loudly rather than inventing a result.
#[derive(Default)]
pub struct ScriptedClient {
    objectives: Slot<String>,
    understanding: Slot<UnderstandingDraft>,
    opening: Slot<String>,
    core: Slot<Vec<ActivityPlan>>,
    closing: Slot<String>,
    checklist: Slot<Vec<ChecklistEntry>>,
    anecdote: Slot<AnecdoteNote>,
    ideas: Slot<Vec<ActivityIdea>>,
    calls: Mutex<Vec<CallRecord>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_objectives(&self, scripted: Scripted<String>) {
        self.objectives.push(scripted);
    }

    pub fn script_understanding(&self, scripted: Scripted<UnderstandingDraft>) {
        self.understanding.push(scripted);
    }

    pub fn script_opening(&self, scripted: Scripted<String>) {
        self.opening.push(scripted);
    }

    pub fn script_core(&self, scripted: Scripted<Vec<ActivityPlan>>) {
        self.core.push(scripted);
    }

    pub fn script_closing(&self, scripted: Scripted<String>) {
        self.closing.push(scripted);
    }

    pub fn script_checklist(&self, scripted: Scripted<Vec<ChecklistEntry>>) {
        self.checklist.push(scripted);
    }

    pub fn script_anecdote(&self, scripted: Scripted<AnecdoteNote>) {
        self.anecdote.push(scripted);
    }

    pub fn script_ideas(&self, scripted: Scripted<Vec<ActivityIdea>>) {
        self.ideas.push(scripted);
    }

    /// Every request made so far, in call order.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.method == method)
            .count()
    }

    fn record(
        &self,
        method: &'static str,
        ctx: &PlanContext,
        objectives: Option<&str>,
        activity: Option<&ActivityPlan>,
    ) {
        self.calls.lock().unwrap().push(CallRecord {
            method,
            ctx: ctx.clone(),
            objectives: objectives.map(str::to_string),
            activity: activity.cloned(),
        });
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn draft_objectives(&self, ctx: &PlanContext) -> Result<String, ClientError> {
        self.record("draft_objectives", ctx, None, None);
        self.objectives.take("draft_objectives").await
    }

    async fn draft_understanding(
        &self,
        ctx: &PlanContext,
        objectives: &str,
    ) -> Result<UnderstandingDraft, ClientError> {
        self.record("draft_understanding", ctx, Some(objectives), None);
        self.understanding.take("draft_understanding").await
    }

    async fn draft_opening(
        &self,
        ctx: &PlanContext,
        objectives: &str,
    ) -> Result<String, ClientError> {
        self.record("draft_opening", ctx, Some(objectives), None);
        self.opening.take("draft_opening").await
    }

    async fn draft_core_activities(
        &self,
        ctx: &PlanContext,
        objectives: &str,
    ) -> Result<Vec<ActivityPlan>, ClientError> {
        self.record("draft_core_activities", ctx, Some(objectives), None);
        self.core.take("draft_core_activities").await
    }

    async fn draft_closing(&self, ctx: &PlanContext) -> Result<String, ClientError> {
        self.record("draft_closing", ctx, None, None);
        self.closing.take("draft_closing").await
    }

    async fn draft_checklist(
        &self,
        ctx: &PlanContext,
        objectives: &str,
    ) -> Result<Vec<ChecklistEntry>, ClientError> {
        self.record("draft_checklist", ctx, Some(objectives), None);
        self.checklist.take("draft_checklist").await
    }

    async fn draft_anecdote(&self, ctx: &PlanContext) -> Result<AnecdoteNote, ClientError> {
        self.record("draft_anecdote", ctx, None, None);
        self.anecdote.take("draft_anecdote").await
    }

    async fn suggest_activity_ideas(
        &self,
        ctx: &PlanContext,
        activity: &ActivityPlan,
    ) -> Result<Vec<ActivityIdea>, ClientError> {
        self.record("suggest_activity_ideas", ctx, None, Some(activity));
        self.ideas.take("suggest_activity_ideas").await
    }
}

/// A [`PlanExporter`] that captures every exported document.
#[derive(Default)]
pub struct RecordingExporter {
    exports: Mutex<Vec<Value>>,
    attempts: AtomicUsize,
    failure: Mutex<Option<String>>,
    delay: Mutex<Option<Duration>>,
}

impl RecordingExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent export fail with `message`.
    pub fn set_failure(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Documents successfully exported, in order.
    pub fn exports(&self) -> Vec<Value> {
        self.exports.lock().unwrap().clone()
    }

    /// How many exports were attempted, successful or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanExporter for RecordingExporter {
    async fn export(&self, plan: &Value) -> Result<(), ExportError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ExportError::Failed(message));
        }
        self.exports.lock().unwrap().push(plan.clone());
        Ok(())
    }
}
