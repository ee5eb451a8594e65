use crate::{ClientError, GenerationClient};
use async_trait::async_trait;
use rancang_state::{Patch, Path, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of independently draftable plan sections.
///
/// Established once; nothing adds or removes sections at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Objectives,
    Understanding,
    Opening,
    Core,
    Closing,
    Checklist,
    Anecdote,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Objectives,
        SectionKind::Understanding,
        SectionKind::Opening,
        SectionKind::Core,
        SectionKind::Closing,
        SectionKind::Checklist,
        SectionKind::Anecdote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Objectives => "objectives",
            SectionKind::Understanding => "understanding",
            SectionKind::Opening => "opening",
            SectionKind::Core => "core",
            SectionKind::Closing => "closing",
            SectionKind::Checklist => "checklist",
            SectionKind::Anecdote => "anecdote",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One section's drafting flow: where it reads, what it calls, where its
/// result lands, and what the user sees when it fails.
///
/// `draft` extracts its arguments from the trigger-time snapshot, awaits
/// the client, and shapes the outcome into a patch. The patch is applied
/// to the live document afterwards, not to the snapshot, so a slow draft
/// lands on whatever the plan looks like when it arrives.
#[async_trait]
pub trait SectionGenerator: Send + Sync {
    fn kind(&self) -> SectionKind;

    /// Branches this section writes. Diagnostics only; nothing enforces
    /// disjointness between sections.
    fn writes(&self) -> Vec<Path>;

    /// Fixed, user-facing text stored when the draft fails. Never derived
    /// from the underlying error.
    fn failure_message(&self) -> &'static str;

    async fn draft(
        &self,
        plan: &Value,
        client: &dyn GenerationClient,
    ) -> Result<Patch, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable_identifiers() {
        let names: Vec<_> = SectionKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            [
                "objectives",
                "understanding",
                "opening",
                "core",
                "closing",
                "checklist",
                "anecdote"
            ]
        );
    }

    #[test]
    fn kind_serde_matches_as_str() {
        for kind in SectionKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
            let back: SectionKind = serde_json::from_value(json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
