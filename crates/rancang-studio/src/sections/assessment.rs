use super::{draft_value, objectives_context, plan_context};
use async_trait::async_trait;
use rancang_contract::{ClientError, GenerationClient, SectionGenerator, SectionKind};
use rancang_state::{path, Op, Patch, Path, Value};

/// Drafts the observation checklist. Row numbers are assigned here from
/// list position, whatever the drafted entries carried.
pub struct ChecklistSection;

#[async_trait]
impl SectionGenerator for ChecklistSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Checklist
    }

    fn writes(&self) -> Vec<Path> {
        vec![path!("asesmen", "ceklis")]
    }

    fn failure_message(&self) -> &'static str {
        "Gagal menyusun asesmen ceklis. Silakan coba lagi."
    }

    async fn draft(
        &self,
        plan: &Value,
        client: &dyn GenerationClient,
    ) -> Result<Patch, ClientError> {
        let ctx = plan_context(plan);
        let objectives = objectives_context(plan);
        let mut entries = client.draft_checklist(&ctx, &objectives).await?;
        for (position, entry) in entries.iter_mut().enumerate() {
            entry.no = position as u32 + 1;
        }
        Ok(Patch::new().with_op(Op::set(
            path!("asesmen", "ceklis"),
            draft_value(&entries)?,
        )))
    }
}

/// Drafts one anecdotal-record note and appends it; notes from earlier
/// runs stay in place.
pub struct AnecdoteSection;

#[async_trait]
impl SectionGenerator for AnecdoteSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Anecdote
    }

    fn writes(&self) -> Vec<Path> {
        vec![path!("asesmen", "catatanAnekdot")]
    }

    fn failure_message(&self) -> &'static str {
        "Gagal menyusun catatan anekdot. Silakan coba lagi."
    }

    async fn draft(
        &self,
        plan: &Value,
        client: &dyn GenerationClient,
    ) -> Result<Patch, ClientError> {
        let ctx = plan_context(plan);
        let note = client.draft_anecdote(&ctx).await?;
        Ok(Patch::new().with_op(Op::append(
            path!("asesmen", "catatanAnekdot"),
            draft_value(&note)?,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::starter_plan;
    use rancang_contract::testing::{Scripted, ScriptedClient};
    use rancang_contract::{AnecdoteNote, ChecklistEntry};
    use rancang_state::apply_patch;
    use serde_json::json;

    #[tokio::test]
    async fn checklist_rows_are_renumbered_by_position() {
        let client = ScriptedClient::new();
        client.script_checklist(Scripted::ok(vec![
            ChecklistEntry {
                no: 7,
                indikator: "Mengenal bagian tanaman".to_string(),
                tercapai: false,
            },
            ChecklistEntry {
                no: 0,
                indikator: "Menyiram tanaman mandiri".to_string(),
                tercapai: false,
            },
        ]));

        let patch = ChecklistSection.draft(&starter_plan(), &client).await.unwrap();
        let next = apply_patch(&starter_plan(), &patch).unwrap();
        assert_eq!(
            next["asesmen"]["ceklis"],
            json!([
                {"no": 1, "indikator": "Mengenal bagian tanaman", "tercapai": false},
                {"no": 2, "indikator": "Menyiram tanaman mandiri", "tercapai": false}
            ])
        );
    }

    #[tokio::test]
    async fn anecdote_appends_after_existing_notes() {
        let client = ScriptedClient::new();
        client.script_anecdote(Scripted::ok(AnecdoteNote {
            fokus: "Motorik halus".to_string(),
            catatan: "Amati cara anak memegang sekop kecil.".to_string(),
        }));

        let mut plan = starter_plan();
        plan["asesmen"]["catatanAnekdot"] =
            json!([{"fokus": "Bahasa", "catatan": "Catatan lama."}]);

        let patch = AnecdoteSection.draft(&plan, &client).await.unwrap();
        let next = apply_patch(&plan, &patch).unwrap();
        assert_eq!(
            next["asesmen"]["catatanAnekdot"],
            json!([
                {"fokus": "Bahasa", "catatan": "Catatan lama."},
                {"fokus": "Motorik halus", "catatan": "Amati cara anak memegang sekop kecil."}
            ])
        );
    }
}
