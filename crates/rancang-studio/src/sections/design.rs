use super::{draft_value, objectives_context, plan_context};
use async_trait::async_trait;
use rancang_contract::{ClientError, GenerationClient, SectionGenerator, SectionKind};
use rancang_state::{path, Op, Patch, Path, Value};

/// Drafts `design.tujuanPembelajaran` from the plan topic and grade.
pub struct ObjectivesSection;

#[async_trait]
impl SectionGenerator for ObjectivesSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Objectives
    }

    fn writes(&self) -> Vec<Path> {
        vec![path!("design", "tujuanPembelajaran")]
    }

    fn failure_message(&self) -> &'static str {
        "Gagal merancang tujuan pembelajaran. Silakan coba lagi."
    }

    async fn draft(
        &self,
        plan: &Value,
        client: &dyn GenerationClient,
    ) -> Result<Patch, ClientError> {
        let ctx = plan_context(plan);
        let objectives = client.draft_objectives(&ctx).await?;
        Ok(Patch::new().with_op(Op::set(
            path!("design", "tujuanPembelajaran"),
            Value::String(objectives),
        )))
    }
}

/// Drafts the meaningful-understanding block. One call returns the
/// narrative, the trigger questions, and the key vocabulary; the patch
/// lands them as three sibling fields.
pub struct UnderstandingSection;

#[async_trait]
impl SectionGenerator for UnderstandingSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Understanding
    }

    fn writes(&self) -> Vec<Path> {
        vec![
            path!("design", "pemahamanBermakna"),
            path!("design", "pertanyaanPemantik"),
            path!("design", "kosakataKunci"),
        ]
    }

    fn failure_message(&self) -> &'static str {
        "Gagal merancang pemahaman bermakna. Silakan coba lagi."
    }

    async fn draft(
        &self,
        plan: &Value,
        client: &dyn GenerationClient,
    ) -> Result<Patch, ClientError> {
        let ctx = plan_context(plan);
        let objectives = objectives_context(plan);
        let draft = client.draft_understanding(&ctx, &objectives).await?;
        Ok(Patch::with_ops(vec![
            Op::set(
                path!("design", "pemahamanBermakna"),
                Value::String(draft.pemahaman_bermakna),
            ),
            Op::set(
                path!("design", "pertanyaanPemantik"),
                draft_value(&draft.pertanyaan_pemantik)?,
            ),
            Op::set(
                path!("design", "kosakataKunci"),
                draft_value(&draft.kosakata_kunci)?,
            ),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::starter_plan;
    use rancang_contract::testing::{Scripted, ScriptedClient};
    use rancang_contract::UnderstandingDraft;
    use rancang_state::apply_patch;
    use serde_json::json;

    #[tokio::test]
    async fn objectives_draft_sends_plan_context() {
        let client = ScriptedClient::new();
        client.script_objectives(Scripted::ok("Anak mengenal bagian tanaman.".to_string()));

        let mut plan = starter_plan();
        plan["informasiUmum"]["topik"] = Value::String("Tanaman".to_string());
        plan["informasiUmum"]["kelas"] = Value::String("B".to_string());

        let patch = ObjectivesSection.draft(&plan, &client).await.unwrap();
        let next = apply_patch(&plan, &patch).unwrap();
        assert_eq!(
            next["design"]["tujuanPembelajaran"],
            json!("Anak mengenal bagian tanaman.")
        );

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "draft_objectives");
        assert_eq!(calls[0].ctx.topik, "Tanaman");
        assert_eq!(calls[0].ctx.kelas, "B");
    }

    #[tokio::test]
    async fn understanding_draft_splits_into_three_fields() {
        let client = ScriptedClient::new();
        client.script_understanding(Scripted::ok(UnderstandingDraft {
            pemahaman_bermakna: "Tanaman adalah makhluk hidup.".to_string(),
            pertanyaan_pemantik: vec!["Mengapa daun hijau?".to_string()],
            kosakata_kunci: vec!["akar".to_string(), "batang".to_string()],
        }));

        let mut plan = starter_plan();
        plan["design"]["tujuanPembelajaran"] =
            Value::String("Anak mengenal bagian tanaman.".to_string());

        let patch = UnderstandingSection.draft(&plan, &client).await.unwrap();
        assert_eq!(patch.len(), 3);

        let next = apply_patch(&plan, &patch).unwrap();
        assert_eq!(
            next["design"]["pemahamanBermakna"],
            json!("Tanaman adalah makhluk hidup.")
        );
        assert_eq!(next["design"]["pertanyaanPemantik"], json!(["Mengapa daun hijau?"]));
        assert_eq!(next["design"]["kosakataKunci"], json!(["akar", "batang"]));

        // The already-drafted objectives ride along as request context.
        assert_eq!(
            client.calls()[0].objectives.as_deref(),
            Some("Anak mengenal bagian tanaman.")
        );
    }
}
