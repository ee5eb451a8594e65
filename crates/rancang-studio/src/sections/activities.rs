use super::{draft_value, objectives_context, plan_context};
use async_trait::async_trait;
use rancang_contract::{ClientError, GenerationClient, SectionGenerator, SectionKind};
use rancang_state::{path, Op, Patch, Path, Value};

/// Drafts the `kegiatan.pembuka` narrative.
pub struct OpeningSection;

#[async_trait]
impl SectionGenerator for OpeningSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Opening
    }

    fn writes(&self) -> Vec<Path> {
        vec![path!("kegiatan", "pembuka")]
    }

    fn failure_message(&self) -> &'static str {
        "Gagal merancang kegiatan pembuka. Silakan coba lagi."
    }

    async fn draft(
        &self,
        plan: &Value,
        client: &dyn GenerationClient,
    ) -> Result<Patch, ClientError> {
        let ctx = plan_context(plan);
        let objectives = objectives_context(plan);
        let opening = client.draft_opening(&ctx, &objectives).await?;
        Ok(Patch::new().with_op(Op::set(
            path!("kegiatan", "pembuka"),
            Value::String(opening),
        )))
    }
}

/// Drafts `kegiatan.inti` as a whole: the landed list replaces whatever
/// activities were there before.
pub struct CoreSection;

#[async_trait]
impl SectionGenerator for CoreSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Core
    }

    fn writes(&self) -> Vec<Path> {
        vec![path!("kegiatan", "inti")]
    }

    fn failure_message(&self) -> &'static str {
        "Gagal merancang kegiatan inti. Silakan coba lagi."
    }

    async fn draft(
        &self,
        plan: &Value,
        client: &dyn GenerationClient,
    ) -> Result<Patch, ClientError> {
        let ctx = plan_context(plan);
        let objectives = objectives_context(plan);
        let activities = client.draft_core_activities(&ctx, &objectives).await?;
        Ok(Patch::new().with_op(Op::set(
            path!("kegiatan", "inti"),
            draft_value(&activities)?,
        )))
    }
}

/// Drafts `kegiatan.penutup`.
pub struct ClosingSection;

#[async_trait]
impl SectionGenerator for ClosingSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Closing
    }

    fn writes(&self) -> Vec<Path> {
        vec![path!("kegiatan", "penutup")]
    }

    fn failure_message(&self) -> &'static str {
        "Gagal merancang kegiatan penutup. Silakan coba lagi."
    }

    async fn draft(
        &self,
        plan: &Value,
        client: &dyn GenerationClient,
    ) -> Result<Patch, ClientError> {
        let ctx = plan_context(plan);
        let closing = client.draft_closing(&ctx).await?;
        Ok(Patch::new().with_op(Op::set(
            path!("kegiatan", "penutup"),
            Value::String(closing),
        )))
    }
}
