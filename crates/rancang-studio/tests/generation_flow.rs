//! End-to-end section drafting against a scripted remote client.

use rancang_contract::testing::{RecordingExporter, Scripted, ScriptedClient};
use rancang_contract::{
    AnecdoteNote, ChecklistEntry, GenerationClient, SectionKind, UnderstandingDraft,
};
use rancang_state::path;
use rancang_studio::{starter_plan, PlanStudio};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn studio_with(client: &Arc<ScriptedClient>) -> PlanStudio {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    PlanStudio::builder()
        .with_client(Arc::clone(client) as Arc<dyn GenerationClient>)
        .with_exporter(Arc::new(RecordingExporter::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn objectives_success_populates_the_field_and_clears_the_record() {
    let client = Arc::new(ScriptedClient::new());
    client.script_objectives(Scripted::ok("Anak mengenal bagian tanaman.".to_string()));
    let studio = studio_with(&client);

    studio.generate_section(SectionKind::Objectives).await;

    assert_eq!(
        studio.plan().await["design"]["tujuanPembelajaran"],
        "Anak mengenal bagian tanaman."
    );
    let status = studio.section_status(SectionKind::Objectives);
    assert!(!status.running);
    assert_eq!(status.error, None);

    let history = studio.history().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].source, "objectives");
}

#[tokio::test]
async fn a_failed_draft_leaves_the_plan_and_stores_the_fixed_message() {
    let client = Arc::new(ScriptedClient::new());
    client.script_opening(Scripted::fail("503 from upstream"));
    let studio = studio_with(&client);

    studio.generate_section(SectionKind::Opening).await;

    assert_eq!(studio.plan().await, starter_plan());
    assert!(studio.history().await.is_empty());

    let status = studio.section_status(SectionKind::Opening);
    assert!(!status.running);
    assert_eq!(
        status.error.as_deref(),
        Some("Gagal merancang kegiatan pembuka. Silakan coba lagi.")
    );
}

#[tokio::test]
async fn failed_section_can_be_retriggered_immediately() {
    let client = Arc::new(ScriptedClient::new());
    client.script_opening(Scripted::fail("503 from upstream"));
    client.script_opening(Scripted::ok("Bernyanyi bersama tentang tanaman.".to_string()));
    let studio = studio_with(&client);

    studio.generate_section(SectionKind::Opening).await;
    assert!(studio.section_status(SectionKind::Opening).error.is_some());

    studio.generate_section(SectionKind::Opening).await;

    let status = studio.section_status(SectionKind::Opening);
    assert!(!status.running);
    assert_eq!(status.error, None);
    assert_eq!(
        studio.plan().await["kegiatan"]["pembuka"],
        "Bernyanyi bersama tentang tanaman."
    );
}

#[tokio::test]
async fn drafting_reads_the_trigger_time_snapshot_but_lands_on_the_live_plan() {
    let client = Arc::new(ScriptedClient::new());
    client.script_opening(
        Scripted::ok("Bernyanyi pembuka.".to_string()).after(Duration::from_millis(120)),
    );
    let studio = studio_with(&client);

    studio
        .edit_field(path!("design", "tujuanPembelajaran"), json!("Tujuan awal."))
        .await
        .unwrap();

    let draft = studio.generate_section(SectionKind::Opening);
    let edit = async {
        sleep(Duration::from_millis(40)).await;
        studio
            .edit_field(
                path!("design", "tujuanPembelajaran"),
                json!("Tujuan diperbarui."),
            )
            .await
            .unwrap();
    };
    tokio::join!(draft, edit);

    // The request argument came from the snapshot taken at trigger time.
    assert_eq!(client.calls()[0].objectives.as_deref(), Some("Tujuan awal."));

    // The patch landed on the document current at arrival, so the edit made
    // while the draft was in flight survives next to the drafted opening.
    let plan = studio.plan().await;
    assert_eq!(plan["design"]["tujuanPembelajaran"], "Tujuan diperbarui.");
    assert_eq!(plan["kegiatan"]["pembuka"], "Bernyanyi pembuka.");
}

#[tokio::test]
async fn double_trigger_lands_by_completion_order() {
    let client = Arc::new(ScriptedClient::new());
    client.script_opening(Scripted::ok("pertama".to_string()).after(Duration::from_millis(150)));
    client.script_opening(Scripted::ok("kedua".to_string()).after(Duration::from_millis(30)));
    let studio = studio_with(&client);

    let first = studio.spawn_section(SectionKind::Opening);
    sleep(Duration::from_millis(10)).await;
    let second = studio.spawn_section(SectionKind::Opening);

    // The second trigger resolves first and lands first.
    sleep(Duration::from_millis(80)).await;
    assert_eq!(studio.plan().await["kegiatan"]["pembuka"], "kedua");

    // The first trigger resolves later and wins the final write.
    first.await.unwrap();
    second.await.unwrap();
    assert_eq!(studio.plan().await["kegiatan"]["pembuka"], "pertama");
    assert_eq!(studio.history().await.len(), 2);
    assert!(!studio.section_status(SectionKind::Opening).running);
}

#[tokio::test]
async fn concurrent_sections_land_their_own_results() {
    let client = Arc::new(ScriptedClient::new());
    client.script_objectives(
        Scripted::ok("Anak mengenal pola.".to_string()).after(Duration::from_millis(120)),
    );
    client.script_closing(
        Scripted::ok("Doa penutup bersama.".to_string()).after(Duration::from_millis(20)),
    );
    let studio = studio_with(&client);

    tokio::join!(
        studio.generate_section(SectionKind::Objectives),
        studio.generate_section(SectionKind::Closing),
    );

    let plan = studio.plan().await;
    assert_eq!(plan["design"]["tujuanPembelajaran"], "Anak mengenal pola.");
    assert_eq!(plan["kegiatan"]["penutup"], "Doa penutup bersama.");

    let sources: Vec<_> = studio
        .history()
        .await
        .into_iter()
        .map(|record| record.source)
        .collect();
    assert_eq!(sources, ["closing", "objectives"]);

    for kind in [SectionKind::Objectives, SectionKind::Closing] {
        let status = studio.section_status(kind);
        assert!(!status.running);
        assert_eq!(status.error, None);
    }
}

#[tokio::test]
async fn spawned_section_reports_running_until_the_draft_lands() {
    let client = Arc::new(ScriptedClient::new());
    client.script_objectives(
        Scripted::ok("Anak mengenal pola.".to_string()).after(Duration::from_millis(80)),
    );
    let studio = studio_with(&client);

    let handle = studio.spawn_section(SectionKind::Objectives);
    sleep(Duration::from_millis(25)).await;
    assert!(studio.section_status(SectionKind::Objectives).running);

    handle.await.unwrap();
    let status = studio.section_status(SectionKind::Objectives);
    assert!(!status.running);
    assert_eq!(
        studio.plan().await["design"]["tujuanPembelajaran"],
        "Anak mengenal pola."
    );
}

#[tokio::test]
async fn understanding_reads_empty_objectives_before_they_are_drafted() {
    let client = Arc::new(ScriptedClient::new());
    client.script_understanding(Scripted::ok(UnderstandingDraft {
        pemahaman_bermakna: "Tanaman adalah makhluk hidup.".to_string(),
        pertanyaan_pemantik: vec!["Mengapa daun hijau?".to_string()],
        kosakata_kunci: vec!["akar".to_string()],
    }));
    let studio = studio_with(&client);

    studio.generate_section(SectionKind::Understanding).await;

    // Triggering out of order is legal; the extractor sees the default.
    assert_eq!(client.calls()[0].objectives.as_deref(), Some(""));

    let plan = studio.plan().await;
    assert_eq!(plan["design"]["pemahamanBermakna"], "Tanaman adalah makhluk hidup.");
    assert_eq!(plan["design"]["pertanyaanPemantik"], json!(["Mengapa daun hijau?"]));
    assert_eq!(plan["design"]["kosakataKunci"], json!(["akar"]));
}

#[tokio::test]
async fn anecdote_notes_accumulate_across_runs() {
    let client = Arc::new(ScriptedClient::new());
    client.script_anecdote(Scripted::ok(AnecdoteNote {
        fokus: "Motorik halus".to_string(),
        catatan: "Amati cara anak memegang sekop.".to_string(),
    }));
    client.script_anecdote(Scripted::ok(AnecdoteNote {
        fokus: "Bahasa".to_string(),
        catatan: "Amati kosakata baru anak.".to_string(),
    }));
    let studio = studio_with(&client);

    studio.generate_section(SectionKind::Anecdote).await;
    studio.generate_section(SectionKind::Anecdote).await;

    assert_eq!(
        studio.plan().await["asesmen"]["catatanAnekdot"],
        json!([
            {"fokus": "Motorik halus", "catatan": "Amati cara anak memegang sekop."},
            {"fokus": "Bahasa", "catatan": "Amati kosakata baru anak."}
        ])
    );
    assert_eq!(studio.history().await.len(), 2);
}

#[tokio::test]
async fn checklist_rows_land_with_sequential_numbers() {
    let client = Arc::new(ScriptedClient::new());
    client.script_checklist(Scripted::ok(vec![
        ChecklistEntry {
            no: 9,
            indikator: "Mengenal bagian tanaman".to_string(),
            tercapai: false,
        },
        ChecklistEntry {
            no: 9,
            indikator: "Menyiram tanaman mandiri".to_string(),
            tercapai: false,
        },
        ChecklistEntry {
            no: 2,
            indikator: "Menceritakan hasil pengamatan".to_string(),
            tercapai: false,
        },
    ]));
    let studio = studio_with(&client);

    studio.generate_section(SectionKind::Checklist).await;

    let rows = studio.plan().await["asesmen"]["ceklis"].clone();
    let numbers: Vec<_> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["no"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, [1, 2, 3]);
}

#[tokio::test]
async fn a_drafted_patch_that_misses_the_document_fails_that_section() {
    let client = Arc::new(ScriptedClient::new());
    client.script_closing(Scripted::ok("Doa penutup.".to_string()));
    let seed = json!({"informasiUmum": {"topik": "", "kelas": ""}});
    let studio = PlanStudio::builder()
        .with_seed(seed.clone())
        .with_client(Arc::clone(&client) as Arc<dyn GenerationClient>)
        .with_exporter(Arc::new(RecordingExporter::new()))
        .build()
        .unwrap();

    studio.generate_section(SectionKind::Closing).await;

    let status = studio.section_status(SectionKind::Closing);
    assert!(!status.running);
    assert_eq!(
        status.error.as_deref(),
        Some("Gagal merancang kegiatan penutup. Silakan coba lagi.")
    );
    assert_eq!(studio.plan().await, seed);
    assert!(studio.history().await.is_empty());
}
