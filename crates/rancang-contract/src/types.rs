use serde::{Deserialize, Serialize};

/// One core activity in `kegiatan.inti`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPlan {
    pub nama: String,
    pub deskripsi: String,
    #[serde(default)]
    pub alat_bahan: Vec<String>,
}

/// One observable-indicator row of the `asesmen.ceklis` instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistEntry {
    /// 1-based row number. Assigned when the drafted list lands, whatever
    /// the raw result carried here.
    #[serde(default)]
    pub no: u32,
    pub indikator: String,
    #[serde(default)]
    pub tercapai: bool,
}

/// Composite framing draft, split across three `design` fields on landing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderstandingDraft {
    pub pemahaman_bermakna: String,
    #[serde(default)]
    pub pertanyaan_pemantik: Vec<String>,
    #[serde(default)]
    pub kosakata_kunci: Vec<String>,
}

/// One observation note for `asesmen.catatanAnekdot`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnecdoteNote {
    pub fokus: String,
    pub catatan: String,
}

/// One suggestion from the activity-idea search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityIdea {
    pub judul: String,
    pub deskripsi: String,
}
