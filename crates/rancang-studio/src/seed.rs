use serde_json::{json, Value};

/// The complete empty plan assembled in one place.
///
/// Every branch a drafting flow writes already exists here, which is what
/// lets patch application stay strict about missing intermediates: a draft
/// patch that fails to resolve is a bug, not a shape to create on the fly.
pub fn starter_plan() -> Value {
    json!({
        "informasiUmum": {
            "namaSekolah": "",
            "namaPenyusun": "",
            "kelas": "",
            "topik": "",
            "semester": "",
            "alokasiWaktu": ""
        },
        "design": {
            "tujuanPembelajaran": "",
            "pemahamanBermakna": "",
            "pertanyaanPemantik": [],
            "kosakataKunci": []
        },
        "kegiatan": {
            "pembuka": "",
            "inti": [],
            "penutup": ""
        },
        "asesmen": {
            "ceklis": [],
            "catatanAnekdot": []
        }
    })
}
