//! Path-addressed patches over a single JSON lesson-plan document.
//!
//! The plan lives in one `serde_json::Value`. Nothing edits it in place:
//! callers describe changes as [`Patch`]es of [`Op`]s addressed by
//! [`Path`], and [`apply_patch`] produces the next document as a pure
//! function of the previous one. [`PlanStore`] wraps that in a shared,
//! write-serialized cell with a commit audit.
//!
//! ```
//! use rancang_state::{apply_patch, path, Op, Patch};
//! use serde_json::json;
//!
//! let plan = json!({"design": {"tujuanPembelajaran": ""}});
//! let patch = Patch::new().with_op(Op::set(
//!     path!("design", "tujuanPembelajaran"),
//!     json!("Mengenal pola sederhana"),
//! ));
//!
//! let next = apply_patch(&plan, &patch)?;
//! assert_eq!(next["design"]["tujuanPembelajaran"], "Mengenal pola sederhana");
//! assert_eq!(plan["design"]["tujuanPembelajaran"], ""); // input untouched
//! # Ok::<(), rancang_state::StateError>(())
//! ```
//!
//! Addressing is strict: every branch before the final segment must
//! already exist. The seeded plan owns its shape, so a path that misses it
//! is a bug in the writer, surfaced as a [`StateError`] rather than papered
//! over by creating branches on the fly.

mod apply;
mod error;
mod op;
mod overlap;
mod patch;
mod path;
mod store;

pub use apply::{apply_op, apply_patch, get_at_path};
pub use error::{value_type_name, StateError, StateResult};
pub use op::Op;
pub use overlap::{paths_overlap, touched_paths};
pub use patch::Patch;
pub use path::{Path, Seg};
pub use store::{CommitRecord, PlanStore};

// Re-export for downstream signatures.
pub use serde_json::Value;
