use crate::Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One mutation of the plan document.
///
/// The three shapes cover everything the authoring flows do: replace a
/// branch, grow an accumulating sequence, drop an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Replace the value at `path`. The final key of an object path is
    /// created if absent; everything before it must already exist.
    Set { path: Path, value: Value },
    /// Push `value` onto the existing array at `path`.
    Append { path: Path, value: Value },
    /// Remove the object key (no-op when absent) or array element at
    /// `path`.
    Delete { path: Path },
}

impl Op {
    pub fn set(path: Path, value: Value) -> Self {
        Op::Set { path, value }
    }

    pub fn append(path: Path, value: Value) -> Self {
        Op::Append { path, value }
    }

    pub fn delete(path: Path) -> Self {
        Op::Delete { path }
    }

    /// The path this operation writes.
    pub fn path(&self) -> &Path {
        match self {
            Op::Set { path, .. } | Op::Append { path, .. } | Op::Delete { path } => path,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Op::Set { .. } => "set",
            Op::Append { .. } => "append",
            Op::Delete { .. } => "delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn tagged_serde_shape() {
        let op = Op::set(path!("design", "tujuanPembelajaran"), json!("Mengenal pola"));
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({
                "op": "set",
                "path": ["design", "tujuanPembelajaran"],
                "value": "Mengenal pola"
            })
        );

        let back: Op = serde_json::from_value(json!({
            "op": "append",
            "path": ["asesmen", "catatanAnekdot"],
            "value": {"fokus": "motorik"}
        }))
        .unwrap();
        assert_eq!(back.name(), "append");
        assert_eq!(back.path(), &path!("asesmen", "catatanAnekdot"));
    }

    #[test]
    fn path_accessor_covers_all_variants() {
        let p = path!("kegiatan", "inti", 0);
        assert_eq!(Op::set(p.clone(), json!(1)).path(), &p);
        assert_eq!(Op::append(p.clone(), json!(1)).path(), &p);
        assert_eq!(Op::delete(p.clone()).path(), &p);
    }
}
