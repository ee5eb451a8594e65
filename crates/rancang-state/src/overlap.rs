use crate::{Patch, Path};

/// The distinct paths `patch` writes, in first-touch order.
pub fn touched_paths(patch: &Patch) -> Vec<Path> {
    let mut paths: Vec<Path> = Vec::new();
    for op in patch.ops() {
        if !paths.contains(op.path()) {
            paths.push(op.path().clone());
        }
    }
    paths
}

/// Whether two paths address the same branch or one addresses into the
/// other. Writes at overlapping paths cannot be assumed independent.
pub fn paths_overlap(a: &Path, b: &Path) -> bool {
    a.is_prefix_of(b) || b.is_prefix_of(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{path, Op};
    use serde_json::json;

    #[test]
    fn touched_paths_deduplicates_in_order() {
        let goals = path!("design", "tujuanPembelajaran");
        let notes = path!("asesmen", "catatanAnekdot");
        let patch = Patch::new()
            .with_op(Op::set(goals.clone(), json!("a")))
            .with_op(Op::append(notes.clone(), json!("n")))
            .with_op(Op::set(goals.clone(), json!("b")));

        assert_eq!(touched_paths(&patch), vec![goals, notes]);
    }

    #[test]
    fn overlap_is_the_prefix_relation_both_ways() {
        let design = path!("design");
        let leaf = path!("design", "tujuanPembelajaran");
        let opening = path!("kegiatan", "pembuka");

        assert!(paths_overlap(&design, &leaf));
        assert!(paths_overlap(&leaf, &design));
        assert!(paths_overlap(&leaf, &leaf));
        assert!(!paths_overlap(&leaf, &opening));
    }
}
