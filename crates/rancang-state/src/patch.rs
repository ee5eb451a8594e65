use crate::Op;
use serde::{Deserialize, Serialize};

/// An ordered list of operations committed to the document as one unit.
///
/// Operations apply in order; a later op sees the effect of an earlier one
/// in the same patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    ops: Vec<Op>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_op(mut self, op: Op) -> Self {
        self.ops.push(op);
        self
    }

    pub fn with_ops(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
