use crate::{value_type_name, Op, Patch, Path, Seg, StateError, StateResult};
use serde_json::Value;

/// Apply every operation of `patch` to a copy of `doc`.
///
/// Pure: the input document is never touched, and the same inputs always
/// produce the same output. Operations apply in order, each seeing the
/// previous one's effect.
pub fn apply_patch(doc: &Value, patch: &Patch) -> StateResult<Value> {
    let mut next = doc.clone();
    for op in patch.ops() {
        apply_op(&mut next, op)?;
    }
    Ok(next)
}

/// Apply a single operation in place.
///
/// Resolution is strict: every segment before the final one must already
/// exist in the document shape. Writers address the seeded plan with fixed
/// paths, so a miss here is a bug in the writer, never something to paper
/// over by creating branches on the fly.
pub fn apply_op(doc: &mut Value, op: &Op) -> StateResult<()> {
    match op {
        Op::Set { path, value } => set_value(doc, path, value.clone()),
        Op::Append { path, value } => append_value(doc, path, value.clone()),
        Op::Delete { path } => delete_value(doc, path),
    }
}

/// Read the value at `path`, if the path resolves.
pub fn get_at_path<'a>(doc: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = doc;
    for seg in path.segs() {
        current = match seg {
            Seg::Key(key) => current.get(key.as_str())?,
            Seg::Index(index) => current.get(*index)?,
        };
    }
    Some(current)
}

fn set_value(doc: &mut Value, path: &Path, value: Value) -> StateResult<()> {
    let Some((last, _)) = path.segs().split_last() else {
        return Err(StateError::EmptyPath);
    };
    let parent = walk(doc, path, path.len() - 1)?;
    match (parent, last) {
        (Value::Object(map), Seg::Key(key)) => {
            map.insert(key.clone(), value);
            Ok(())
        }
        (Value::Array(items), Seg::Index(index)) => {
            let len = items.len();
            match items.get_mut(*index) {
                Some(slot) => {
                    *slot = value;
                    Ok(())
                }
                None => Err(StateError::IndexOutOfBounds {
                    path: shown(path, path.len() - 1),
                    index: *index,
                    len,
                }),
            }
        }
        (other, seg) => Err(wrong_container(path, seg, value_type_name(other))),
    }
}

fn append_value(doc: &mut Value, path: &Path, value: Value) -> StateResult<()> {
    if path.is_empty() {
        return Err(StateError::EmptyPath);
    }
    let target = walk(doc, path, path.len())?;
    match target {
        Value::Array(items) => {
            items.push(value);
            Ok(())
        }
        other => Err(StateError::AppendRequiresArray {
            path: path.to_string(),
            found: value_type_name(other),
        }),
    }
}

fn delete_value(doc: &mut Value, path: &Path) -> StateResult<()> {
    let Some((last, _)) = path.segs().split_last() else {
        return Err(StateError::EmptyPath);
    };
    let parent = walk(doc, path, path.len() - 1)?;
    match (parent, last) {
        (Value::Object(map), Seg::Key(key)) => {
            map.remove(key.as_str());
            Ok(())
        }
        (Value::Array(items), Seg::Index(index)) => {
            if *index >= items.len() {
                return Err(StateError::IndexOutOfBounds {
                    path: shown(path, path.len() - 1),
                    index: *index,
                    len: items.len(),
                });
            }
            items.remove(*index);
            Ok(())
        }
        (other, seg) => Err(wrong_container(path, seg, value_type_name(other))),
    }
}

/// Descend the first `upto` segments of `path`, strictly.
fn walk<'a>(doc: &'a mut Value, path: &Path, upto: usize) -> StateResult<&'a mut Value> {
    let mut current = doc;
    for (depth, seg) in path.segs()[..upto].iter().enumerate() {
        current = match seg {
            Seg::Key(key) => match current {
                Value::Object(map) => {
                    map.get_mut(key).ok_or_else(|| StateError::PathNotFound {
                        path: shown(path, depth + 1),
                    })?
                }
                other => {
                    return Err(StateError::TypeMismatch {
                        path: shown(path, depth),
                        expected: "object",
                        found: value_type_name(other),
                    })
                }
            },
            Seg::Index(index) => match current {
                Value::Array(items) => {
                    let len = items.len();
                    items.get_mut(*index).ok_or_else(|| StateError::IndexOutOfBounds {
                        path: shown(path, depth),
                        index: *index,
                        len,
                    })?
                }
                other => {
                    return Err(StateError::TypeMismatch {
                        path: shown(path, depth),
                        expected: "array",
                        found: value_type_name(other),
                    })
                }
            },
        };
    }
    Ok(current)
}

fn wrong_container(path: &Path, seg: &Seg, found: &'static str) -> StateError {
    StateError::TypeMismatch {
        path: shown(path, path.len() - 1),
        expected: match seg {
            Seg::Key(_) => "object",
            Seg::Index(_) => "array",
        },
        found,
    }
}

/// Display form of the first `len` segments, for error messages.
fn shown(path: &Path, len: usize) -> String {
    path.segs()[..len]
        .iter()
        .cloned()
        .collect::<Path>()
        .to_string()
}
