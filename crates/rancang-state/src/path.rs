use serde::{Deserialize, Serialize};
use std::fmt;

/// One step into the document: an object key or a position in a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    Key(String),
    Index(usize),
}

impl From<&str> for Seg {
    fn from(key: &str) -> Self {
        Seg::Key(key.to_string())
    }
}

impl From<String> for Seg {
    fn from(key: String) -> Self {
        Seg::Key(key)
    }
}

impl From<usize> for Seg {
    fn from(index: usize) -> Self {
        Seg::Index(index)
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(key) => write!(f, "{key}"),
            Seg::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Address of one branch or leaf inside the plan document.
///
/// Built with the fluent API or the [`path!`](crate::path) macro:
///
/// ```
/// use rancang_state::{path, Path};
///
/// let built = Path::root().key("kegiatan").key("inti").index(0).key("nama");
/// let quick = path!("kegiatan", "inti", 0, "nama");
/// assert_eq!(built, quick);
/// assert_eq!(built.to_string(), "$.kegiatan.inti[0].nama");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path(Vec<Seg>);

impl Path {
    /// The empty path. On its own it addresses nothing a patch may write.
    pub fn root() -> Self {
        Path(Vec::new())
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(Seg::Key(key.into()));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.0.push(Seg::Index(index));
        self
    }

    pub fn push(mut self, seg: impl Into<Seg>) -> Self {
        self.0.push(seg.into());
        self
    }

    pub fn segs(&self) -> &[Seg] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `other` starts with every segment of `self`. A path is a
    /// prefix of itself.
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        other.0.len() >= self.0.len() && other.0[..self.0.len()] == self.0[..]
    }

    /// The path one segment up, or `None` at the root.
    pub fn parent(&self) -> Option<Path> {
        match self.0.split_last() {
            Some((_, rest)) => Some(Path(rest.to_vec())),
            None => None,
        }
    }

    /// Parse a dot-separated path. A segment of digits becomes an index,
    /// anything else a key; there is no bracket syntax.
    ///
    /// ```
    /// use rancang_state::{path, Path};
    ///
    /// assert_eq!(Path::parse("kegiatan.inti.0"), path!("kegiatan", "inti", 0));
    /// ```
    pub fn parse(text: &str) -> Path {
        text.split('.')
            .filter(|seg| !seg.is_empty())
            .map(|seg| match seg.parse::<usize>() {
                Ok(index) => Seg::Index(index),
                Err(_) => Seg::Key(seg.to_string()),
            })
            .collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for seg in &self.0 {
            match seg {
                Seg::Key(key) => write!(f, ".{key}")?,
                Seg::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl From<Vec<Seg>> for Path {
    fn from(segs: Vec<Seg>) -> Self {
        Path(segs)
    }
}

impl FromIterator<Seg> for Path {
    fn from_iter<I: IntoIterator<Item = Seg>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

/// Build a [`Path`] from a list of keys and indices.
///
/// ```
/// use rancang_state::path;
///
/// let p = path!("asesmen", "ceklis", 2, "no");
/// assert_eq!(p.to_string(), "$.asesmen.ceklis[2].no");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {
        $crate::Path::from_iter([$($crate::Seg::from($seg)),+])
    };
}
