use std::fmt;
use thiserror::Error;

/// Where a key name was referenced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSite {
    /// A primary or secondary sequence of the named key.
    Key(String),
    /// A cell of a layer grid.
    LayerCell { layer: usize, cell: usize },
}

impl fmt::Display for ReferenceSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceSite::Key(name) => write!(f, "key {:?}", name),
            ReferenceSite::LayerCell { layer, cell } => write!(f, "layer {} cell {}", layer, cell),
        }
    }
}

#[derive(Error, Debug)]
pub enum KeymapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized {name:?} key referenced by {site}")]
    UnresolvedReference { name: String, site: ReferenceSite },

    #[error("The first virtual key must be the empty placeholder")]
    MissingPlaceholder,

    #[error("Empty key name at position {index}; only the first key may be the placeholder and it carries nothing")]
    InvalidPlaceholder { index: usize },

    #[error("Duplicate virtual key: {0:?}")]
    DuplicateKey(String),

    #[error("Sequence of key {key:?} has {len} entries, at most 255 fit in a record")]
    SequenceTooLong { key: String, len: usize },

    #[error("Key {key:?} starts at offset {offset:#x}, beyond 16-bit range")]
    OffsetOverflow { key: String, offset: usize },

    #[error("Layer {layer} has {actual} cells, expected {expected}")]
    LayerSize { layer: usize, expected: usize, actual: usize },

    #[error("Unknown key code: {0}")]
    UnknownKeyCode(String),

    #[error("Key code {name} = {value:#x} does not fit in one byte")]
    KeyCodeRange { name: String, value: u32 },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl KeymapError {
    pub fn unresolved(name: &str, site: ReferenceSite) -> Self {
        KeymapError::UnresolvedReference {
            name: name.to_string(),
            site,
        }
    }
}

pub type Result<T> = std::result::Result<T, KeymapError>;
