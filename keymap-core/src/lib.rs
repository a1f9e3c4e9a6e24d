pub mod types;
pub mod blob;
pub mod keycodes;

pub use types::*;

// Re-export commonly used types
pub use types::record::{VirtualKey, record_len, MAX_SEQUENCE_LEN};
pub use types::layer::{Layer, GRID_CELLS};
pub use types::physical::{PhysicalKey, PhysicalKeys};
pub use types::errors::{KeymapError, ReferenceSite, Result};
pub use keycodes::KeyCodeTable;
pub use blob::{BlobLayout, LayerPlacement, BlobLoader, BlobError, Keymap, KeyRecord};
