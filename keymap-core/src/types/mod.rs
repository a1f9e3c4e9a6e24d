pub mod record;
pub mod layer;
pub mod physical;
pub mod errors;

pub use record::*;
pub use layer::*;
pub use physical::*;
pub use errors::*;
