//! Block state, color, and texture-mapping crate.
#![forbid(unsafe_code)]

pub mod colors;
pub mod hash;
pub mod mappings;
pub mod state;

// Re-exports for convenience (downstream crates use these directly)
pub use colors::{BlockColorOverrides, BlockColors};
pub use hash::java_string_hash;
pub use mappings::{FaceTextures, GeometryKind, Mapping, Orientation, TextureMappings};
pub use state::{AIR, BlockState, shorten_key};
