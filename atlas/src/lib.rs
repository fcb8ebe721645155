//! Sprite atlas loading
//!
//! An atlas file groups named sprites across one or more texture pages. Loading it
//! resolves every page through a [`TextureLoader`] and keeps each sprite's placement
//! keyed by the hash of its name.
pub mod config;
pub mod constants;
mod decoder;
pub mod error;
pub mod hash;
mod parser;
pub mod texture;
mod types;
mod utils;

#[cfg(test)]
mod fixture;

pub use config::AtlasConfig;
pub use error::{DecodeError, FormatError};
pub use hash::{NameHasher, Xxh32};
pub use texture::{ImageTextureLoader, TextureLoader};
pub use types::*;
