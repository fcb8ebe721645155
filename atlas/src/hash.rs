//! Sprite name hashing

/// 32-bit non-cryptographic hash over raw name bytes.
///
/// Must be deterministic: names are hashed once at load time and again on every lookup.
pub trait NameHasher {
    fn hash(&self, bytes: &[u8], seed: u32) -> u32;
}

/// xxHash32
#[derive(Debug, Clone, Copy, Default)]
pub struct Xxh32;

impl NameHasher for Xxh32 {
    fn hash(&self, bytes: &[u8], seed: u32) -> u32 {
        xxhash_rust::xxh32::xxh32(bytes, seed)
    }
}

impl<F> NameHasher for F
where
    F: Fn(&[u8], u32) -> u32,
{
    fn hash(&self, bytes: &[u8], seed: u32) -> u32 {
        self(bytes, seed)
    }
}
