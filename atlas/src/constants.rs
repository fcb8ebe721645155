/// "crch" read as a little-endian u32.
pub const ATLAS_MAGIC: u32 = 0x68637263;
pub const ATLAS_VERSION: i16 = 0;

// string_encoding
pub const STRING_ENCODING_NULL_TERMINATED: u8 = 0;

// Both bounds include the terminator.
pub const MAX_TEXTURE_NAME_LENGTH: usize = 50;
pub const MAX_SPRITE_NAME_LENGTH: usize = 128;

pub const NAME_HASH_SEED: u32 = 0;

pub const DEFAULT_TEXTURE_DIR: &str = "texturemap";
pub const DEFAULT_TEXTURE_SUFFIX: &str = "_img";
pub const DEFAULT_TEXTURE_EXTENSION: &str = "bin";
