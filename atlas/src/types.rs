use crate::{hash::NameHasher, texture::TextureLoader};

/// Opaque identifier handed out by a [`TextureLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameRect {
    pub x: i16,
    pub y: i16,
    pub width: i16,
    pub height: i16,
}

/// Trim offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteOffset {
    pub x: i16,
    pub y: i16,
}

/// Untrimmed size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteSize {
    pub width: i16,
    pub height: i16,
}

/// Placement of one sprite inside a texture page.
///
/// The sprite name is not kept, only its hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteEntry {
    pub texture_id: TextureId,
    pub name_hash: u32,
    pub frame: FrameRect,
    pub offset: SpriteOffset,
    pub size: SpriteSize,
    pub rotated: bool,
}

#[derive(Debug)]
pub struct TexturePage {
    pub id: TextureId,
    pub name: String,
    pub sprites: Vec<SpriteEntry>,
}

/// Header as read from the file, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasHeader {
    pub magic: u32,
    pub version: i16,
    pub trim_enabled: u8,
    pub rotate_enabled: u8,
    pub string_encoding: u8,
    pub texture_count: i16,
}

/// Loaded sprite atlas.
///
/// Owns every texture page it loaded and releases them through its loader on
/// [`Atlas::unload`] or drop. An atlas is either fully loaded or empty.
pub struct Atlas<L: TextureLoader, H: NameHasher = crate::hash::Xxh32> {
    pub(crate) pages: Vec<TexturePage>,
    pub(crate) loaded: bool,
    pub(crate) loader: L,
    pub(crate) hasher: H,
}
