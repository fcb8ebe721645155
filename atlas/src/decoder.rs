use log::{debug, trace};
use nom::{
    error::ErrorKind,
    number::complete::{le_i16, le_u32},
};

use crate::{
    config::AtlasConfig,
    constants::{
        ATLAS_MAGIC, ATLAS_VERSION, MAX_SPRITE_NAME_LENGTH, MAX_TEXTURE_NAME_LENGTH,
        NAME_HASH_SEED, STRING_ENCODING_NULL_TERMINATED,
    },
    error::{DecodeError, FormatError},
    hash::NameHasher,
    parser::{parse_flags, parse_name, parse_sprite, IResult, RawSprite},
    texture::TextureLoader,
    Atlas, AtlasHeader, SpriteEntry, TexturePage,
};

/// Turns a nom failure into the format error it stands for.
fn step<T>(res: IResult<'_, T>, name_limit: usize) -> Result<(&[u8], T), FormatError> {
    res.map_err(|op| match op {
        nom::Err::Error(err) | nom::Err::Failure(err) if err.code == ErrorKind::TooLarge => {
            FormatError::UnterminatedString { limit: name_limit }
        }
        _ => FormatError::Truncated,
    })
}

/// Reserves room for `count` items, treating a negative count as unallocatable.
fn reserve<T>(vec: &mut Vec<T>, count: i16, what: &'static str) -> Result<(), DecodeError> {
    let resource = DecodeError::Resource {
        what,
        count: count as i64,
    };

    let Ok(count) = usize::try_from(count) else {
        return resource.to_result();
    };

    if vec.try_reserve_exact(count).is_err() {
        return resource.to_result();
    }

    Ok(())
}

/// Reads the header one field at a time, checking each field before reading the next.
fn decode_header(i: &[u8]) -> Result<(&[u8], AtlasHeader), FormatError> {
    let (i, magic) = step(le_u32(i), 0)?;

    if magic != ATLAS_MAGIC {
        return Err(FormatError::BadMagic { magic });
    }

    let (i, version) = step(le_i16(i), 0)?;

    if version != ATLAS_VERSION {
        return Err(FormatError::UnsupportedVersion { version });
    }

    let (i, (trim_enabled, rotate_enabled, string_encoding)) = step(parse_flags(i), 0)?;

    if trim_enabled == 0
        || rotate_enabled == 0
        || string_encoding != STRING_ENCODING_NULL_TERMINATED
    {
        return Err(FormatError::UnsupportedFlags {
            trim_enabled,
            rotate_enabled,
            string_encoding,
        });
    }

    let (i, texture_count) = step(le_i16(i), 0)?;

    Ok((
        i,
        AtlasHeader {
            magic,
            version,
            trim_enabled,
            rotate_enabled,
            string_encoding,
            texture_count,
        },
    ))
}

/// Decodes a whole atlas from `i`, loading each texture page as soon as its block is reached.
///
/// Pages are registered on `atlas` right after they load, so an early return drops the
/// partially built atlas and releases every page loaded so far.
pub(crate) fn decode_atlas<L: TextureLoader, H: NameHasher>(
    i: &[u8],
    loader: L,
    hasher: H,
    config: &AtlasConfig,
) -> Result<Atlas<L, H>, DecodeError> {
    let (i, header) = decode_header(i)?;

    let mut atlas = Atlas {
        pages: Vec::new(),
        loaded: false,
        loader,
        hasher,
    };

    reserve(&mut atlas.pages, header.texture_count, "texture pages")?;

    let mut i = i;

    for texture_index in 0..header.texture_count as usize {
        let (rest, name) = step(parse_name(i, MAX_TEXTURE_NAME_LENGTH), MAX_TEXTURE_NAME_LENGTH)?;
        let name = String::from_utf8_lossy(name).into_owned();
        let path = config.texture_path(&name);

        let id = atlas
            .loader
            .load(&path)
            .map_err(|op| DecodeError::Dependency {
                texture_index,
                path: path.clone(),
                source: Box::new(op),
            })?;

        trace!("loaded texture page {texture_index} `{}`", path.display());

        atlas.pages.push(TexturePage {
            id,
            name,
            sprites: Vec::new(),
        });

        let (rest, entry_count) = step(le_i16(rest), 0)?;
        let mut sprites: Vec<SpriteEntry> = Vec::new();

        reserve(&mut sprites, entry_count, "sprite entries")?;

        let mut rest = rest;

        for _ in 0..entry_count {
            let (next, sprite) = step(
                parse_sprite(rest, MAX_SPRITE_NAME_LENGTH),
                MAX_SPRITE_NAME_LENGTH,
            )?;
            let RawSprite {
                name,
                frame,
                offset,
                size,
                rotated,
            } = sprite;

            sprites.push(SpriteEntry {
                texture_id: id,
                name_hash: atlas.hasher.hash(name, NAME_HASH_SEED),
                frame,
                offset,
                size,
                rotated,
            });

            rest = next;
        }

        if let Some(page) = atlas.pages.last_mut() {
            page.sprites = sprites;
        }

        i = rest;
    }

    if !i.is_empty() {
        debug!("{} trailing bytes after last texture page", i.len());
    }

    atlas.loaded = true;

    Ok(atlas)
}
