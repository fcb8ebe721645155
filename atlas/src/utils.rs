use std::path::Path;

use log::{debug, warn};

use crate::{
    config::AtlasConfig,
    constants::NAME_HASH_SEED,
    decoder::decode_atlas,
    error::DecodeError,
    hash::{NameHasher, Xxh32},
    texture::TextureLoader,
    Atlas, SpriteEntry, TexturePage,
};

impl<L: TextureLoader> Atlas<L> {
    /// Loads an atlas file with the default name hash and texture path template.
    pub fn load(path: impl AsRef<Path>, loader: L) -> Result<Self, DecodeError> {
        Self::load_with(path, loader, Xxh32, &AtlasConfig::default())
    }
}

impl<L: TextureLoader, H: NameHasher> Atlas<L, H> {
    pub fn load_with(
        path: impl AsRef<Path>,
        loader: L,
        hasher: H,
        config: &AtlasConfig,
    ) -> Result<Self, DecodeError> {
        let path = path.as_ref();

        let file = std::fs::read(path).map_err(|op| {
            warn!("spritemap: failed to load {}: {op}", path.display());

            DecodeError::IOError {
                source: op,
                path: path.to_path_buf(),
            }
        })?;

        let atlas = decode_atlas(&file, loader, hasher, config).inspect_err(|err| {
            warn!("spritemap: {}: {err}", path.display());
        })?;

        debug!(
            "spritemap: loaded {} with {} pages and {} sprites",
            path.display(),
            atlas.texture_count(),
            atlas.sprite_count()
        );

        Ok(atlas)
    }

    pub fn load_from_bytes(
        i: &[u8],
        loader: L,
        hasher: H,
        config: &AtlasConfig,
    ) -> Result<Self, DecodeError> {
        decode_atlas(i, loader, hasher, config).inspect_err(|err| {
            warn!("spritemap: {err}");
        })
    }

    /// First sprite, in page then entry order, whose name hash matches `name`.
    ///
    /// Names with the same hash are not told apart. A name is only read up to its first
    /// NUL byte, since names in the file cannot contain one.
    pub fn lookup(&self, name: impl AsRef<[u8]>) -> Option<&SpriteEntry> {
        let name = name.as_ref();
        let end = name.iter().position(|&c| c == 0).unwrap_or(name.len());
        let hash = self.hasher.hash(&name[..end], NAME_HASH_SEED);

        self.sprites().find(|entry| entry.name_hash == hash)
    }

    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&SpriteEntry> {
        self.lookup(name)
    }

    pub fn is_valid(&self) -> bool {
        self.loaded
    }

    /// Releases every texture page and empties the atlas. Safe to call more than once.
    pub fn unload(&mut self) {
        for page in self.pages.drain(..) {
            self.loader.release(page.id);
        }

        self.loaded = false;
    }

    pub fn texture_count(&self) -> usize {
        self.pages.len()
    }

    pub fn sprite_count(&self) -> usize {
        self.pages.iter().map(|page| page.sprites.len()).sum()
    }

    pub fn pages(&self) -> &[TexturePage] {
        &self.pages
    }

    pub fn sprites(&self) -> impl Iterator<Item = &SpriteEntry> {
        self.pages.iter().flat_map(|page| page.sprites.iter())
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

impl<L: TextureLoader, H: NameHasher> Drop for Atlas<L, H> {
    fn drop(&mut self) {
        self.unload();
    }
}

impl<L: TextureLoader, H: NameHasher> std::fmt::Debug for Atlas<L, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Atlas")
            .field("pages", &self.pages)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}
