//! Texture page loading
use std::{collections::HashMap, path::Path};

use image::RgbaImage;

use crate::{error::TextureError, TextureId};

/// Loads one physical texture page and hands back an opaque id for it.
///
/// Every id returned by `load` is passed to `release` exactly once by its owning atlas.
pub trait TextureLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(&mut self, path: &Path) -> Result<TextureId, Self::Error>;
    fn release(&mut self, id: TextureId);
}

impl<T: TextureLoader + ?Sized> TextureLoader for &mut T {
    type Error = T::Error;

    fn load(&mut self, path: &Path) -> Result<TextureId, Self::Error> {
        (**self).load(path)
    }

    fn release(&mut self, id: TextureId) {
        (**self).release(id)
    }
}

/// Decodes texture pages with `image` and keeps the pixels resident until released.
///
/// Ids are never reused, not even across [`ImageTextureLoader::reset`], so a stale id
/// cannot release somebody else's page.
#[derive(Debug, Default)]
pub struct ImageTextureLoader {
    next_id: u32,
    pages: HashMap<u32, RgbaImage>,
}

impl ImageTextureLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: TextureId) -> Option<&RgbaImage> {
        self.pages.get(&id.0)
    }

    /// Number of pages currently loaded.
    pub fn resident(&self) -> usize {
        self.pages.len()
    }

    /// Drops every page. Ids handed out before no longer resolve.
    pub fn reset(&mut self) {
        self.pages.clear();
    }
}

impl TextureLoader for ImageTextureLoader {
    type Error = TextureError;

    fn load(&mut self, path: &Path) -> Result<TextureId, Self::Error> {
        let image = image::open(path)
            .map_err(|op| TextureError::Image {
                source: op,
                path: path.to_path_buf(),
            })?
            .to_rgba8();

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.pages.insert(id, image);

        Ok(TextureId(id))
    }

    fn release(&mut self, id: TextureId) {
        self.pages.remove(&id.0);
    }
}
