//! Test helpers: an in-memory atlas writer and a bookkeeping texture loader.
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use crate::{
    constants::{ATLAS_MAGIC, ATLAS_VERSION},
    texture::TextureLoader,
    TextureId,
};

pub struct AtlasWriter {
    pub data: Vec<u8>,
}

impl AtlasWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Header with the only accepted magic, version and flags.
    pub fn with_header(texture_count: i16) -> Self {
        let mut writer = Self::new();

        writer.header(ATLAS_MAGIC, ATLAS_VERSION, [1, 1, 0], texture_count);

        writer
    }

    pub fn header(
        &mut self,
        magic: u32,
        version: i16,
        flags: [u8; 3],
        texture_count: i16,
    ) -> &mut Self {
        self.append_u32(magic);
        self.append_i16(version);
        self.append_u8_slice(&flags);
        self.append_i16(texture_count)
    }

    pub fn page(&mut self, name: &str, entry_count: i16) -> &mut Self {
        self.append_string(name);
        self.append_i16(entry_count)
    }

    /// `[frame_x, frame_y, frame_width, frame_height, offset_x, offset_y, width, height]`
    pub fn sprite(&mut self, name: &str, placement: [i16; 8], rotated: u8) -> &mut Self {
        self.append_string(name);
        for v in placement {
            self.append_i16(v);
        }
        self.append_u8(rotated)
    }

    pub fn append_u32(&mut self, i: u32) -> &mut Self {
        self.data.extend(i.to_le_bytes());
        self
    }

    pub fn append_i16(&mut self, i: i16) -> &mut Self {
        self.data.extend(i.to_le_bytes());
        self
    }

    pub fn append_u8(&mut self, i: u8) -> &mut Self {
        self.data.push(i);
        self
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) -> &mut Self {
        self.data.extend_from_slice(i);
        self
    }

    /// Null terminated
    pub fn append_string(&mut self, s: &str) -> &mut Self {
        self.append_u8_slice(s.as_bytes());
        self.append_u8(0)
    }

    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("refusing to load `{}`", .0.display())]
pub struct RefusedTexture(pub PathBuf);

/// Hands out sequential ids and remembers which are still live.
#[derive(Debug, Default)]
pub struct CountingLoader {
    next_id: u32,
    pub live: BTreeSet<u32>,
    pub requested: Vec<PathBuf>,
    pub released: Vec<TextureId>,
    /// Zero-based load call that fails.
    pub fail_at: Option<usize>,
}

impl CountingLoader {
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Default::default()
        }
    }
}

impl TextureLoader for CountingLoader {
    type Error = RefusedTexture;

    fn load(&mut self, path: &Path) -> Result<TextureId, Self::Error> {
        let call = self.requested.len();
        self.requested.push(path.to_path_buf());

        if self.fail_at == Some(call) {
            return Err(RefusedTexture(path.to_path_buf()));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id);

        Ok(TextureId(id))
    }

    fn release(&mut self, id: TextureId) {
        assert!(self.live.remove(&id.0), "texture {} released twice", id.0);
        self.released.push(id);
    }
}
