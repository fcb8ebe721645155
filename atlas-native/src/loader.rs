use std::path::Path;

use atlas::{TextureId, TextureLoader};

/// Resolves texture pages by checking they are on disk, without decoding pixels.
#[derive(Debug, Default)]
pub struct FileCheckLoader {
    next_id: u32,
    resident: usize,
}

impl FileCheckLoader {
    pub fn resident(&self) -> usize {
        self.resident
    }
}

impl TextureLoader for FileCheckLoader {
    type Error = std::io::Error;

    fn load(&mut self, path: &Path) -> Result<TextureId, Self::Error> {
        let metadata = std::fs::metadata(path)?;

        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("`{}` is not a file", path.display()),
            ));
        }

        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.resident += 1;

        Ok(id)
    }

    fn release(&mut self, _id: TextureId) {
        self.resident = self.resident.saturating_sub(1);
    }
}
