use std::path::PathBuf;

/// Structural problems with the atlas file itself.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Bad magic: {magic:#010x}")]
    BadMagic { magic: u32 },
    #[error("Atlas version is not 0: {version}")]
    UnsupportedVersion { version: i16 },
    #[error(
        "Unsupported flags: trim ({trim_enabled}) rotate ({rotate_enabled}) string encoding ({string_encoding})"
    )]
    UnsupportedFlags {
        trim_enabled: u8,
        rotate_enabled: u8,
        string_encoding: u8,
    },
    #[error("Unexpected end of file")]
    Truncated,
    #[error("String is not terminated within {limit} bytes")]
    UnterminatedString { limit: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Cannot read file `{path}`: {source}")]
    IOError {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Malformed atlas: {source}")]
    Format {
        #[from]
        source: FormatError,
    },
    #[error("Cannot allocate {count} {what}")]
    Resource { what: &'static str, count: i64 },
    #[error("Failed to load texture page {texture_index} from `{path}`: {source}")]
    Dependency {
        texture_index: usize,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DecodeError {
    pub fn to_result<T>(self) -> Result<T, Self> {
        Err(self)
    }

    /// The format error behind this failure, if any.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format { source } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config `{path}`: {source}")]
    IOError {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Cannot parse config: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("Cannot open texture `{path}`: {source}")]
    Image {
        #[source]
        source: image::ImageError,
        path: PathBuf,
    },
}
