use std::path::PathBuf;

use atlas::{Atlas, ImageTextureLoader, SpriteEntry, TextureLoader, Xxh32};
use clap::{CommandFactory, Parser, Subcommand};

use crate::{config::parse_config, loader::FileCheckLoader};

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct LookupCli {
    // dummy command because we are already in the module
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints where each named sprite is placed
    Lookup {
        /// Path to the atlas file
        atlas: PathBuf,
        /// Sprite names
        #[arg(required = true)]
        names: Vec<String>,
        /// Texture path config, defaults to config.toml next to the binary
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Decodes every texture page instead of only checking it exists
        #[arg(short, long)]
        decode: bool,
    },
}

pub struct Lookup;

fn describe(page: &str, entry: &SpriteEntry) -> String {
    let SpriteEntry {
        frame,
        offset,
        size,
        rotated,
        ..
    } = entry;

    format!(
        "page `{}` frame ({}, {}, {}, {}) offset ({}, {}) size ({}, {}){}",
        page,
        frame.x,
        frame.y,
        frame.width,
        frame.height,
        offset.x,
        offset.y,
        size.width,
        size.height,
        if *rotated { " rotated" } else { "" }
    )
}

/// Returns how many names were not found.
fn print_lookup<L: TextureLoader>(atlas: &Atlas<L>, names: &[String]) -> usize {
    let mut missing = 0;

    for name in names {
        let Some(entry) = atlas.lookup(name) else {
            println!("{name}: not found");
            missing += 1;
            continue;
        };

        let page = atlas
            .pages()
            .iter()
            .find(|page| page.id == entry.texture_id)
            .map(|page| page.name.as_str())
            .unwrap_or("?");

        println!("{name}: {}", describe(page, entry));
    }

    missing
}

fn lookup(
    atlas_path: PathBuf,
    names: Vec<String>,
    config_path: Option<PathBuf>,
    decode: bool,
) -> eyre::Result<()> {
    let config = parse_config(config_path.as_deref())?;

    let missing = if decode {
        let atlas = Atlas::load_with(&atlas_path, ImageTextureLoader::new(), Xxh32, &config)?;
        print_lookup(&atlas, &names)
    } else {
        let atlas = Atlas::load_with(&atlas_path, FileCheckLoader::default(), Xxh32, &config)?;
        print_lookup(&atlas, &names)
    };

    if missing > 0 {
        return Err(eyre::eyre!("{missing} of {} sprites not found", names.len()));
    }

    Ok(())
}

impl Cli for Lookup {
    fn name(&self) -> &'static str {
        "lookup"
    }

    fn cli(&self) -> CliRes {
        let cli = LookupCli::parse();

        let Commands::Lookup {
            atlas,
            names,
            config,
            decode,
        } = cli.command;

        match lookup(atlas, names, config, decode) {
            Ok(_) => CliRes::Ok,
            Err(err) => {
                println!("{}", err);
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        let _ = LookupCli::command().print_help();
    }
}

#[cfg(test)]
mod test {
    use atlas::{FrameRect, SpriteOffset, SpriteSize, TextureId};

    use super::*;

    #[test]
    fn describe_rotated() {
        let entry = SpriteEntry {
            texture_id: TextureId(0),
            name_hash: 0,
            frame: FrameRect {
                x: 1,
                y: 2,
                width: 3,
                height: 4,
            },
            offset: SpriteOffset { x: -1, y: 0 },
            size: SpriteSize {
                width: 5,
                height: 6,
            },
            rotated: true,
        };

        assert_eq!(
            describe("ui", &entry),
            "page `ui` frame (1, 2, 3, 4) offset (-1, 0) size (5, 6) rotated"
        );
    }
}
