use std::path::PathBuf;

use atlas::Atlas;
use clap::{CommandFactory, Parser, Subcommand};

use crate::{config::parse_config, loader::FileCheckLoader};

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct InfoCli {
    // dummy command because we are already in the module
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Lists texture pages and how many sprites each holds
    Info {
        /// Path to the atlas file
        atlas: PathBuf,
        /// Texture path config, defaults to config.toml next to the binary
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub struct Info;

fn print_info(atlas: &Atlas<FileCheckLoader>) {
    println!(
        "{} texture pages ({} resident), {} sprites",
        atlas.texture_count(),
        atlas.loader().resident(),
        atlas.sprite_count()
    );

    for (index, page) in atlas.pages().iter().enumerate() {
        println!("[{index}] {} ({} sprites)", page.name, page.sprites.len());
    }
}

fn info(atlas_path: PathBuf, config_path: Option<PathBuf>) -> eyre::Result<()> {
    let config = parse_config(config_path.as_deref())?;
    let atlas = Atlas::load_with(&atlas_path, FileCheckLoader::default(), atlas::Xxh32, &config)?;

    print_info(&atlas);

    Ok(())
}

impl Cli for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn cli(&self) -> CliRes {
        let cli = InfoCli::parse();

        let Commands::Info { atlas, config } = cli.command;

        match info(atlas, config) {
            Ok(_) => CliRes::Ok,
            Err(err) => {
                println!("{}", err);
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        let _ = InfoCli::command().print_help();
    }
}
