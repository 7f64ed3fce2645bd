//! CLI type definitions.

use std::path::PathBuf;

use clap::{Args, Parser};

use mapcycle_lib::GeneratorOptions;

#[derive(Parser)]
#[command(name = "mapcycle-gen", version)]
#[command(about = "Generate a TF2 mapcycle_matchmaking.txt from items_game.txt", long_about = None)]
pub(crate) struct Cli {
    /// Full path to the items_game.txt file to be parsed
    #[arg(long = "itemsgame-path", value_name = "PATH")]
    pub itemsgame_path: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Ignore settings.toml and start from the built-in defaults
    #[arg(long)]
    pub no_settings: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long)]
    pub logfile: Option<PathBuf>,
}

/// Switches that adjust the filter defaults.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Include halloween maps
    #[arg(long)]
    pub include_halloween: bool,

    /// Include christmas maps
    #[arg(long)]
    pub include_christmas: bool,

    /// Exclude maps tagged as 'alternative'
    #[arg(long)]
    pub exclude_alternatives: bool,

    /// Exclude maps tagged as 'core'
    #[arg(long)]
    pub exclude_core: bool,

    /// Include maps tagged as '6v6 competitive'
    #[arg(long)]
    pub include_competitive_maps: bool,

    /// Do not add comments to the mapcycle file
    #[arg(long)]
    pub no_comments: bool,

    /// Do not write duplicate maps to the mapcycle file
    #[arg(long)]
    pub no_duplicates: bool,

    /// Include maps with no matchmaking category
    #[arg(long)]
    pub include_unlisted_maps: bool,
}

impl FilterArgs {
    /// Apply the flags that were passed on top of `base`. Flags that were
    /// not passed leave `base` untouched.
    pub fn apply(&self, mut base: GeneratorOptions) -> GeneratorOptions {
        base.halloween |= self.include_halloween;
        base.christmas |= self.include_christmas;
        base.no_alternatives |= self.exclude_alternatives;
        base.no_core |= self.exclude_core;
        base.no_duplicates |= self.no_duplicates;
        base.unlisted |= self.include_unlisted_maps;
        if self.include_competitive_maps {
            base.no_comp = false;
        }
        if self.no_comments {
            base.add_comments = false;
        }
        base
    }
}
