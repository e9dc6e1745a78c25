mod commands;
mod core;

use std::path::PathBuf;

use clap::Parser;

use crate::core::config::Config;

#[derive(Parser)]
#[command(name = "bearbundle")]
#[command(about = "Export a Bear note to a TextBundle and keep it in sync", long_about = None)]
#[command(version)]
struct Cli {
    /// Deep link to the note, e.g. bear://x-callback-url/open-note?id=ABC123
    link: String,

    #[arg(short, long, help = "Bundle output path (.textbundle appended if missing)")]
    output: PathBuf,

    #[arg(long, help = "Keep polling and re-export when the note changes")]
    watch: bool,

    #[arg(long, help = "Note database file (default: $BEAR_DATABASE or the Bear app location)")]
    database: Option<PathBuf>,

    #[arg(long, help = "Bear image directory, enables rewriting image links into assets/ (default: $BEAR_ASSETS)")]
    assets: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.database, cli.assets);

    commands::export::run(&cli.link, &cli.output, cli.watch, &config)
}
