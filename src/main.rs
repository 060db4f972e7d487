use clap::{Parser, Subcommand};
use keeb::config::GeometryParams;
use keeb::error::{KbResult, KeebError};
use keeb::geometry::Keyboard;
use keeb::layouts::KnownLayout;
use std::process;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "qwerty")]
    layout: String,

    #[command(flatten)]
    geometry: GeometryParams,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a few sample keys
    Demo,
    /// Print the coordinates of the given characters
    Locate(cmd::locate::LocateArgs),
    /// Print the full layout with every key's coordinates
    Map,
}

fn load_keyboard(name: &str, params: &GeometryParams) -> KbResult<Keyboard> {
    let layout = KnownLayout::from_str(&name.to_lowercase())
        .map_err(|_| {
            let known: Vec<String> = KnownLayout::iter().map(|l| l.to_string()).collect();
            KeebError::UnknownLayout(format!("{} (known: {})", name, known.join(", ")))
        })?;
    layout.build(params)
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    info!("⌨️  Building keyboard: {}", cli.layout);
    let kb = load_keyboard(&cli.layout, &cli.geometry).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Demo => {
            cmd::demo::run(&kb);
            Ok(())
        }
        Commands::Locate(args) => cmd::locate::run(args, &kb),
        Commands::Map => {
            cmd::map::run(&kb);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
