//! Pokébase Console entry point
//!
//! Loads env config, resolves CLI overrides, and hands control to the
//! interactive console (or straight to the field view with `--field`).

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;

use pokebase_console::console::Console;
use pokebase_console::{Settings, field_view};

#[derive(Parser, Debug)]
#[command(name = "pokebase", about = "Slash-command console for the Pokébase API")]
struct Args {
    /// Backend base URL (overrides POKEBASE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Bubble count for the field view (overrides POKEBASE_BUBBLES)
    #[arg(long)]
    bubbles: Option<usize>,

    /// Simulation seed; defaults to the wall clock
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the console and run only the bubble-field view
    #[arg(long)]
    field: bool,
}

fn main() -> Result<()> {
    // .env is optional; absence is not an error
    let _ = dotenvy::dotenv();
    env_logger::init();

    let args = Args::parse();
    let mut settings = Settings::from_env();
    if let Some(url) = args.api_url {
        settings.api_base_url = url;
    }
    if let Some(count) = args.bubbles {
        settings.bubble_count = count;
    }

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    log::info!(
        "Pokébase console starting (backend {}, seed {seed})",
        settings.api_base_url
    );

    if args.field {
        return field_view::run(&settings, seed);
    }

    Console::new(settings, seed).run()
}
