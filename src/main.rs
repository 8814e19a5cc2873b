mod audio;
mod board;
mod cli_messages;
mod config;
mod consts;
mod events;
mod feed;
mod logging;
mod runtime;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::wallboard_consts::DEFAULT_VIEWPORT_HEIGHT_PX;
use crate::feed::FeedLocation;
use crate::logging::get_rust_log_level;
use crate::session::{run_summary_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

/// Environment variable consulted when neither `--feed` nor the config names a feed.
const FEED_ENV_VAR: &str = "WALLBOARD_FEED";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the wallboard
    Start {
        /// Feed location: an http(s) URL or a path to a JSON file
        #[arg(long, value_name = "LOC")]
        feed: Option<String>,

        /// Paint a dark background behind the dashboard
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Fetch the feed once and print its groups, screens and sizes
    Summary {
        /// Feed location: an http(s) URL or a path to a JSON file
        #[arg(long, value_name = "LOC")]
        feed: Option<String>,

        /// Viewport height in pixels used for the layout figures
        #[arg(long, value_name = "PX", default_value_t = DEFAULT_VIEWPORT_HEIGHT_PX)]
        viewport_height: f64,
    },
    /// Save the feed location to the configuration file.
    SetFeed {
        /// Feed location: an http(s) URL or a path to a JSON file
        #[arg(value_name = "LOC")]
        location: String,
    },
    /// Delete the configuration file.
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(get_rust_log_level().into());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            feed,
            with_background,
        } => {
            let feed = resolve_feed(feed, &config_path)?;
            let session = setup_session(&feed)?;
            run_tui_mode(session, with_background).await
        }
        Command::Summary {
            feed,
            viewport_height,
        } => {
            let feed = resolve_feed(feed, &config_path)?;
            let session = setup_session(&feed)?;
            run_summary_mode(session, viewport_height).await
        }
        Command::SetFeed { location } => {
            if let Err(e) = location.parse::<FeedLocation>() {
                print_cmd_error!("Invalid feed location", &e.to_string());
                return Err(e.into());
            }
            Config::new(location.trim().to_string())
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Feed saved", "{}", location.trim());
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!(
                "Reset",
                "Clearing configuration file {}",
                config_path.display()
            );
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Picks the feed location: the flag, then the saved config, then the environment.
fn resolve_feed(flag: Option<String>, config_path: &Path) -> Result<String, Box<dyn Error>> {
    if let Some(feed) = flag.filter(|f| !f.trim().is_empty()) {
        return Ok(feed);
    }
    if config_path.exists() {
        match Config::load_from_file(config_path) {
            Ok(config) if !config.feed.trim().is_empty() => return Ok(config.feed),
            Ok(_) => {}
            Err(e) => {
                print_cmd_warn!("Config unreadable", "{}: {}", config_path.display(), e);
            }
        }
    }
    if let Ok(feed) = std::env::var(FEED_ENV_VAR) {
        if !feed.trim().is_empty() {
            return Ok(feed);
        }
    }
    print_cmd_error!(
        "No feed configured",
        "Pass --feed, run `status-wallboard set-feed <LOC>` or set WALLBOARD_FEED."
    );
    Err(Box::from("no feed location"))
}
