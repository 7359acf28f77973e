mod cli_messages;
mod config;
mod consts;
mod dataset;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod navigation;
mod pipeline;
mod session;
mod ui;
mod weather;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode};
use crate::ui::UIConfig;
use crate::weather::location::location_names;
use crate::weather::{ForecastSource, Location, OpenMeteoClient};
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

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
    /// Start the dashboard
    Start {
        /// Location the Weather panel selects first. Defaults to the saved location.
        #[arg(long, value_name = "LOCATION")]
        location: Option<String>,

        /// Paint a solid background behind the dashboard
        #[arg(long = "with-background", action = ArgAction::SetTrue)]
        with_background: bool,

        /// Go straight to the login screen
        #[arg(long, action = ArgAction::SetTrue)]
        skip_splash: bool,
    },
    /// Fetch one forecast and print it, without starting the dashboard
    Weather {
        /// Location to fetch. Defaults to the saved location.
        #[arg(long, value_name = "LOCATION")]
        location: Option<String>,

        /// Print the forecast as JSON
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// List the locations the Weather panel offers
    Locations,
    /// Save the location the Weather panel selects first
    SetDefaultLocation {
        #[arg(long, value_name = "LOCATION")]
        location: String,
    },
    /// Delete the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_max_level();
    let args = Args::parse();
    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_cmd_error!(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), Box<dyn Error>> {
    let environment = Environment::from_env();
    let config_path = get_config_path()?;

    match command {
        Command::Start {
            location,
            with_background,
            skip_splash,
        } => {
            let config = Config::load_or_default(&config_path);
            let location = resolve_location(location.as_deref(), &config)?;
            let ui_config = UIConfig::new(
                with_background || config.with_background_color,
                location,
                skip_splash,
            );
            let source: Arc<dyn ForecastSource> = Arc::new(OpenMeteoClient::new(environment));
            run_tui_mode(source, ui_config).await
        }
        Command::Weather { location, json } => {
            let config = Config::load_or_default(&config_path);
            let location = resolve_location(location.as_deref(), &config)?;
            let client = OpenMeteoClient::new(environment);
            run_headless_mode(&client, location, json).await
        }
        Command::Locations => {
            let config = Config::load_or_default(&config_path);
            let default = config.location();
            for name in location_names() {
                let marker = if name == default.name { " (default)" } else { "" };
                println!("{}{}", name, marker);
            }
            Ok(())
        }
        Command::SetDefaultLocation { location } => {
            let location: Location = location.parse()?;
            set_default_location(&config_path, location)
        }
        Command::Reset => {
            print_cmd_info!("Resetting configuration", "{}", config_path.display());
            Config::clear(&config_path)?;
            print_cmd_success!("Configuration cleared", "");
            Ok(())
        }
    }
}

/// Location named on the command line, else the saved default.
fn resolve_location(requested: Option<&str>, config: &Config) -> Result<Location, Box<dyn Error>> {
    if let Some(name) = requested {
        return Ok(name.parse::<Location>()?);
    }
    let location = config.location();
    if !location.name.eq_ignore_ascii_case(config.default_location.trim()) {
        print_cmd_warn!(
            "Unknown saved location",
            "{:?}, using {}",
            config.default_location,
            location.name
        );
    }
    Ok(location)
}

fn set_default_location(config_path: &Path, location: Location) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load_or_default(config_path);
    config.default_location = location.name.to_string();
    config
        .save(config_path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    print_cmd_success!("Default location saved", "{}", location.name);
    Ok(())
}
