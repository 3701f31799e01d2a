#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the shelter intake dashboard.
//!
//! Can print the data's date range, render a single chart to stdout as
//! JSON, or start the dashboard server. With no subcommand it asks which
//! of these to run.

mod commands;
mod interactive;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use shelter_dash_intake_models::ViewSelector;
use shelter_dash_server::ServerConfig;
use shelter_dash_source::{IntakeTable, load_csv, paths};

#[derive(Parser)]
#[command(name = "shelter_dash", about = "Animal shelter intake dashboard")]
struct Cli {
    /// Intake CSV to load (overrides `INTAKES_CSV`)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the record count and observed date range
    Bounds,
    /// Render one chart and print its spec as JSON
    Chart {
        /// Which view to render: type, time or location
        #[arg(long, default_value = "type")]
        view: ViewSelector,
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Start the dashboard server
    Serve {
        /// Address to bind (overrides `BIND_ADDR`)
        #[arg(long)]
        bind_addr: Option<String>,
        /// Port to bind (overrides `PORT`)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    let data_path = cli.data.unwrap_or_else(paths::intakes_csv_path);
    let load = || -> Result<IntakeTable, Box<dyn std::error::Error>> {
        Ok(load_csv(&data_path)?)
    };

    match cli.command {
        None => interactive::run(load)?,
        Some(Commands::Bounds) => println!("{}", commands::describe_bounds(&load()?)),
        Some(Commands::Chart {
            view,
            from,
            to,
            pretty,
        }) => println!(
            "{}",
            commands::chart_json(&load()?, view, from, to, pretty)?
        ),
        Some(Commands::Serve { bind_addr, port }) => {
            let defaults = ServerConfig::from_env();
            let config = ServerConfig {
                bind_addr: bind_addr.unwrap_or(defaults.bind_addr),
                port: port.unwrap_or(defaults.port),
                data_path: data_path.clone(),
            };
            actix_web::rt::System::new().block_on(shelter_dash_server::run_server(config))?;
        }
    }

    Ok(())
}
