//! Guided mode, used when no subcommand is given.

use chrono::NaiveDate;
use dialoguer::{Input, Select};
use shelter_dash_intake_models::ViewSelector;
use shelter_dash_source::IntakeTable;

use crate::commands;

/// Top-level tool selection.
enum Tool {
    Server,
    Chart,
    Bounds,
}

impl Tool {
    const ALL: &[Self] = &[Self::Server, Self::Chart, Self::Bounds];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Server => "Start dashboard server",
            Self::Chart => "Render a chart as JSON",
            Self::Bounds => "Show data range",
        }
    }
}

/// Asks which tool to run and runs it.
///
/// `load` is only called for tools that need the table, so the server can
/// load the file itself.
///
/// # Errors
///
/// Returns an error if a prompt fails, the table cannot be loaded, or the
/// server fails.
pub fn run(
    load: impl FnOnce() -> Result<IntakeTable, Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Shelter Intake Dashboard");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Server => {
            actix_web::rt::System::new().block_on(shelter_dash_server::interactive::run())?;
        }
        Tool::Bounds => println!("{}", commands::describe_bounds(&load()?)),
        Tool::Chart => {
            let table = load()?;

            let views: Vec<&str> = ViewSelector::all().iter().map(|v| v.label()).collect();
            let view = ViewSelector::all()[Select::new()
                .with_prompt("Which data would you like to explore?")
                .items(&views)
                .default(0)
                .interact()?];

            let from = prompt_day("From", table.date_min().date())?;
            let to = prompt_day("To", table.date_max().date())?;

            println!(
                "{}",
                commands::chart_json(&table, view, Some(from), Some(to), true)?
            );
        }
    }

    Ok(())
}

fn prompt_day(prompt: &str, default: NaiveDate) -> Result<NaiveDate, dialoguer::Error> {
    Input::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()
}
