//! Interactive root menu
//!
//! Runs when dynamojo is started without a subcommand: the operator picks
//! an action, then answers the table and location questions.

use crate::adapters::prompt::Prompter;
use crate::core::export::{DumpSummary, Exporter};
use crate::domain::{Result, TableName};
use std::io::Write;
use std::path::Path;

/// Root menu question
pub const ROOT_MESSAGE: &str = "What do you want to do?";
/// Root menu choice starting a dump
pub const SCAN_AND_DUMP_CHOICE: &str = "Scan and dump a table to JSON";
/// Root menu choice ending the session
pub const EXIT_CHOICE: &str = "Exit";

const TABLE_NAME_MESSAGE: &str = "Please enter the desired table name.";
const LOCATION_MESSAGE: &str =
    "Please enter the desired target location. (Blank = home directory)";

/// How an interactive session ended
#[derive(Debug)]
pub enum MenuOutcome {
    /// The operator chose to exit
    Exit,
    /// A dump was written
    Dumped(DumpSummary),
}

impl MenuOutcome {
    /// Process exit code for this outcome
    ///
    /// Exiting from the menu deliberately reports 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            MenuOutcome::Exit => 1,
            MenuOutcome::Dumped(_) => 0,
        }
    }
}

/// Runs the root menu once
///
/// Progress and results are written to `out`; questions go through
/// `prompter`.
///
/// # Errors
///
/// Prompt failures and every export error are returned unchanged.
pub async fn run_menu<P, W>(
    prompter: &mut P,
    exporter: &Exporter,
    out: &mut W,
) -> Result<MenuOutcome>
where
    P: Prompter,
    W: Write,
{
    let choice = prompter.ask_choice(ROOT_MESSAGE, &[SCAN_AND_DUMP_CHOICE, EXIT_CHOICE])?;
    if choice != 0 {
        tracing::debug!("Operator chose to exit");
        writeln!(out, "Bye bye")?;
        return Ok(MenuOutcome::Exit);
    }

    let table_name = loop {
        let answer = prompter.ask_text(TABLE_NAME_MESSAGE)?;
        match TableName::new(answer) {
            Ok(table_name) => break table_name,
            Err(e) => writeln!(out, "{e}")?,
        }
    };

    let location = prompter.ask_text(LOCATION_MESSAGE)?;
    let location = location.trim();
    let location = (!location.is_empty()).then(|| Path::new(location));

    let summary = exporter
        .export_with_progress(&table_name, location, |stage| {
            // Progress lines are best effort; a closed stdout must not abort the dump
            let _ = writeln!(out, "{}", stage.message(&table_name));
        })
        .await?;

    writeln!(out, "{}", summary.success_message())?;
    if let Some(warning) = summary.truncation_warning() {
        writeln!(out, "{warning}")?;
    }

    Ok(MenuOutcome::Dumped(summary))
}
