use crate::config::Config;
use crate::menu::handlers::{run_import_downloads, run_index_events, show_settings};
use anyhow::Result;
use console::{Term, style};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style("=== UFC Library Importer ===").cyan().bold());
    println!("{}", style("(press ESC to exit)").dim());

    let options = vec![
        "Index events",
        "Import downloads",
        "Show settings",
        "Exit",
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose an action")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_index_events(term, config)?;
            Ok(true)
        }
        Some(1) => {
            run_import_downloads(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(2) => {
            show_settings(term, config)?;
            Ok(true)
        }
        Some(3) | None => Ok(false),
        _ => unreachable!(),
    }
}
