use anyhow::Result;
use clap::Parser;
use console::{Term, style};
use log::{error, info, warn};
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use ufc_library_importer::cli::{Cli, Command};
use ufc_library_importer::config::Config;
use ufc_library_importer::init;
use ufc_library_importer::menu::{import_downloads, index_events, show_main_menu};
use ufc_library_importer::signal::setup_shutdown_signal;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init::init_logger(&cli.loglevel);

    let mut config = match &cli.settings {
        Some(path) => Config::load_from(path)?,
        None => Config::new()?,
    };
    let shutdown_signal = setup_shutdown_signal();

    let Some(command) = cli.command else {
        run_menu(&config, &shutdown_signal)?;
        return Ok(ExitCode::SUCCESS);
    };

    command.apply_overrides(&mut config.settings);

    match command {
        Command::IndexEvents { force, .. } => match index_events(&config.settings, force) {
            Ok(_) => {
                info!("Events successfully updated.");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                error!("Failed to update events: {e:#}");
                Ok(ExitCode::FAILURE)
            }
        },
        Command::ImportDownloads { interactive, .. } => {
            match import_downloads(&config.settings, &shutdown_signal, interactive) {
                Ok(summary) if summary.errors == 0 => {
                    info!("Downloads successfully imported.");
                    Ok(ExitCode::SUCCESS)
                }
                Ok(summary) => {
                    error!("Failed to import {} download(s).", summary.errors);
                    Ok(ExitCode::FAILURE)
                }
                Err(e) => {
                    error!("Failed to import downloads: {e:#}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn run_menu(config: &Config, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    let term = Term::stdout();

    loop {
        match show_main_menu(&term, shutdown_signal, config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style("Goodbye!").green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style("Error:").red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
