use crate::component::download_importer::{DialoguerPrompter, DownloadImporter, ImportSummary};
use crate::component::event_indexer::{EventIndexer, IndexUpdate, current_season, read_index};
use crate::config::save::save_settings;
use crate::config::{Config, UserSettings};
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use dialoguer::Confirm;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 更新賽事快取
pub fn index_events(settings: &UserSettings, force: bool) -> Result<IndexUpdate> {
    let indexer = EventIndexer::new(settings.clone())?;
    indexer.run(force, settings.freshness_days)
}

/// 讀取快取中的賽事並匯入下載資料夾
pub fn import_downloads(
    settings: &UserSettings,
    shutdown_signal: &Arc<AtomicBool>,
    interactive: bool,
) -> Result<ImportSummary> {
    let catalog = read_index(&settings.cache_file(current_season()));

    let mut importer = DownloadImporter::new(settings.clone(), Arc::clone(shutdown_signal));
    if interactive {
        importer = importer.with_prompter(Box::new(DialoguerPrompter));
    }

    importer.run(&catalog)
}

pub fn run_index_events(term: &Term, config: &Config) -> Result<()> {
    let force = Confirm::new()
        .with_prompt("Force re-indexing even if the cache is fresh?")
        .default(false)
        .interact()?;

    if let Err(e) = index_events(&config.settings, force) {
        eprintln!("{} {e:#}", style("Error:").red().bold());
    }

    pause(term)?;
    Ok(())
}

pub fn run_import_downloads(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &Config,
) -> Result<()> {
    if let Err(e) = import_downloads(&config.settings, shutdown_signal, true) {
        eprintln!("{} {e:#}", style("Error:").red().bold());
    }

    pause(term)?;
    Ok(())
}

pub fn show_settings(term: &Term, config: &Config) -> Result<()> {
    term.clear_screen()?;
    println!("{}", style("=== Settings ===").cyan().bold());
    println!(
        "{} {}",
        style("Settings file:").dim(),
        config.settings_path.display()
    );
    println!();
    println!("{}", serde_json::to_string_pretty(&config.settings)?);

    if !config.settings_path.exists() {
        let save = Confirm::new()
            .with_prompt(format!(
                "Save these settings to {}?",
                config.settings_path.display()
            ))
            .default(false)
            .interact()?;
        if save {
            save_settings(&config.settings, &config.settings_path)?;
            println!("{}", style("Settings saved").green());
        }
    }

    pause(term)?;
    Ok(())
}
