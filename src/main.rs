use anyhow::Result;
use clap::Parser;
use rusty_golf_ledger::collector::{EditorLines, PromptCollector};
use rusty_golf_ledger::config::{self, Cli, Command, Settings};
use rusty_golf_ledger::logging::init_logging;
use rusty_golf_ledger::presenter::TextPresenter;
use rusty_golf_ledger::session::{run_session, show_tally};
use rusty_golf_ledger::storage::FileStore;
use rusty_golf_ledger::sync::{GitSync, NoopSync, SyncAgent};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = config::load_settings(Cli::parse())?;
    init_logging(&settings.log_filter)?;
    tracing::debug!(?settings, "loaded settings");

    if settings.sync {
        let mut sync = GitSync::new(
            settings.repo_dir.clone(),
            settings.remote.clone(),
            settings.data_file.clone(),
        );
        dispatch(&settings, &mut sync)
    } else {
        dispatch(&settings, &mut NoopSync)
    }
}

fn dispatch<Y: SyncAgent>(settings: &Settings, sync: &mut Y) -> Result<()> {
    let store = FileStore::new(settings.data_path());
    let mut presenter = TextPresenter::new(
        std::io::stdout(),
        settings.player_a.clone(),
        settings.player_b.clone(),
    );
    match settings.command {
        Command::Play => {
            let mut collector = PromptCollector::new(
                EditorLines::new()?,
                std::io::stdout(),
                settings.player_a.clone(),
                settings.player_b.clone(),
            );
            let report = run_session(store, &mut collector, &mut presenter, sync)?;
            tracing::info!(
                completed = report.completed.len(),
                abandoned = ?report.abandoned,
                "session finished"
            );
        }
        Command::Tally => {
            show_tally(store, &mut presenter, sync)?;
        }
    }
    Ok(())
}
