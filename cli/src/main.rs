//! CLI entrypoint for gavel
//!
//! Wires together all layers using dependency injection and hands the
//! session to the courtroom REPL.

use anyhow::{Result, anyhow};
use clap::Parser;
use gavel_application::{BattleEngine, CourtroomNotifier, Oracle};
use gavel_infrastructure::{
    CannedOracle, CaseLibrary, GavelConfig, InMemoryBattleRepository, OpenRouterOracle,
    ThreadRandom,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod args;
mod presenter;
mod repl;

use args::Cli;
use presenter::ConsolePresenter;
use repl::CourtRepl;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let library = CaseLibrary::builtin();
    if cli.list_cases {
        for case in library.all() {
            println!(
                "{:>3}  {:<32} {:<10} difficulty {}",
                case.id, case.title, case.case_type, case.difficulty
            );
        }
        return Ok(());
    }

    let mut config = if cli.no_config {
        GavelConfig::load_defaults()
    } else {
        GavelConfig::load(cli.config.as_ref())?
    };
    if let Some(model) = &cli.model {
        config.oracle.model = model.clone();
    }

    let needle = cli.case.as_deref().unwrap_or("1");
    let case = library
        .find(needle)
        .ok_or_else(|| anyhow!("no case matches '{needle}'; try --list-cases"))?
        .clone();

    // === Dependency Injection ===
    let oracle: Arc<dyn Oracle> = if cli.offline || config.oracle.api_key.is_none() {
        info!("no oracle configured; running offline with canned counsel");
        Arc::new(CannedOracle::new())
    } else {
        Arc::new(OpenRouterOracle::from_config(&config.oracle))
    };
    let repository = Arc::new(InMemoryBattleRepository::new());
    let presenter = Arc::new(ConsolePresenter::new(cli.quiet));
    presenter.print_welcome(&case);

    let notifier: Arc<dyn CourtroomNotifier> = presenter.clone();
    let engine = BattleEngine::open(
        case,
        oracle,
        repository,
        notifier,
        Box::new(ThreadRandom),
        config.engine_config(),
    )
    .await?;

    let repl = CourtRepl::new(engine.clone(), presenter);
    repl.run().await?;
    engine.close().await?;

    Ok(())
}
