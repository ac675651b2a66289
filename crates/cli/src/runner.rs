//! Shared entry point plumbing for the maintenance binaries

use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use wearvirtually_core::config::DEFAULT_ENV_FILE;
use wearvirtually_storage::{IndexCatalog, StorageError};

use crate::bootstrap::{connect_catalog, load_config, load_env_file};
use crate::maintenance::{DropStrategy, MaintenanceOptions, MaintenanceReport};
use crate::tasks::{run_task, MaintenanceTask};

/// Flags accepted by every binary; none are required
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Environment file holding MONGODB_URI
    #[arg(long, value_name = "FILE", default_value = DEFAULT_ENV_FILE, global = true)]
    pub env_file: PathBuf,

    /// How candidates are checked before dropping
    #[arg(long, value_enum, default_value_t = DropStrategy::CheckFirst, global = true)]
    pub strategy: DropStrategy,

    /// Report what would be dropped without changing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn options(&self) -> MaintenanceOptions {
        MaintenanceOptions {
            strategy: self.strategy,
            dry_run: self.dry_run,
        }
    }
}

/// Initialize logging system
pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "{}={level},wearvirtually_core={level},wearvirtually_storage={level}",
            env!("CARGO_CRATE_NAME")
        ))
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

/// Load the env file and configuration, then connect
pub async fn prepare(args: &GlobalArgs) -> Result<Arc<dyn IndexCatalog>> {
    load_env_file(&args.env_file)?;
    let config = load_config(args.config.as_deref())?;
    connect_catalog(&config.storage).await
}

/// Process exit status for a finished run: 0 on success, 1 on any error
pub fn exit_status<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Log the outcome of a run and convert it to an exit code
pub fn report_exit<T>(result: Result<T>) -> ExitCode {
    if let Err(e) = &result {
        match e.downcast_ref::<StorageError>() {
            Some(storage) => error!(kind = %storage.kind(), "{e:#}"),
            None => error!("{e:#}"),
        }
    }
    ExitCode::from(exit_status(&result))
}

/// Print a human-readable summary of a report
pub fn print_report(report: &MaintenanceReport) {
    println!("Collection '{}':", report.collection);
    for outcome in &report.outcomes {
        println!("  {}: {}", outcome.index, outcome.outcome);
    }
}

/// Entry point for the single-task binaries
pub async fn run_builtin_task(task: &MaintenanceTask, args: &GlobalArgs) -> ExitCode {
    if let Err(e) = init_logging(args.verbose) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let result = async {
        let catalog = prepare(args).await?;
        let report = run_task(catalog.as_ref(), task, args.options()).await?;
        print_report(&report);
        info!(
            dropped = report.dropped().len(),
            skipped = report.skipped().len(),
            "Task '{}' complete",
            task.name
        );
        Ok::<(), anyhow::Error>(())
    }
    .await;

    report_exit(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status::<()>(&Ok(())), 0);
        assert_eq!(exit_status::<()>(&Err(anyhow!("boom"))), 1);
    }

    #[test]
    fn test_global_args_options() {
        let args = GlobalArgs {
            config: None,
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            strategy: DropStrategy::Blind,
            dry_run: true,
            verbose: false,
        };
        let options = args.options();
        assert_eq!(options.strategy, DropStrategy::Blind);
        assert!(options.dry_run);
    }
}
