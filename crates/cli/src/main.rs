//! Wear Virtually index maintenance CLI
//!
//! Removes stale secondary indexes from the application database.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use wearvirtually::maintenance::drop_indexes;
use wearvirtually::runner::{init_logging, prepare, print_report, report_exit, GlobalArgs};
use wearvirtually::tasks::{
    run_task, run_tasks, BUILTIN_TASKS, CATEGORY_INDEXES_TASK, ORDER_INDEX_TASK,
};

#[derive(Parser)]
#[command(name = "wv-indexes")]
#[command(about = "Stale index maintenance for the Wear Virtually database")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop the stale order_id_1 index from orders
    OrderIndex,
    /// Drop the stale category_id_1 and seo.slug_1 indexes from categories
    CategoryIndexes,
    /// Run every built-in task in order
    All,
    /// Show the built-in tasks
    Tasks,
    /// List the indexes of a collection
    List {
        /// Collection name
        collection: String,
    },
    /// Drop named indexes from a collection
    Drop {
        /// Collection name
        collection: String,
        /// Index names
        #[arg(required = true)]
        indexes: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_logging(cli.global.verbose) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    report_exit(run(cli).await)
}

async fn run(cli: Cli) -> Result<()> {
    let options = cli.global.options();

    match cli.command {
        Commands::Tasks => {
            for task in BUILTIN_TASKS {
                println!("{:<18} {}", task.name, task.description);
            }
        }
        Commands::OrderIndex => {
            let catalog = prepare(&cli.global).await?;
            print_report(&run_task(catalog.as_ref(), &ORDER_INDEX_TASK, options).await?);
        }
        Commands::CategoryIndexes => {
            let catalog = prepare(&cli.global).await?;
            print_report(&run_task(catalog.as_ref(), &CATEGORY_INDEXES_TASK, options).await?);
        }
        Commands::All => {
            let catalog = prepare(&cli.global).await?;
            for report in run_tasks(catalog.as_ref(), BUILTIN_TASKS, options).await? {
                print_report(&report);
            }
        }
        Commands::List { collection } => {
            let catalog = prepare(&cli.global).await?;
            let names = catalog.list_index_names(&collection).await?;
            if names.is_empty() {
                println!("Collection '{collection}' has no indexes");
            }
            for name in names {
                println!("{name}");
            }
        }
        Commands::Drop {
            collection,
            indexes,
        } => {
            let catalog = prepare(&cli.global).await?;
            print_report(&drop_indexes(catalog.as_ref(), &collection, &indexes, options).await?);
        }
    }

    Ok(())
}
