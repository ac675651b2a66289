//! Drops the stale `category_id_1` and `seo.slug_1` indexes from `categories`

use clap::Parser;
use std::process::ExitCode;
use wearvirtually::runner::{run_builtin_task, GlobalArgs};
use wearvirtually::CATEGORY_INDEXES_TASK;

#[derive(Parser)]
#[command(name = "fix-category-indexes")]
#[command(about = "Drop the stale category indexes from the categories collection")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    run_builtin_task(&CATEGORY_INDEXES_TASK, &cli.global).await
}
