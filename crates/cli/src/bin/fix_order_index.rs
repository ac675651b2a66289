//! Drops the stale `order_id_1` index from `orders`

use clap::Parser;
use std::process::ExitCode;
use wearvirtually::runner::{run_builtin_task, GlobalArgs};
use wearvirtually::ORDER_INDEX_TASK;

#[derive(Parser)]
#[command(name = "fix-order-index")]
#[command(about = "Drop the stale order_id_1 index from the orders collection")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    run_builtin_task(&ORDER_INDEX_TASK, &cli.global).await
}
