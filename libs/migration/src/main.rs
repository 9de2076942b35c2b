//! Standalone migration runner, e.g. `cargo run -p migration -- up`.
//! Reads `DATABASE_URL` like the API does at startup.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
