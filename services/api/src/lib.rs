mod cli;
mod infra;
mod render;
mod routes;
mod server;

use career_match::error::AppError;

pub use render::format_failure;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
