//! Seeds the admin verification code into the development database.
//!
//! Run from the directory holding `dev.db`:
//! ```
//! cargo run -p verification-seed --bin seed
//! ```
//!
//! Prints `inserted` or `present` on stdout; logs go to stderr.

use tracing_subscriber::EnvFilter;
use verification_seed::config::SeedConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    verification_seed::db::run(&SeedConfig::default(), std::io::stdout().lock()).await?;
    Ok(())
}
