use smsctl::{AppConfig, Cli, Outcome, execute};
use sms_sqlite::Db;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Diagnostics go to stderr so stdout only ever carries JSON documents.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::import()?;
    let AppConfig { database } = AppConfig::load(cli.config.as_deref())?;
    let db = Db::open(&database).await?;

    match execute(&db, cli.command).await? {
        Outcome::Done(document) => {
            println!("{}", serde_json::to_string_pretty(&document)?);
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Rejected(document) => {
            println!("{}", serde_json::to_string_pretty(&document)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
