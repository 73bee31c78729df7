use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

use progress_poller::{
    app::{build_app, ExitStatus},
    infra::config::AppConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    // config y dispatcher
    let config = AppConfig::from_env().context("loading configuration")?;
    let url = config
        .require_status_url()
        .context("a status endpoint is required")?
        .to_string();
    let app = build_app(config).context("building dispatcher")?;

    // un único request: no hay bucle de polling
    let result = app.dispatcher.dispatch(&url).await;
    match &result {
        Ok(outcome) => println!("{}", outcome.summary()),
        Err(err) => tracing::debug!(error = %err, "dispatch ended with an error"),
    }

    let status = ExitStatus::from_outcome(&result);
    if status != ExitStatus::Ok {
        std::process::exit(status.code());
    }
    Ok(())
}
