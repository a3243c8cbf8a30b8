mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use actix_web::web;
use anyhow::Context;
use log::{error, info};

use config::DashboardConfig;
use state::DashboardState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();

    let state = DashboardState::load(&config)
        .inspect_err(|err| error!("cannot start dashboard: {err}"))
        .with_context(|| format!("loading {}", config.data_path.display()))?;

    info!(
        "serving dashboard on http://{}:{}/",
        config.host, config.port
    );
    app::start_server(web::Data::new(state), &config)
        .context("binding HTTP server")?
        .await
        .context("running HTTP server")?;

    Ok(())
}
