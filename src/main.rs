use std::net::TcpListener;
use std::sync::Arc;

use anyhow::Context;

use mdmsite::app;
use mdmsite::repo::MemoryStore;
use mdmsite::settings::Settings;
use mdmsite::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    let subscriber = telemetry::create_subscriber(settings.app.log_filter(), std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!(addr = ?listener.local_addr()?, "Serving");

    let store = Arc::new(MemoryStore::new());

    app::run(listener, store)?.await.context("Failed to run app")
}
