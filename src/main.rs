use anyhow::Context;

use bookrack_app::modules;
use bookrack_kernel::settings::Settings;
use bookrack_kernel::{InitCtx, ModuleRegistry};
use bookrack_store::TableClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookrack settings")?;
    bookrack_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        table = %settings.table.name,
        "bookrack-app starting"
    );

    let table = TableClient::connect(&settings.table).await;

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, table);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    bookrack_http::start_server(&registry, &settings).await?;

    registry.stop_all().await?;
    Ok(())
}
