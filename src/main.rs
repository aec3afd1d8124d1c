use std::sync::Arc;

use anyhow::Context;
use spacex_dash::{config, data::loader, web};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = config::load_settings();
    let dataset = loader::load_csv(&settings.data_path)
        .inspect_err(|e| log::error!("Failed to load launch data: {e}"))
        .with_context(|| format!("loading {}", settings.data_path.display()))?;

    web::serve(&settings, Arc::new(dataset)).await
}
