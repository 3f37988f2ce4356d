//! Catalog command - prints discovery documents without starting a server

use clap::Args;

use crate::config::AppConfig;
use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Print only the service provider of this model
    #[arg(long)]
    pub model: Option<String>,
}

/// Bootstrap the adapter and print the catalog (or one provider) as JSON
pub async fn run(args: CatalogArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = crate::create_app_state(&config)?;

    let json = match args.model {
        Some(model) => {
            serde_json::to_string_pretty(&state.catalog_service.service_provider(&model).await?)?
        }
        None => serde_json::to_string_pretty(&state.catalog_service.catalog().await?)?,
    };

    println!("{}", json);
    Ok(())
}
