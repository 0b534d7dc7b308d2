use std::sync::Arc;

use clap::Parser;
use range_filler::utils::{logger, validation::Validate};
use range_filler::{
    CliConfig, CredentialSource, EnvironmentMap, FillEngine, FillParams, FillerError,
    LocalCredentials, SeaOrmInventory, SecretsManagerCredentials, TracingProgress,
};

fn fail(error: FillerError) -> ! {
    tracing::error!("❌ {}", error);
    eprintln!("❌ {}", error);
    std::process::exit(error.exit_code().max(1));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.debug);

    tracing::info!("Starting range-filler");
    if config.debug {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(e);
    }

    let environments = match &config.environments_file {
        Some(path) => match EnvironmentMap::from_file(path) {
            Ok(map) => map,
            Err(e) => fail(e),
        },
        None => EnvironmentMap::default(),
    };
    let target = match environments.target(&config.env) {
        Ok(target) => target,
        Err(e) => fail(e),
    };

    let source: Box<dyn CredentialSource> = if config.env == "local" {
        Box::new(LocalCredentials)
    } else {
        Box::new(SecretsManagerCredentials::new(config.profile.clone()))
    };
    let credentials = match source
        .db_credentials(&config.env, config.db_region.as_deref())
        .await
    {
        Ok(credentials) => credentials,
        Err(e) => fail(e),
    };

    let store = match SeaOrmInventory::connect(target, &credentials).await {
        Ok(store) => Arc::new(store),
        Err(e) => fail(e),
    };

    let engine = FillEngine::new(
        store,
        Arc::new(TracingProgress),
        FillParams {
            region: config.api_region.clone(),
            batch_count: config.batch_count,
            chunk_size: config.chunk_size,
        },
    );

    match engine
        .run(config.expanded_network, config.current_network)
        .await
    {
        Ok(summary) if summary.failed_batches == 0 => {
            println!(
                "✅ {} addresses processed: {} inserted, {} skipped",
                summary.total, summary.inserted, summary.skipped
            );
        }
        Ok(summary) => {
            eprintln!(
                "❌ {} of {} batches failed; {} inserted, {} skipped so far. Rerun to load the rest.",
                summary.failed_batches, config.batch_count, summary.inserted, summary.skipped
            );
            std::process::exit(2);
        }
        Err(e) => fail(e),
    }

    Ok(())
}
