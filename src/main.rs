use anyhow::{Context, Result};
use resumekit::{BedrockModel, Config, SiteBuilder, TextModel, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    telemetry::init(&config.log_level).context("Failed to initialize logging")?;
    config.validate().context("Invalid configuration")?;

    let model = if config.skip_ats {
        None
    } else {
        let model = BedrockModel::connect(config.region.clone(), config.model_id.clone()).await;
        info!(region = %config.region, model_id = model.model_id(), "Using Bedrock for ATS analysis");
        Some(model)
    };

    let builder = SiteBuilder::new(config.site_paths());
    let report = builder
        .build(model.as_ref().map(|m| m as &dyn TextModel))
        .await
        .context("Failed to build resume site")?;

    println!("Generated: {}", report.index_path.display());
    if let Some(analysis) = &report.analysis {
        println!("ATS score: {}", analysis.overall_score);
    }

    Ok(())
}
