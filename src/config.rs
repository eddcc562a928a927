//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::ats::{DEFAULT_MODEL_ID, DEFAULT_REGION};
use crate::site::SitePaths;

/// Command line configuration for Resumekit.
#[derive(Debug, Clone, Parser)]
#[command(name = "resumekit", version, about, long_about = None)]
pub struct Config {
    /// Markdown resume source
    #[arg(long, default_value = "resume.md")]
    pub resume: PathBuf,

    /// HTML template containing {{PAGE_TITLE}} and {{CONTENT}}
    #[arg(long, default_value = "src/template.html")]
    pub template: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// AWS region used for the ATS model call
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Bedrock model identifier used for ATS analysis
    #[arg(long, env = "ATS_MODEL_ID", default_value = DEFAULT_MODEL_ID)]
    pub model_id: String,

    /// Skip ATS analysis entirely
    #[arg(long)]
    pub skip_ats: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "RESUMEKIT_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    ///
    /// Loads a `.env` file first when one is present so that `AWS_REGION`
    /// and `ATS_MODEL_ID` can be supplied without exporting them.
    pub fn parse() -> Self {
        dotenvy::dotenv().ok();
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the resume or template path does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.resume.exists() {
            bail!("Resume file does not exist: {}", self.resume.display());
        }

        if !self.template.exists() {
            bail!("Template file does not exist: {}", self.template.display());
        }

        Ok(())
    }

    /// Returns the input and output locations for the site builder.
    pub fn site_paths(&self) -> SitePaths {
        SitePaths {
            resume: self.resume.clone(),
            template: self.template.clone(),
            output: self.output.clone(),
        }
    }
}
