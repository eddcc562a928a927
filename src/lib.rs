//! Static resume site builder with ATS readiness analysis.

pub mod ats;
mod config;
mod markdown;
mod site;
pub mod telemetry;
mod template;
mod util;

pub use ats::{AtsAnalysis, AtsAnalyzer, BedrockModel, ModelError, TextModel};
pub use config::Config;
pub use markdown::{DEFAULT_TITLE, MarkdownRenderer, extract_title};
pub use site::{
    ATS_ANALYSIS_FILE, BuildReport, CONVERTED_FILE, INDEX_FILE, SMOKE_TEST_FILE, SiteBuilder,
    SitePaths, page_title, smoke_test_fragment,
};
pub use template::{CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER, Template, render_page};
pub use util::{write_json, write_text};
