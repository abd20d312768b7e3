#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod config;
pub mod export;
pub mod governor;
pub mod prompts;
pub mod report;
pub mod research;

pub use client::{ChatClient, ClientError};
pub use config::{
    resolve_api_key, AgentConfig, ApiSettings, ConfigError, QuotaSettings, ResearchSettings,
};
pub use export::{
    default_base_name, export_spreadsheet, render_text_report, save_all_formats,
    save_report_json, save_report_txt, ExportError, ExportFormat,
};
pub use governor::{GovernorError, QuotaSnapshot, RateGovernor};
pub use prompts::{PromptError, PromptRenderer};
pub use report::{AnalysisResults, CallOutcome, ReportEntry, ReportKind, Reports};
pub use research::{ComprehensivePlan, ResearchAgent, ResearchError};
