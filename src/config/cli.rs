use crate::domain::model::Language;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "domainworth")]
#[command(about = "AI-powered domain name valuation in English and Arabic")]
pub struct CliConfig {
    /// Domain to appraise; starts an interactive session when omitted
    pub domain: Option<String>,

    /// Display and narrative language
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the completion API
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub temperature: Option<f32>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Render width in columns
    #[arg(long)]
    pub width: Option<usize>,

    /// Print the validated valuation as JSON instead of rendering it
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
