use crate::core::report::OutputFormat;
use crate::core::{InterestForm, InterestKind};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "interest-calc")]
#[command(about = "Simple and compound interest calculator", version)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Calculate even when fields are blank
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Simple interest: P × R × T / 100
    Simple(FormArgs),

    /// Compound interest: P × (1 + R / 100n)^(nT)
    Compound {
        #[command(flatten)]
        form: FormArgs,

        /// Compounding periods per year
        #[arg(short = 'n', long, default_value = "", allow_negative_numbers = true)]
        frequency: String,
    },

    /// Calculate every row of a CSV file
    Batch {
        /// CSV with header kind,principal,rate,time,frequency
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write results (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// 保留輸入的文字，稍後再解析，才能回報空白欄位
#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    /// Principal amount
    #[arg(short, long, default_value = "", allow_negative_numbers = true)]
    pub principal: String,

    /// Annual rate in percent (falls back to the configured default)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<String>,

    /// Time in years
    #[arg(short, long, default_value = "", allow_negative_numbers = true)]
    pub time: String,
}

impl FormArgs {
    pub fn to_form(&self, default_rate: &str) -> InterestForm {
        InterestForm::new(
            self.principal.as_str(),
            self.rate.as_deref().unwrap_or(default_rate),
            self.time.as_str(),
        )
    }
}

impl Command {
    pub fn kind(&self) -> Option<InterestKind> {
        match self {
            Command::Simple(_) => Some(InterestKind::Simple),
            Command::Compound { .. } => Some(InterestKind::Compound),
            Command::Batch { .. } => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate_path("config", &config.to_string_lossy())?;
        }

        if let Command::Batch { input, output } = &self.command {
            validate_path("input", &input.to_string_lossy())?;
            if let Some(output) = output {
                validate_path("output", &output.to_string_lossy())?;
            }
        }

        Ok(())
    }
}
