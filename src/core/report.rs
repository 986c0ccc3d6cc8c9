use crate::core::{Calculation, Field, InterestKind, SettingsProvider};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn format_currency(amount: f64, symbol: &str, decimals: usize) -> String {
    format!("{}{:.*}", symbol, decimals, amount)
}

/// 每個空白欄位一行 `標籤: 提示`，欄位名稱無法辨識時只輸出名稱
pub fn render_missing_fields(kind: InterestKind, fields: &[String]) -> Vec<String> {
    fields
        .iter()
        .map(|name| match Field::from_name(name) {
            Some(field) => format!("{}: {}", field.label(kind), field.prompt(kind)),
            None => name.clone(),
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub currency_symbol: String,
    pub decimal_places: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            decimal_places: 2,
        }
    }
}

impl ReportStyle {
    pub fn from_settings<S: SettingsProvider + ?Sized>(settings: &S) -> Self {
        Self {
            currency_symbol: settings.currency_symbol().to_string(),
            decimal_places: settings.decimal_places(),
        }
    }

    pub fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.currency_symbol, self.decimal_places)
    }

    pub fn render_text(&self, calculation: &Calculation) -> String {
        format!(
            "{}: {}\nTotal Amount: {}",
            calculation.kind.title(),
            self.money(calculation.result.interest),
            self.money(calculation.result.total)
        )
    }

    pub fn render(&self, calculation: &Calculation, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(calculation)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(calculation)?),
        }
    }
}
