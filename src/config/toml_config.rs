use crate::config::ValidationPolicy;
use crate::core::parse::try_parse_amount;
use crate::core::report::ReportStyle;
use crate::core::{InterestKind, SettingsProvider};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_DECIMAL_PLACES: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub validation: ValidationConfig,
    pub defaults: DefaultsConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub policy: ValidationPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub simple_rate: String,
    pub compound_rate: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            simple_rate: "10".to_string(),
            compound_rate: "5".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub decimal_places: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            decimal_places: 2,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的區段使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CURRENCY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        // 驗證貨幣符號
        validate_non_empty_string("display.currency_symbol", &self.display.currency_symbol)?;
        // 驗證小數位數
        validate_range(
            "display.decimal_places",
            self.display.decimal_places,
            0,
            MAX_DECIMAL_PLACES,
        )?;

        // 驗證預設利率必須是數字
        for (field, rate) in [
            ("defaults.simple_rate", &self.defaults.simple_rate),
            ("defaults.compound_rate", &self.defaults.compound_rate),
        ] {
            if try_parse_amount(rate).is_none() {
                return Err(CalcError::InvalidConfigValue {
                    field: field.to_string(),
                    value: rate.clone(),
                    reason: "Default rate must be a number".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn report_style(&self) -> ReportStyle {
        ReportStyle::from_settings(self)
    }
}

impl SettingsProvider for TomlConfig {
    fn validation_policy(&self) -> ValidationPolicy {
        self.validation.policy
    }

    fn default_rate(&self, kind: InterestKind) -> &str {
        match kind {
            InterestKind::Simple => &self.defaults.simple_rate,
            InterestKind::Compound => &self.defaults.compound_rate,
        }
    }

    fn currency_symbol(&self) -> &str {
        &self.display.currency_symbol
    }

    fn decimal_places(&self) -> usize {
        self.display.decimal_places
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.validation_policy(), ValidationPolicy::RequireAll);
        assert_eq!(config.default_rate(InterestKind::Simple), "10");
        assert_eq!(config.default_rate(InterestKind::Compound), "5");
        assert_eq!(config.currency_symbol(), "₹");
        assert_eq!(config.decimal_places(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[validation]
policy = "lenient"

[defaults]
simple_rate = "8.5"
compound_rate = "4"

[display]
currency_symbol = "$"
decimal_places = 3
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.validation_policy(), ValidationPolicy::Lenient);
        assert_eq!(config.default_rate(InterestKind::Simple), "8.5");
        assert_eq!(config.report_style().money(1.5), "$1.500");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("INTEREST_CALC_TEST_SYMBOL", "€");

        let toml_content = r#"
[display]
currency_symbol = "${INTEREST_CALC_TEST_SYMBOL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.display.currency_symbol, "€");

        std::env::remove_var("INTEREST_CALC_TEST_SYMBOL");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let toml_content = r#"
[display]
currency_symbol = "${INTEREST_CALC_SURELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.display.currency_symbol, "${INTEREST_CALC_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let too_precise = TomlConfig::from_toml_str("[display]\ndecimal_places = 11\n").unwrap();
        assert!(too_precise.validate().is_err());

        let blank_symbol = TomlConfig::from_toml_str("[display]\ncurrency_symbol = \" \"\n").unwrap();
        assert!(blank_symbol.validate().is_err());

        let bad_rate = TomlConfig::from_toml_str("[defaults]\nsimple_rate = \"ten\"\n").unwrap();
        assert!(matches!(
            bad_rate.validate(),
            Err(CalcError::InvalidConfigValue { ref field, .. }) if field == "defaults.simple_rate"
        ));
    }

    #[test]
    fn test_unknown_policy_is_a_parse_error() {
        let result = TomlConfig::from_toml_str("[validation]\npolicy = \"sometimes\"\n");
        assert!(matches!(result, Err(CalcError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\ncurrency_symbol = \"GBP \"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.currency_symbol(), "GBP ");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/definitely/not/here/interest.toml");
        assert!(matches!(result, Err(CalcError::IoError(_))));
    }
}
