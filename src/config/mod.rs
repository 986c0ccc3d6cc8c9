#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, FormArgs};
pub use toml_config::TomlConfig;

use serde::{Deserialize, Serialize};

/// 必填欄位空白時是否阻止計算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// 任一必填欄位空白就停止計算
    #[default]
    RequireAll,
    /// 不檢查空白，空白欄位走解析預設值
    Lenient,
}
