use crate::utils::error::{CalcError, Result};
use std::collections::BTreeSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 回傳所有空字串或只有空白的欄位名稱
///
/// 這裡只檢查有沒有填寫；有填但不是數字的文字交給
/// [`crate::core::parse`] 的預設值處理
pub fn validate_required<I, K, V>(fields: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    fields
        .into_iter()
        .filter(|(_, value)| is_blank(value.as_ref()))
        .map(|(name, _)| name.as_ref().to_string())
        .collect()
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CalcError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CalcError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if is_blank(value) {
        return Err(CalcError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CalcError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
