//! 表單欄位的文字轉數值。
//!
//! 解析永遠不會失敗：金額欄位不是有限小數時視為 `0.0`，
//! 複利頻率不是 32 位元整數時視為 `1`。

pub const AMOUNT_FALLBACK: f64 = 0.0;
pub const FREQUENCY_FALLBACK: i64 = 1;

pub fn try_parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn parse_amount(text: &str) -> f64 {
    try_parse_amount(text).unwrap_or(AMOUNT_FALLBACK)
}

/// 以 `i32` 解析，超出範圍的數字與其他無效文字一樣走預設值
pub fn try_parse_frequency(text: &str) -> Option<i64> {
    text.trim().parse::<i32>().ok().map(i64::from)
}

/// 非正數原樣傳回，由複利公式改用 1
pub fn parse_frequency(text: &str) -> i64 {
    try_parse_frequency(text).unwrap_or(FREQUENCY_FALLBACK)
}
