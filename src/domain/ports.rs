use crate::domain::model::{Field, InterestInput, InterestKind, InterestResult};

/// 利息公式
pub trait InterestFormula: Send + Sync {
    fn kind(&self) -> InterestKind;

    /// 必填欄位，依畫面順序排列
    fn required_fields(&self) -> &'static [Field];

    fn compute(&self, input: &InterestInput) -> InterestResult;
}

pub trait SettingsProvider: Send + Sync {
    fn validation_policy(&self) -> crate::config::ValidationPolicy;
    fn default_rate(&self, kind: InterestKind) -> &str;
    fn currency_symbol(&self) -> &str;
    fn decimal_places(&self) -> usize;
}
