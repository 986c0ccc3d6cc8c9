use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestKind {
    Simple,
    Compound,
}

impl InterestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestKind::Simple => "simple",
            InterestKind::Compound => "compound",
        }
    }

    /// 報表利息那一行的標題
    pub fn title(&self) -> &'static str {
        match self {
            InterestKind::Simple => "Simple Interest",
            InterestKind::Compound => "Compound Interest",
        }
    }
}

impl fmt::Display for InterestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterestKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(InterestKind::Simple),
            "compound" => Ok(InterestKind::Compound),
            other => Err(CalcError::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// 使用者填寫的文字欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Principal,
    Time,
    Frequency,
    Rate,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Principal => "principal",
            Field::Time => "time",
            Field::Frequency => "frequency",
            Field::Rate => "rate",
        }
    }

    pub fn label(&self, kind: InterestKind) -> &'static str {
        match (self, kind) {
            (Field::Principal, _) => "Principal",
            (Field::Time, _) => "Time (years)",
            (Field::Frequency, _) => "Compounds per year",
            (Field::Rate, InterestKind::Simple) => "Rate (%)",
            (Field::Rate, InterestKind::Compound) => "Annual Rate (%)",
        }
    }

    /// 欄位空白時顯示的提示，單利與複利畫面的用詞不同
    pub fn prompt(&self, kind: InterestKind) -> &'static str {
        match (self, kind) {
            (Field::Principal, _) => "Enter the principal amount",
            (Field::Time, InterestKind::Simple) => "Enter the time",
            (Field::Time, InterestKind::Compound) => "Enter the time period",
            (Field::Frequency, _) => "Enter the compounding frequency",
            (Field::Rate, InterestKind::Simple) => "Enter the rate",
            (Field::Rate, InterestKind::Compound) => "Enter the annual rate",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "principal" => Some(Field::Principal),
            "time" => Some(Field::Time),
            "frequency" => Some(Field::Frequency),
            "rate" => Some(Field::Rate),
            _ => None,
        }
    }
}

/// 欄位原始文字，保持輸入時的樣子
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestForm {
    pub principal: String,
    pub rate: String,
    pub time: String,
    #[serde(default)]
    pub frequency: String,
}

impl InterestForm {
    pub fn new(
        principal: impl Into<String>,
        rate: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            principal: principal.into(),
            rate: rate.into(),
            time: time.into(),
            frequency: String::new(),
        }
    }

    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Principal => &self.principal,
            Field::Time => &self.time,
            Field::Frequency => &self.frequency,
            Field::Rate => &self.rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestInput {
    pub principal: f64,
    pub rate_percent: f64,
    pub time_years: f64,
    /// 每年複利次數；單利為 `None`
    pub frequency: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestResult {
    pub interest: f64,
    pub total: f64,
}

/// 計算完成的結果，可直接輸出
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    pub kind: InterestKind,
    #[serde(flatten)]
    pub input: InterestInput,
    #[serde(flatten)]
    pub result: InterestResult,
}
