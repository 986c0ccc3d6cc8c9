use crate::core::{Field, InterestFormula, InterestInput, InterestKind, InterestResult};

/// interest = P × R × T / 100
pub fn compute_simple_interest(principal: f64, rate_percent: f64, time_years: f64) -> InterestResult {
    let interest = principal * rate_percent * time_years / 100.0;
    InterestResult {
        interest,
        total: principal + interest,
    }
}

/// total = P × (1 + R / (100 × n)) ^ (n × T)
///
/// 頻率小於等於 0 時改以每年複利一次 (n = 1) 計算
pub fn compute_compound_interest(
    principal: f64,
    rate_percent: f64,
    time_years: f64,
    frequency_per_year: i64,
) -> InterestResult {
    let n = effective_frequency(frequency_per_year) as f64;
    let total = principal * (1.0 + rate_percent / (100.0 * n)).powf(n * time_years);
    InterestResult {
        interest: total - principal,
        total,
    }
}

pub fn effective_frequency(frequency_per_year: i64) -> i64 {
    if frequency_per_year > 0 {
        frequency_per_year
    } else {
        1
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleInterest;

impl InterestFormula for SimpleInterest {
    fn kind(&self) -> InterestKind {
        InterestKind::Simple
    }

    fn required_fields(&self) -> &'static [Field] {
        &[Field::Principal, Field::Time, Field::Rate]
    }

    fn compute(&self, input: &InterestInput) -> InterestResult {
        compute_simple_interest(input.principal, input.rate_percent, input.time_years)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundInterest;

impl InterestFormula for CompoundInterest {
    fn kind(&self) -> InterestKind {
        InterestKind::Compound
    }

    fn required_fields(&self) -> &'static [Field] {
        &[Field::Principal, Field::Time, Field::Frequency, Field::Rate]
    }

    fn compute(&self, input: &InterestInput) -> InterestResult {
        compute_compound_interest(
            input.principal,
            input.rate_percent,
            input.time_years,
            input.frequency.unwrap_or(1),
        )
    }
}

pub fn formula_for(kind: InterestKind) -> &'static dyn InterestFormula {
    match kind {
        InterestKind::Simple => &SimpleInterest,
        InterestKind::Compound => &CompoundInterest,
    }
}
