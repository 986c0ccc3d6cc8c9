use crate::config::ValidationPolicy;
use crate::core::formula::formula_for;
use crate::core::parse::{parse_amount, parse_frequency, try_parse_amount, try_parse_frequency};
use crate::core::{Calculation, Field, InterestForm, InterestFormula, InterestInput, InterestKind};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{is_blank, validate_required};

/// 將表單依序經過驗證、解析與對應公式
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestEngine {
    policy: ValidationPolicy,
}

impl InterestEngine {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn required_fields(&self, kind: InterestKind) -> &'static [Field] {
        formula_for(kind).required_fields()
    }

    /// 空白的必填欄位，依畫面順序排列
    pub fn missing_fields(&self, kind: InterestKind, form: &InterestForm) -> Vec<Field> {
        let required = self.required_fields(kind);
        let blank = validate_required(required.iter().map(|f| (f.name(), form.value(*f))));

        required
            .iter()
            .copied()
            .filter(|f| blank.contains(f.name()))
            .collect()
    }

    pub fn calculate(&self, kind: InterestKind, form: &InterestForm) -> Result<Calculation> {
        self.calculate_with(formula_for(kind), form)
    }

    pub fn calculate_with(
        &self,
        formula: &dyn InterestFormula,
        form: &InterestForm,
    ) -> Result<Calculation> {
        let kind = formula.kind();

        if self.policy == ValidationPolicy::RequireAll {
            let missing = self.missing_fields(kind, form);
            if !missing.is_empty() {
                tracing::debug!("{} calculation blocked by blank fields: {:?}", kind, missing);
                return Err(CalcError::missing_fields(
                    kind,
                    missing.iter().map(|f| f.name()),
                ));
            }
        }

        let input = self.parse_form(kind, form);
        tracing::debug!("Parsed {} input: {:?}", kind, input);

        let result = formula.compute(&input);
        tracing::debug!(
            "{} result: interest={}, total={}",
            kind,
            result.interest,
            result.total
        );

        Ok(Calculation {
            kind,
            input,
            result,
        })
    }

    fn parse_form(&self, kind: InterestKind, form: &InterestForm) -> InterestInput {
        for field in [Field::Principal, Field::Rate, Field::Time] {
            let text = form.value(field);
            if !is_blank(text) && try_parse_amount(text).is_none() {
                tracing::warn!("{} '{}' is not a number, using 0", field.name(), text);
            }
        }

        let frequency = match kind {
            InterestKind::Simple => None,
            InterestKind::Compound => {
                if !is_blank(&form.frequency) && try_parse_frequency(&form.frequency).is_none() {
                    tracing::warn!(
                        "frequency '{}' is not a 32-bit whole number, compounding annually",
                        form.frequency
                    );
                }
                Some(parse_frequency(&form.frequency))
            }
        };

        InterestInput {
            principal: parse_amount(&form.principal),
            rate_percent: parse_amount(&form.rate),
            time_years: parse_amount(&form.time),
            frequency,
        }
    }
}
