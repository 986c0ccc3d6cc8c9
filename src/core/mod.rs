pub mod batch;
pub mod engine;
pub mod formula;
pub mod parse;
pub mod report;

pub use crate::domain::model::{
    Calculation, Field, InterestForm, InterestInput, InterestKind, InterestResult,
};
pub use crate::domain::ports::{InterestFormula, SettingsProvider};
pub use crate::utils::error::Result;
pub use formula::{compute_compound_interest, compute_simple_interest};
