pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{TomlConfig, ValidationPolicy};

pub use crate::core::{
    compute_compound_interest, compute_simple_interest, engine::InterestEngine, Calculation,
    Field, InterestForm, InterestInput, InterestKind, InterestResult,
};
pub use crate::utils::error::{CalcError, Result};
pub use crate::utils::validation::validate_required;
