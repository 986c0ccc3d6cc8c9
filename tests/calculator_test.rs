use anyhow::Result;
use interest_calc::{
    compute_compound_interest, compute_simple_interest, validate_required, CalcError,
    InterestEngine, InterestForm, InterestKind, ValidationPolicy,
};
use std::collections::{BTreeSet, HashMap};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_simple_interest_example() {
    let result = compute_simple_interest(1000.0, 10.0, 2.0);
    assert_eq!(result.interest, 200.0);
    assert_eq!(result.total, 1200.0);
}

#[test]
fn test_compound_interest_example() {
    let result = compute_compound_interest(1000.0, 5.0, 2.0, 1);
    assert!(close(result.total, 1102.5));
    assert!(close(result.interest, 102.5));
}

#[test]
fn test_zero_frequency_matches_annual() {
    assert_eq!(
        compute_compound_interest(1000.0, 5.0, 2.0, 0),
        compute_compound_interest(1000.0, 5.0, 2.0, 1)
    );
}

#[test]
fn test_totals_include_principal() {
    let principals = [0.0, 1.0, 999.99, 250_000.0];
    let rates = [0.0, 3.5, 12.0, 100.0];
    let times = [0.0, 0.5, 1.0, 10.0];

    for &p in &principals {
        for &r in &rates {
            for &t in &times {
                let simple = compute_simple_interest(p, r, t);
                assert_eq!(simple.total, p + simple.interest);

                let compound = compute_compound_interest(p, r, t, 4);
                assert!(close(compound.total, p + compound.interest));
            }
        }
    }
}

#[test]
fn test_zero_time_earns_nothing() {
    for rate in [0.0, 5.0, 99.0] {
        assert_eq!(compute_simple_interest(1000.0, rate, 0.0).interest, 0.0);
        assert_eq!(compute_compound_interest(1000.0, rate, 0.0, 12).interest, 0.0);
    }
}

#[test]
fn test_validate_required_example() {
    let fields = HashMap::from([("principal", ""), ("time", "1"), ("rate", "2")]);
    assert_eq!(
        validate_required(&fields),
        BTreeSet::from(["principal".to_string()])
    );
}

#[test]
fn test_engine_end_to_end() -> Result<()> {
    let engine = InterestEngine::new(ValidationPolicy::RequireAll);

    let simple = engine.calculate(InterestKind::Simple, &InterestForm::new("1000", "10", "2"))?;
    assert_eq!(simple.result.total, 1200.0);

    let compound = engine.calculate(
        InterestKind::Compound,
        &InterestForm::new("1000", "5", "2").with_frequency("1"),
    )?;
    assert!(close(compound.result.interest, 102.5));

    let blocked = engine.calculate(
        InterestKind::Compound,
        &InterestForm::new("1000", "5", "2"),
    );
    assert!(matches!(
        blocked,
        Err(CalcError::MissingFields { ref fields, .. }) if fields == &["frequency"]
    ));

    Ok(())
}

#[test]
fn test_policies_disagree_only_on_blank_fields() -> Result<()> {
    let strict = InterestEngine::new(ValidationPolicy::RequireAll);
    let lenient = InterestEngine::new(ValidationPolicy::Lenient);

    let filled = InterestForm::new("1500", "4", "3").with_frequency("2");
    assert_eq!(
        strict.calculate(InterestKind::Compound, &filled)?,
        lenient.calculate(InterestKind::Compound, &filled)?
    );

    let blank_time = InterestForm::new("1500", "4", "");
    assert!(strict.calculate(InterestKind::Simple, &blank_time).is_err());
    assert_eq!(
        lenient
            .calculate(InterestKind::Simple, &blank_time)?
            .result
            .interest,
        0.0
    );

    Ok(())
}
