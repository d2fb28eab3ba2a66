//! Tests for the contract checker and the predicate catalog

use std::sync::Arc;

use super::*;

fn recording() -> (Contracts, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let contracts = Contracts::with_sink(ContractMode::Debug, sink.clone());
    (contracts, sink)
}

#[test]
fn test_checker_passes_when_all_arguments_satisfy() {
    let (contracts, sink) = recording();
    let is_positive = contracts.make_checker("is_positive", |v| {
        matches!(v, Value::Number(n) if *n > 0.0)
    });

    let verdict = is_positive.check(&[1.0_f64.into(), 2.5_f64.into(), 3.0_f64.into()]);

    assert_eq!(verdict, Verdict::Pass);
    assert!(sink.is_empty(), "A passing check should not log anything");
}

#[test]
fn test_checker_short_circuits_on_first_failure() {
    let (contracts, sink) = recording();
    let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = calls.clone();
    let is_positive = contracts.make_checker("is_positive", move |v| {
        counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        matches!(v, Value::Number(n) if *n > 0.0)
    });

    let verdict = is_positive.check(&[1.0_f64.into(), (-1.0_f64).into(), 3.0_f64.into()]);

    assert_eq!(verdict, Verdict::Fail(1));
    assert_eq!(
        calls.load(std::sync::atomic::Ordering::SeqCst),
        2,
        "Arguments after the failing one must not be evaluated"
    );
    assert!(sink.is_empty(), "A plain failure is returned, not logged");
}

#[test]
fn test_checker_with_no_arguments_is_inconclusive() {
    let (contracts, sink) = recording();
    let catalog = Catalog::new(&contracts);

    assert_eq!(catalog.is_number.check(&[]), Verdict::Inconclusive);
    assert_eq!(
        sink.entries(),
        vec![Diagnostic::NoArguments { checker: "is_number" }]
    );
}

#[test]
fn test_non_boolean_predicate_result_is_usage_error() {
    let (contracts, sink) = recording();
    let broken = contracts.make_checker("broken", |_| 42.0_f64);
    let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = calls.clone();
    let flaky = contracts.make_checker("flaky", move |v| {
        counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        match v {
            Value::Number(_) => Value::Boolean(true),
            _ => Value::Null,
        }
    });

    assert_eq!(broken.check_one(1.0_f64), Verdict::Inconclusive);
    assert_eq!(
        flaky.check(&[1.0_f64.into(), "two".into(), 3.0_f64.into()]),
        Verdict::Inconclusive
    );
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 2);

    let entries = sink.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(Diagnostic::is_usage_error));
    assert!(matches!(
        entries[1],
        Diagnostic::NonBooleanPredicate { checker: "flaky", index: 1, kind: ValueKind::Null, .. }
    ));
    assert!(entries[0].to_string().contains("it is number, with value: 42"));
}

#[test]
fn test_inconclusive_is_not_false() {
    let (contracts, sink) = recording();

    let result = contracts.assert_all(&[Verdict::Inconclusive.into()]);

    let err = result.expect_err("An inconclusive condition must be reported");
    assert_eq!(
        err.diagnostics(),
        &[Diagnostic::ConditionNotBoolean { index: 0, kind: ValueKind::Null }]
    );
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_assert_all_reports_every_violation() {
    let (contracts, sink) = recording();

    let result = contracts.assert_all(&[
        true.into(),
        false.into(),
        "not a bool".into(),
        false.into(),
    ]);

    let expected = vec![
        Diagnostic::ConditionFailed { index: 1, argument: None },
        Diagnostic::ConditionNotBoolean { index: 2, kind: ValueKind::String },
        Diagnostic::ConditionFailed { index: 3, argument: None },
    ];
    assert_eq!(result, Err(ContractError::Violated(expected.clone())));
    assert_eq!(sink.entries(), expected);
}

#[test]
fn test_assert_all_without_conditions() {
    let (contracts, sink) = recording();

    assert_eq!(contracts.assert_all(&[]), Err(ContractError::NoConditions));
    assert_eq!(sink.entries(), vec![Diagnostic::NoConditions]);
}

#[test]
fn test_assert_all_accepts_true_conditions() {
    let (contracts, sink) = recording();
    let catalog = Catalog::new(&contracts);
    let v = [1.0_f32, 2.0, 1.0];

    let result = contracts.assert_all(&[
        catalog.is_vec3.check_one(&v).into(),
        catalog.is_string.check_one("shader source").into(),
    ]);

    assert!(result.is_ok());
    assert!(sink.is_empty());
}

#[test]
fn test_disabled_mode_is_inert() {
    let sink = Arc::new(RecordingSink::new());
    let contracts = Contracts::with_sink(ContractMode::Disabled, sink.clone());
    let catalog = Catalog::new(&contracts);

    assert!(catalog.is_mat3.is_inert());
    assert_eq!(catalog.is_mat3.check(&[]), Verdict::Skipped);
    assert_eq!(catalog.is_mat3.check_one(&[0.0_f32; 4]), Verdict::Skipped);
    assert_eq!(contracts.assert_all(&[]), Ok(()));
    assert_eq!(contracts.assert_all(&[false.into()]), Ok(()));
    assert!(sink.is_empty(), "Disabled contracts must never log");
}

#[test]
fn test_check_macro_collects_violations() {
    let (contracts, sink) = recording();
    let catalog = Catalog::new(&contracts);
    let short = [0.0_f32; 4];
    let full = [0.0_f32; 9];

    let result = crate::check!(
        contracts,
        catalog.is_mat3.check(&[(&full).into(), (&short).into()]),
        catalog.is_number.check_one(1.0_f32),
    );

    if cfg!(feature = "contracts") {
        assert_eq!(
            result,
            Err(ContractError::Violated(vec![Diagnostic::ConditionFailed {
                index: 0,
                argument: Some(1),
            }]))
        );
        assert_eq!(sink.len(), 1);
        assert_eq!(
            sink.entries()[0].to_string(),
            "check 0 is false (argument 1 failed)"
        );
    } else {
        assert_eq!(result, Ok(()));
    }
}

#[test]
fn test_primitive_predicates() {
    let (contracts, _sink) = recording();
    let catalog = Catalog::new(&contracts);
    let items = [Value::Number(1.0)];

    assert!(catalog.is_boolean.check_one(false).is_pass());
    assert!(catalog.is_null.check_one(Value::Null).is_pass());
    assert!(catalog.is_undefined.check_one(()).is_pass());
    assert!(catalog.is_number.check_one(f64::NAN).is_pass());
    assert!(catalog.is_finite.check_one(f64::NAN).is_fail());
    assert!(catalog.is_finite.check_one(f64::INFINITY).is_fail());
    assert!(catalog.is_string.check_one("x").is_pass());
    assert!(catalog.is_symbol.check_one(Value::Symbol("id")).is_pass());
    assert!(catalog.is_string.check_one(Value::Symbol("id")).is_fail());
    assert!(catalog.is_function.check_one(Value::Function).is_pass());
    assert!(catalog.is_array.check_one(&items[..]).is_pass());
    assert!(catalog.is_array.check_one(&[1.0_f32, 2.0]).is_fail());

    // Null and typed arrays are objects too
    assert!(catalog
        .is_object
        .check(&[Value::Object, Value::Null, Value::Float32Array(&[1.0])])
        .is_pass());
    assert!(catalog.is_object.check_one(1.0_f64).is_fail());
    assert!(catalog.is_number.check_one(Option::<f64>::None).is_fail());
}

#[test]
fn test_handle_predicates_match_exactly_one_kind() {
    let (contracts, _sink) = recording();
    let catalog = Catalog::new(&contracts);
    let program = HostHandle::new(HandleKind::Program, 7);
    let canvas = HostHandle::new(HandleKind::Canvas, 1);

    assert!(catalog.is_program.check_one(program).is_pass());
    assert!(catalog.is_shader.check_one(program).is_fail());
    assert!(catalog.is_canvas.check_one(canvas).is_pass());
    assert!(catalog.is_element.check_one(canvas).is_fail());
    assert!(catalog
        .is_shader
        .check(&[
            HostHandle::new(HandleKind::Shader, 1).into(),
            HostHandle::new(HandleKind::Shader, 2).into(),
        ])
        .is_pass());
    assert!(catalog.is_buffer.check_one(Value::Object).is_fail());
    assert!(catalog
        .is_uniform_location
        .check_one(HostHandle::new(HandleKind::UniformLocation, 3))
        .is_pass());
    assert!(catalog
        .is_context
        .check_one(HostHandle::new(HandleKind::Context, 0))
        .is_pass());
}

#[test]
fn test_shape_predicates_require_exact_length() {
    let (contracts, _sink) = recording();
    let catalog = Catalog::new(&contracts);
    let sizes: [(&Checker, usize); 7] = [
        (&catalog.is_vec2, 2),
        (&catalog.is_vec3, 3),
        (&catalog.is_vec4, 4),
        (&catalog.is_mat2, 4),
        (&catalog.is_mat3, 9),
        (&catalog.is_mat4, 16),
        (&catalog.is_quat, 4),
    ];
    let data = [0.0_f32; 17];

    for (checker, len) in sizes {
        assert!(checker.check_one(&data[..len]).is_pass(), "{} should accept {}", checker.name(), len);
        assert!(checker.check_one(&data[..len - 1]).is_fail(), "{} should reject {}", checker.name(), len - 1);
        assert!(checker.check_one(&data[..len + 1]).is_fail(), "{} should reject {}", checker.name(), len + 1);
    }

    // A plain array of numbers is not a float32 buffer
    let numbers = [Value::Number(0.0); 3];
    assert!(catalog.is_vec3.check_one(&numbers[..]).is_fail());
}

#[test]
fn test_catalog_lookup_by_name() {
    let contracts = Contracts::new(ContractMode::Debug);
    let catalog = Catalog::new(&contracts);

    assert_eq!(catalog.iter().count(), 24);
    assert_eq!(catalog.get("is_mat3").map(Checker::name), Some("is_mat3"));
    assert!(catalog.get("is_mat5").is_none());
}

#[test]
fn test_contract_error_display() {
    let err = ContractError::Violated(vec![
        Diagnostic::ConditionFailed { index: 0, argument: None },
        Diagnostic::ConditionNotBoolean { index: 2, kind: ValueKind::Undefined },
        Diagnostic::ConditionFailed { index: 3, argument: Some(2) },
    ]);
    let msg = err.to_string();

    assert!(msg.contains("3 contract condition(s) violated"));
    assert!(msg.contains("check 3 is false (argument 2 failed)"));
    assert!(msg.contains("check 0 is false"));
    assert!(msg.contains("check 2 is not boolean, it is undefined"));
}

#[test]
fn test_failed_verdict_carries_argument_position() {
    assert_eq!(
        Condition::from(Verdict::Fail(2)),
        Condition { value: Value::Boolean(false), argument: Some(2) }
    );
    assert_eq!(Condition::from(Verdict::Pass).argument, None);
    assert_eq!(Condition::from(Verdict::Skipped).value, Value::Undefined);
}

#[test]
fn test_recording_sink_survives_poisoned_lock() {
    let sink = Arc::new(RecordingSink::new());
    sink.report(&Diagnostic::NoConditions);

    let poisoner = sink.clone();
    let _ = std::thread::spawn(move || {
        let _guard = poisoner.entries.lock().unwrap();
        panic!("poison the recording sink");
    })
    .join();

    sink.report(&Diagnostic::ConditionFailed { index: 0, argument: None });
    assert_eq!(
        sink.entries(),
        vec![
            Diagnostic::NoConditions,
            Diagnostic::ConditionFailed { index: 0, argument: None },
        ]
    );
}
