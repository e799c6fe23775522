use super::*;

#[test]
fn new_tween_is_unresolved_and_empty() {
    let spec = TweenSpec::new();
    assert_eq!(spec.endpoints(), Endpoints::Unresolved);
    assert!(spec.table().is_empty());
    assert_eq!(spec.duration(), 1.0);
    assert_eq!(spec.sample_rate(), SampleRate::DEFAULT);
    assert_eq!(spec.generation(), 0);
}

#[test]
fn setters_rebuild_eagerly() {
    let mut spec = TweenSpec::new();
    spec.set_start(0.0).unwrap();
    assert!(spec.table().is_empty());
    spec.set_end(10.0).unwrap();
    assert!(spec.table().is_empty());
    spec.set_ease(Ease::Linear).unwrap();
    assert_eq!(spec.table().len(), 60);
    assert_eq!(spec.generation(), 3);

    spec.set_duration(0.5).unwrap();
    assert_eq!(spec.table().len(), 30);

    spec.set_end(20.0).unwrap();
    let last = spec.table().last().unwrap();
    assert!((last.value - 20.0 * 29.0 / 30.0).abs() < 1e-9);
    assert_eq!(spec.generation(), 5);
}

#[test]
fn set_ease_without_endpoints_is_a_configuration_error() {
    let mut spec = TweenSpec::new();
    spec.set_start(1.0).unwrap();
    let err = spec.set_ease(Ease::OutQuad).unwrap_err();
    assert!(matches!(err, TweenError::UnresolvableEndpoints { .. }));
    // The ease is kept, so finishing the endpoints produces a table.
    assert_eq!(spec.ease(), Some(Ease::OutQuad));
    spec.set_delta(2.0).unwrap();
    assert_eq!(spec.resolved().unwrap().end, 3.0);
    assert_eq!(spec.table().len(), 60);
}

#[test]
fn unknown_ease_name_leaves_tween_untouched() {
    let mut spec = TweenSpec::new();
    spec.set_start(0.0).unwrap();
    spec.set_end(1.0).unwrap();
    spec.set_ease_named("in_cubic").unwrap();
    let generation = spec.generation();

    let err = spec.set_ease_named("in_wobble").unwrap_err();
    assert!(matches!(err, TweenError::UnknownEasing(_)));
    assert_eq!(spec.ease(), Some(Ease::InCubic));
    assert_eq!(spec.generation(), generation);
}

#[test]
fn clearing_an_endpoint_empties_the_table() {
    let mut spec = TweenSpec::builder()
        .start(0.0)
        .end(1.0)
        .ease(Ease::Linear)
        .build()
        .unwrap();
    assert!(!spec.table().is_empty());
    spec.set_end(None).unwrap();
    assert!(spec.table().is_empty());
    assert!(matches!(
        spec.try_table(),
        Err(TweenError::UnresolvableEndpoints { .. })
    ));
}

#[test]
fn try_table_requires_an_ease() {
    let mut spec = TweenSpec::new();
    spec.set_end(5.0).unwrap();
    spec.set_delta(3.0).unwrap();
    assert!(matches!(spec.try_table(), Err(TweenError::MissingEasing)));
    spec.set_ease(Ease::OutExpo).unwrap();
    assert_eq!(spec.try_table().unwrap().first().unwrap().value, 2.0);
}

#[test]
fn invalid_scalars_are_rejected() {
    let mut spec = TweenSpec::new();
    assert!(matches!(
        spec.set_start(f64::NAN),
        Err(TweenError::Validation(_))
    ));
    assert!(spec.set_duration(-1.0).is_err());
    assert!(spec.set_duration(f64::INFINITY).is_err());
    assert_eq!(spec.duration(), 1.0);
    assert_eq!(spec.generation(), 0);
}

#[test]
fn zero_duration_is_an_empty_but_valid_table() {
    let mut spec = TweenSpec::builder()
        .start(0.0)
        .delta(1.0)
        .ease(Ease::InOutBounce)
        .build()
        .unwrap();
    spec.set_duration(0.0).unwrap();
    assert!(spec.try_table().unwrap().is_empty());
}

#[test]
fn builder_resolves_once() {
    let spec = TweenSpec::builder()
        .end(5.0)
        .delta(3.0)
        .ease(Ease::Linear)
        .duration(2.0)
        .build()
        .unwrap();
    assert_eq!(spec.generation(), 1);
    assert_eq!(spec.endpoints(), Endpoints::end_delta(5.0, 3.0));
    assert_eq!(spec.table().len(), 120);
    assert_eq!(spec.table().first().unwrap().value, 2.0);
}

#[test]
fn builder_reports_configuration_errors() {
    let err = TweenSpec::builder()
        .start(1.0)
        .ease(Ease::Linear)
        .build()
        .unwrap_err();
    assert!(matches!(err, TweenError::UnresolvableEndpoints { .. }));

    let err = TweenSpec::builder().start(1.0).end(2.0).build().unwrap_err();
    assert!(matches!(err, TweenError::MissingEasing));

    let err = TweenSpec::builder()
        .start(1.0)
        .end(2.0)
        .ease(Ease::Linear)
        .duration(f64::NAN)
        .build()
        .unwrap_err();
    assert!(matches!(err, TweenError::Validation(_)));
}

#[test]
fn oversized_duration_is_rejected_before_any_change() {
    let mut spec = TweenSpec::builder()
        .start(0.0)
        .end(1.0)
        .ease(Ease::InQuad)
        .duration(0.5)
        .build()
        .unwrap();
    let before = spec.table().clone();
    let generation = spec.generation();

    let err = spec.set_duration(1e18).unwrap_err();
    assert!(matches!(err, TweenError::Validation(_)));
    assert_eq!(spec.duration(), 0.5);
    assert_eq!(spec.generation(), generation);
    assert_eq!(spec.table(), &before);

    let err = TweenSpec::builder()
        .start(0.0)
        .end(1.0)
        .ease(Ease::InQuad)
        .duration(1e18)
        .build()
        .unwrap_err();
    assert!(matches!(err, TweenError::Validation(_)));
}

#[test]
fn all_three_inputs_keep_start_end_precedence() {
    let spec = TweenSpec::builder()
        .start(2.0)
        .end(5.0)
        .delta(100.0)
        .ease(Ease::Linear)
        .build()
        .unwrap();
    assert_eq!(
        spec.resolved(),
        Some(ResolvedEndpoints {
            start: 2.0,
            end: 5.0
        })
    );
}

#[test]
fn into_table_matches_direct_sampling() {
    let spec = TweenSpec::builder()
        .start(-1.0)
        .end(1.0)
        .ease(Ease::InOutCirc)
        .duration(0.75)
        .build()
        .unwrap();
    let direct = sample(
        ResolvedEndpoints {
            start: -1.0,
            end: 1.0,
        },
        Ease::InOutCirc,
        0.75,
        SampleRate::DEFAULT,
    );
    assert_eq!(spec.into_table(), direct);
}
