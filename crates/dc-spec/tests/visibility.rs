use dc_spec::{
    FieldGroup, QuestionType, ResolveError, VisibilityFlags, resolve, resolve_code, resolve_name,
};

const NON_DEFAULT_GROUPS: [FieldGroup; 8] = [
    FieldGroup::Max,
    FieldGroup::Min,
    FieldGroup::Reference,
    FieldGroup::Represent,
    FieldGroup::Filter,
    FieldGroup::LocationFields,
    FieldGroup::Options,
    FieldGroup::Multiple,
];

fn assert_only_visible(flags: &VisibilityFlags, expected: &[FieldGroup]) {
    for group in NON_DEFAULT_GROUPS {
        assert_eq!(
            flags.get(group),
            expected.contains(&group),
            "unexpected visibility for {}",
            group.key()
        );
    }
}

#[test]
fn numeric_types_show_bounds() {
    for kind in [QuestionType::Integer, QuestionType::Float] {
        let flags = resolve(kind);
        assert_only_visible(&flags, &[FieldGroup::Max, FieldGroup::Min]);
        assert!(flags.default_answer);
    }
}

#[test]
fn temporal_types_show_bounds() {
    for kind in [QuestionType::Date, QuestionType::Time, QuestionType::DateTime] {
        let flags = resolve(kind);
        assert_only_visible(&flags, &[FieldGroup::Max, FieldGroup::Min]);
        assert!(flags.default_answer);
    }
}

#[test]
fn string_hides_every_setting_but_default_answer() {
    let flags = resolve(QuestionType::String);
    assert_only_visible(&flags, &[]);
    assert!(flags.default_answer);
}

#[test]
fn object_shows_options_and_multiple() {
    let flags = resolve(QuestionType::Object);
    assert_only_visible(&flags, &[FieldGroup::Options, FieldGroup::Multiple]);
}

#[test]
fn reference_shows_target_settings() {
    let flags = resolve(QuestionType::Reference);
    assert_only_visible(
        &flags,
        &[FieldGroup::Reference, FieldGroup::Represent, FieldGroup::Filter],
    );
}

#[test]
fn location_is_the_only_type_hiding_default_answer() {
    let flags = resolve(QuestionType::Location);
    assert_only_visible(&flags, &[FieldGroup::LocationFields]);
    assert!(!flags.default_answer);

    let hiding = QuestionType::ALL
        .into_iter()
        .filter(|kind| !resolve(*kind).default_answer)
        .collect::<Vec<_>>();
    assert_eq!(hiding, vec![QuestionType::Location]);
}

#[test]
fn resolution_is_idempotent() {
    for kind in QuestionType::ALL {
        assert_eq!(resolve(kind), resolve(kind));
        assert_eq!(
            resolve_code(i64::from(kind.code())).unwrap(),
            resolve_code(i64::from(kind.code())).unwrap()
        );
    }
}

#[test]
fn codes_resolve_through_the_type_table() {
    assert_eq!(resolve_code(2).unwrap(), resolve(QuestionType::Integer));
    assert_eq!(resolve_code(9).unwrap(), resolve(QuestionType::Location));
    assert_eq!(resolve_name("Reference").unwrap(), resolve(QuestionType::Reference));
    assert_eq!(resolve_name("4").unwrap(), resolve(QuestionType::Object));
}

#[test]
fn codes_outside_the_table_are_rejected() {
    assert_eq!(
        resolve_code(10),
        Err(ResolveError::UnknownQuestionType("10".into()))
    );
    assert!(resolve_code(0).is_err());
    assert!(resolve_code(-3).is_err());
    assert!(matches!(
        resolve_name("Boolean"),
        Err(ResolveError::UnknownQuestionType(name)) if name == "Boolean"
    ));
}
