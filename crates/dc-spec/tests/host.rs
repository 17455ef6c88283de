use dc_spec::{
    FieldGroup, QuestionFormHost, QuestionType, RegionMap, RegionSink, ResolveError,
    UnknownTypePolicy, resolve,
};

#[derive(Default)]
struct CountingSink {
    calls: usize,
    map: RegionMap,
}

impl RegionSink for CountingSink {
    fn set_region(&mut self, group: FieldGroup, visible: bool) {
        self.calls += 1;
        self.map.set_region(group, visible);
    }
}

#[test]
fn selecting_a_type_applies_every_region() {
    let mut host = QuestionFormHost::new(RegionMap::new(), UnknownTypePolicy::KeepPrevious);
    let flags = host.on_type_selected(8).expect("reference resolves");
    assert_eq!(flags, resolve(QuestionType::Reference));

    let regions = host.sink();
    assert_eq!(regions.len(), FieldGroup::ALL.len());
    assert_eq!(regions["dc_question_reference__row"], true);
    assert_eq!(regions["dc_question_filter__row"], true);
    assert_eq!(regions["dc_question_max__row"], false);
    assert_eq!(host.current(), Some((QuestionType::Reference, flags)));
}

#[test]
fn later_selection_replaces_earlier_one() {
    let mut host = QuestionFormHost::new(RegionMap::new(), UnknownTypePolicy::KeepPrevious);
    host.on_type_selected(4).unwrap();
    host.on_type_selected(9).unwrap();

    let regions = host.into_sink();
    assert_eq!(regions["dc_question_options__row"], false);
    assert_eq!(regions["dc_question_location_fields__row"], true);
    assert_eq!(regions["dc_question_default_answer__row"], false);
}

#[test]
fn unknown_code_keeps_previous_regions() {
    let mut host = QuestionFormHost::new(CountingSink::default(), UnknownTypePolicy::KeepPrevious);
    host.on_type_selected(2).unwrap();
    let before = host.sink().map.clone();
    let calls = host.sink().calls;

    let err = host.on_type_selected(10).unwrap_err();
    assert_eq!(err, ResolveError::UnknownQuestionType("10".into()));
    assert_eq!(host.sink().map, before);
    assert_eq!(host.sink().calls, calls);
    assert_eq!(host.current().map(|(kind, _)| kind), Some(QuestionType::Integer));
}

#[test]
fn unknown_code_can_hide_all_regions() {
    let mut host = QuestionFormHost::new(RegionMap::new(), UnknownTypePolicy::HideAll);
    host.on_type_selected(1).unwrap();
    assert!(host.on_type_selected(42).is_err());

    assert!(host.sink().values().all(|visible| !visible));
    assert_eq!(host.sink().len(), FieldGroup::ALL.len());
    assert!(host.current().is_none());
}

#[test]
fn policy_parses_from_text() {
    assert_eq!(
        "keep".parse::<UnknownTypePolicy>().unwrap(),
        UnknownTypePolicy::KeepPrevious
    );
    assert_eq!(
        "Hide-All".parse::<UnknownTypePolicy>().unwrap(),
        UnknownTypePolicy::HideAll
    );
    assert!("reset".parse::<UnknownTypePolicy>().is_err());
    assert_eq!(UnknownTypePolicy::default(), UnknownTypePolicy::KeepPrevious);
}
