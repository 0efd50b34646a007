use durparse::{
    AmbiguousUnitPolicy, DurationInput, DurationParser, ErrorCode, FormatError, FormatOptions,
    ParseOptions,
};

fn strict() -> ParseOptions {
    ParseOptions::default()
}

#[test]
fn test_empty_input() {
    let parser = DurationParser::new();
    let err = parser.parse("", &strict()).unwrap_err();
    assert_eq!(err.code, ErrorCode::EmptyInput);
    assert_eq!(err.input, "");
    assert!(err.suggestions.is_empty());
}

#[test]
fn test_negative_numbers_rejected_by_default() {
    let parser = DurationParser::new();

    let err = parser.parse(-5_i64, &strict()).unwrap_err();
    assert_eq!(err.code, ErrorCode::NegativeNotAllowed);

    let err = parser.parse("-5", &strict()).unwrap_err();
    assert_eq!(err.code, ErrorCode::NegativeNotAllowed);

    let err = parser.parse("-2.5 hours", &strict()).unwrap_err();
    assert_eq!(err.code, ErrorCode::NegativeNotAllowed);

    let allowed = strict().allow_negative(true);
    assert_eq!(parser.parse("-2.5 hours", &allowed).unwrap(), -9_000_000.0);
}

#[test]
fn test_ambiguous_unit_policies() {
    let parser = DurationParser::new();

    let err = parser.parse("5m", &strict()).unwrap_err();
    assert_eq!(err.code, ErrorCode::AmbiguousUnit);
    assert_eq!(err.suggestions, vec!["min", "mo"]);

    let minutes = strict().with_ambiguous_unit(AmbiguousUnitPolicy::Minutes);
    assert_eq!(parser.parse("5m", &minutes).unwrap(), 300_000.0);

    let months = strict().with_ambiguous_unit(AmbiguousUnitPolicy::Months);
    assert_eq!(parser.parse("5m", &months).unwrap(), 5.0 * 2.6297856e9);
}

#[test]
fn test_unknown_unit_suggests_hours() {
    let parser = DurationParser::new();
    let err = parser.parse("5 hors", &strict()).unwrap_err();

    assert_eq!(err.code, ErrorCode::UnknownUnit);
    let top: Vec<&str> = err.suggestions.iter().take(2).map(String::as_str).collect();
    assert!(top.contains(&"hours"), "got {:?}", err.suggestions);
    assert!(top.contains(&"hrs"), "got {:?}", err.suggestions);
}

#[test]
fn test_unknown_unit_suggestions_respect_prefix() {
    let parser = DurationParser::new();
    let err = parser.parse("10 milisec", &strict()).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownUnit);
    assert!(err.suggestions.iter().any(|s| s.starts_with("milli")), "got {:?}", err.suggestions);
}

#[test]
fn test_invalid_format_offers_examples() {
    let parser = DurationParser::new();
    for input in ["hours", "1h30", "h1", "1 h 2", "1.h", "++1h", "1h 30min"] {
        let err = parser.parse(input, &strict()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat, "input {input:?}");
        assert_eq!(err.suggestions, vec!["1h", "30 mins", "1.5d"]);
    }
}

#[test]
fn test_input_too_long() {
    let parser = DurationParser::new();
    let padded = format!("{:>120}", "1h");
    let err = parser.parse(padded.as_str(), &strict()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InputTooLong);

    let relaxed = strict().with_max_length(200);
    assert_eq!(parser.parse(padded.as_str(), &relaxed).unwrap(), 3_600_000.0);
}

#[test]
fn test_input_at_max_length_is_accepted() {
    let parser = DurationParser::new();
    let exact = format!("{}1h", "0".repeat(98));
    assert_eq!(exact.chars().count(), 100);
    assert_eq!(parser.parse(exact.as_str(), &strict()).unwrap(), 3_600_000.0);

    let over = format!("0{exact}");
    let err = parser.parse(over.as_str(), &strict()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InputTooLong);
}

#[test]
fn test_invalid_type_and_number() {
    let parser = DurationParser::new();

    let err = parser.parse(DurationInput::Unsupported("object"), &strict()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidType);
    assert!(err.message.contains("object"));

    let err = parser.parse(f64::INFINITY, &strict()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidNumber);
}

#[test]
fn test_is_valid_never_panics() {
    let parser = DurationParser::new();
    for input in ["", "   ", "m", "5m", "1e5", "💥", "1 ⏰", "NaN", "inf ms"] {
        assert!(!parser.is_valid(input, &strict()), "input {input:?}");
    }
}

#[test]
fn test_format_rejects_non_finite() {
    let parser = DurationParser::new();
    assert!(matches!(
        parser.format(f64::NAN, &FormatOptions::default()),
        Err(FormatError::NonFinite(_))
    ));
    assert!(parser.format(f64::NEG_INFINITY, &FormatOptions::long()).is_err());
}

#[test]
fn test_errors_are_deterministic() {
    let parser = DurationParser::new();
    let first = parser.parse("7 wekz", &strict()).unwrap_err();
    let second = parser.parse("7 wekz", &strict()).unwrap_err();
    assert_eq!(first, second);
}
