use std::io::Write;

use anyhow::Result;
use durparse::{
    AmbiguousUnitPolicy, DurationParser, FormatOptions, ParseOptions, ParserConfig, UnitTime,
};
use serde_json::{json, Value};

fn minutes() -> ParseOptions {
    ParseOptions::default().with_ambiguous_unit(AmbiguousUnitPolicy::Minutes)
}

#[test]
fn test_documented_scenarios() -> Result<()> {
    let parser = DurationParser::new();
    let strict = ParseOptions::default();

    assert_eq!(parser.parse("1h", &strict)?, 3_600_000.0);
    assert_eq!(parser.parse("30m", &minutes())?, 1_800_000.0);
    assert_eq!(parser.parse("1.5d", &strict)?, 129_600_000.0);

    assert_eq!(parser.format(3_600_000.0, &FormatOptions::default())?, "1h");
    assert_eq!(parser.format(3_600_000.0, &FormatOptions::long())?, "1 hour");
    assert_eq!(parser.format(7_200_000.0, &FormatOptions::long())?, "2 hours");

    assert!(!parser.is_valid("invalid", &strict));
    Ok(())
}

#[test]
fn test_format_then_parse_recovers_every_unit() -> Result<()> {
    let parser = DurationParser::new();

    for unit in UnitTime::ALL {
        let formatted = parser.format(unit.multiplier(), &FormatOptions::default())?;
        // "1m" is the minutes symbol, so read it back with the minutes policy.
        let parsed = parser.parse(formatted.as_str(), &minutes())?;
        assert_eq!(parsed, unit.multiplier(), "round trip through {formatted}");
    }
    Ok(())
}

#[test]
fn test_long_format_round_trips_through_aliases() -> Result<()> {
    let parser = DurationParser::new();
    let strict = ParseOptions::default();

    for unit in UnitTime::ALL {
        let formatted = parser.format(3.0 * unit.multiplier(), &FormatOptions::long())?;
        assert_eq!(parser.parse(formatted.as_str(), &strict)?, 3.0 * unit.multiplier());
    }
    Ok(())
}

#[test]
fn test_compound_format_parses_back_in_detail() -> Result<()> {
    let parser = DurationParser::new();
    let ms = 2.0 * UnitTime::Day.multiplier() + 3.0 * UnitTime::Hour.multiplier() + 15_000.0;

    let options = FormatOptions {
        long: true,
        ..FormatOptions::compound()
    };
    let formatted = parser.format(ms, &options)?;
    assert_eq!(formatted, "2 days, 3 hours, 15 seconds");

    let detailed = parser.parse_detailed(formatted.as_str(), &ParseOptions::default())?;
    assert_eq!(detailed.total_milliseconds, ms);
    assert_eq!(detailed.dominant_unit, Some(UnitTime::Day));
    assert_eq!(detailed.data.len(), 3);
    Ok(())
}

#[test]
fn test_detailed_result_json_shape() -> Result<()> {
    let parser = DurationParser::new();
    let detailed = parser.parse_detailed("1h 30min", &ParseOptions::default())?;

    let value: Value = serde_json::to_value(&detailed)?;
    assert_eq!(value["totalMilliseconds"], json!(5_400_000.0));
    assert_eq!(value["dominantUnit"], json!("h"));
    assert_eq!(value["data"][1]["unit"], json!("m"));
    assert_eq!(value["data"][1]["duration"], json!(30.0));
    Ok(())
}

#[test]
fn test_dynamic_json_inputs() -> Result<()> {
    let parser = DurationParser::new();
    let strict = ParseOptions::default();

    let payload = json!({ "ttl": "2 hours", "timeout": 1500, "retry": null });
    assert_eq!(parser.parse(&payload["ttl"], &strict)?, 7_200_000.0);
    assert_eq!(parser.parse(&payload["timeout"], &strict)?, 1_500.0);
    assert!(!parser.is_valid(&payload["retry"], &strict));
    Ok(())
}

#[test]
fn test_suggestions_are_idempotent() {
    let parser = DurationParser::new();
    let first = parser.suggestions("mnths", 5);
    let second = parser.suggestions("mnths", 5);
    assert_eq!(first, second);
    assert_eq!(first[0], "months");
}

#[test]
fn test_supported_units_listing() {
    let parser = DurationParser::new();
    let units = parser.supported_units();
    assert!(units.windows(2).all(|w| w[0] <= w[1]));
    for alias in ["hours", "hrs", "mo", "ms", "weeks", "yrs"] {
        assert!(units.contains(&alias.to_string()), "missing {alias}");
    }
}

#[test]
fn test_config_file_drives_parser() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        "parse:\n  ambiguous_unit: months\n  allow_negative: true\nsuggestions:\n  max_suggestions: 2"
    )?;

    let parser = DurationParser::with_config(ParserConfig::load(file.path())?);
    let options = parser.config().parse.clone();

    assert_eq!(parser.parse("2m", &options)?, 2.0 * UnitTime::Month.multiplier());
    assert_eq!(parser.parse("-1s", &options)?, -1_000.0);

    let err = parser.parse("3 dys", &options).unwrap_err();
    assert_eq!(err.suggestions.len(), 2);
    assert_eq!(err.suggestions[0], "days");
    Ok(())
}

#[test]
fn test_expires_at_is_in_the_future() -> Result<()> {
    let parser = DurationParser::new();
    let before = chrono::Utc::now();
    let expires = parser.expires_at("10 mins", &ParseOptions::default())?;
    let delta = expires - before;
    assert!(delta >= chrono::TimeDelta::minutes(10));
    assert!(delta < chrono::TimeDelta::minutes(11));
    Ok(())
}
