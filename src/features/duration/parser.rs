use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::{AmbiguousUnitPolicy, FormatOptions, ParseOptions, ParserConfig};
use crate::constants::parse as parse_constants;
use crate::errors::{DurationParseError, ErrorCode, FormatError};
use crate::features::suggest::SuggestionEngine;
use crate::features::units::{self, UnitTime};

use super::format::format_duration;
use super::input::DurationInput;

/// One number + unit component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub duration: f64,
    pub unit: UnitTime,
    pub milliseconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedParseResult {
    pub total_milliseconds: f64,
    /// Unit of the component with the largest millisecond share.
    pub dominant_unit: Option<UnitTime>,
    pub data: Vec<ParseResult>,
}

/// Human duration parser and formatter.
///
/// Each call is independent; the only state is the suggestion engine's
/// caches, which are internally synchronized. Construct once and share
/// behind an `Arc`.
pub struct DurationParser {
    config: ParserConfig,
    engine: SuggestionEngine,
}

impl Default for DurationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DurationParser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        let engine = SuggestionEngine::with_builtin_aliases(&config.suggestions);
        Self { config, engine }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    /// Parses a single `<number><unit>` (or a bare millisecond count).
    pub fn parse<'a>(
        &self,
        input: impl Into<DurationInput<'a>>,
        options: &ParseOptions,
    ) -> Result<f64, DurationParseError> {
        let input = input.into();
        let raw = input.raw();

        let text = match self.prepare(&input, options)? {
            Prepared::Millis(ms) => return Ok(ms),
            Prepared::Text(text) => text,
        };

        let (component, end) = scan_component(text, 0)
            .ok_or_else(|| invalid_format(&raw))?;
        if end != text.len() {
            return Err(invalid_format(&raw));
        }

        let parsed = self.resolve_component(&component, &raw, options)?;
        debug!(input = %raw, ms = parsed.milliseconds, unit = %parsed.unit, "parsed duration");
        Ok(parsed.milliseconds)
    }

    /// Parses one or more components (`"1h 30min"`, `"1d2h"`, `"2 hours, 5 mins"`).
    pub fn parse_detailed<'a>(
        &self,
        input: impl Into<DurationInput<'a>>,
        options: &ParseOptions,
    ) -> Result<DetailedParseResult, DurationParseError> {
        let input = input.into();
        let raw = input.raw();

        let text = match self.prepare(&input, options)? {
            Prepared::Millis(ms) => {
                return Ok(summarize(vec![ParseResult {
                    duration: ms,
                    unit: UnitTime::Millisecond,
                    milliseconds: ms,
                }]));
            }
            Prepared::Text(text) => text,
        };

        let mut data = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            let (component, end) = scan_component(text, pos)
                .ok_or_else(|| invalid_format(&raw))?;
            data.push(self.resolve_component(&component, &raw, options)?);
            pos = skip_separator(text, end);
            // The text is trimmed, so a separator reaching the end is a dangling comma.
            if pos == text.len() && pos != end {
                return Err(invalid_format(&raw));
            }
        }

        let result = summarize(data);
        if !result.total_milliseconds.is_finite() {
            return Err(invalid_number(&raw));
        }
        debug!(input = %raw, components = result.data.len(), total = result.total_milliseconds, "parsed compound duration");
        Ok(result)
    }

    pub fn format(&self, ms: f64, options: &FormatOptions) -> Result<String, FormatError> {
        format_duration(ms, options)
    }

    pub fn is_valid<'a>(&self, input: impl Into<DurationInput<'a>>, options: &ParseOptions) -> bool {
        self.parse(input, options).is_ok()
    }

    pub fn expires_at<'a>(
        &self,
        input: impl Into<DurationInput<'a>>,
        options: &ParseOptions,
    ) -> Result<DateTime<Utc>, DurationParseError> {
        self.expires_at_from(Utc::now(), input, options)
    }

    pub fn expires_at_from<'a>(
        &self,
        now: DateTime<Utc>,
        input: impl Into<DurationInput<'a>>,
        options: &ParseOptions,
    ) -> Result<DateTime<Utc>, DurationParseError> {
        let input = input.into();
        let ms = self.parse(input.clone(), options)?;

        TimeDelta::try_milliseconds(ms.round() as i64)
            .and_then(|delta| now.checked_add_signed(delta))
            .ok_or_else(|| {
                DurationParseError::new(
                    ErrorCode::InvalidNumber,
                    input.raw(),
                    format!("Duration \"{}\" is out of range for a timestamp", input.raw()),
                )
            })
    }

    /// Ranked alias corrections for an unrecognized unit token.
    pub fn suggestions(&self, input: &str, max_suggestions: usize) -> Vec<String> {
        self.engine.suggestions(input, max_suggestions)
    }

    pub fn supported_units(&self) -> Vec<String> {
        units::supported_units()
    }

    // Steps shared by every parse entry point: type, emptiness, length,
    // trimming, and the bare-number shortcut.
    fn prepare<'i>(
        &self,
        input: &'i DurationInput<'_>,
        options: &ParseOptions,
    ) -> Result<Prepared<'i>, DurationParseError> {
        let text = match input {
            DurationInput::Millis(ms) => return check_millis(*ms, &input.raw(), options).map(Prepared::Millis),
            DurationInput::Unsupported(kind) => {
                return Err(DurationParseError::new(
                    ErrorCode::InvalidType,
                    input.raw(),
                    format!("Expected a duration string or a number of milliseconds, got {kind}"),
                ));
            }
            DurationInput::Text(text) => &**text,
        };

        if text.is_empty() {
            return Err(empty_input(text));
        }
        if text.chars().count() > options.max_length {
            return Err(DurationParseError::new(
                ErrorCode::InputTooLong,
                text,
                format!(
                    "Duration string exceeds the maximum length of {} characters",
                    options.max_length
                ),
            ));
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(empty_input(text));
        }

        if scan_number(trimmed, 0) == Some(trimmed.len()) {
            let ms: f64 = trimmed.parse().map_err(|_| invalid_number(text))?;
            return check_millis(ms, text, options).map(Prepared::Millis);
        }

        Ok(Prepared::Text(trimmed))
    }

    fn resolve_component(
        &self,
        component: &Component<'_>,
        raw: &str,
        options: &ParseOptions,
    ) -> Result<ParseResult, DurationParseError> {
        let value: f64 = component.number.parse().map_err(|_| invalid_number(raw))?;
        if !value.is_finite() {
            return Err(invalid_number(raw));
        }
        if value < 0.0 && !options.allow_negative {
            return Err(negative_not_allowed(raw));
        }

        let unit = self.resolve_unit(component.unit, raw, options)?;
        let milliseconds = value * unit.multiplier();
        if !milliseconds.is_finite() {
            return Err(invalid_number(raw));
        }

        Ok(ParseResult {
            duration: value,
            unit,
            milliseconds,
        })
    }

    fn resolve_unit(
        &self,
        token: &str,
        raw: &str,
        options: &ParseOptions,
    ) -> Result<UnitTime, DurationParseError> {
        let token = token.to_lowercase();

        if token == "m" {
            return match options.ambiguous_unit {
                AmbiguousUnitPolicy::Minutes => Ok(UnitTime::Minute),
                AmbiguousUnitPolicy::Months => Ok(UnitTime::Month),
                AmbiguousUnitPolicy::Strict => Err(DurationParseError::new(
                    ErrorCode::AmbiguousUnit,
                    raw,
                    format!(
                        "Ambiguous unit \"m\" in \"{raw}\": use \"min\" for minutes or \"mo\" for months"
                    ),
                )
                .with_suggestions(vec!["min".to_string(), "mo".to_string()])),
            };
        }

        if let Some(unit) = units::resolve_alias(&token) {
            return Ok(unit);
        }

        let suggestions = self
            .engine
            .suggestions(&token, self.config.suggestions.max_suggestions);
        let mut message = format!("Unknown unit \"{token}\" in \"{raw}\"");
        if !suggestions.is_empty() {
            message.push_str(&format!(". Did you mean: {}?", suggestions.join(", ")));
        }
        Err(DurationParseError::new(ErrorCode::UnknownUnit, raw, message).with_suggestions(suggestions))
    }
}

enum Prepared<'i> {
    Millis(f64),
    Text(&'i str),
}

#[derive(Debug, PartialEq)]
struct Component<'s> {
    number: &'s str,
    unit: &'s str,
}

fn summarize(data: Vec<ParseResult>) -> DetailedParseResult {
    let total_milliseconds = data.iter().map(|r| r.milliseconds).sum();

    let mut dominant: Option<&ParseResult> = None;
    for entry in &data {
        // Strictly greater, so the first of equal contributions wins.
        if dominant.is_none_or(|best| entry.milliseconds.abs() > best.milliseconds.abs()) {
            dominant = Some(entry);
        }
    }
    let dominant_unit = dominant.map(|entry| entry.unit);

    DetailedParseResult {
        total_milliseconds,
        dominant_unit,
        data,
    }
}

/// `[+-]?\d+(\.\d+)?` starting at `start`; returns the end offset.
fn scan_number(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut pos = start;
    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        pos += 1;
    }

    let digits_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    if pos == digits_start {
        return None;
    }

    if bytes.get(pos) == Some(&b'.') {
        let fraction_start = pos + 1;
        let mut end = fraction_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > fraction_start {
            pos = end;
        }
    }
    Some(pos)
}

/// Number, optional whitespace, then one or more letters.
fn scan_component(s: &str, start: usize) -> Option<(Component<'_>, usize)> {
    let number_end = scan_number(s, start)?;

    let rest = &s[number_end..];
    let unit_start = number_end + (rest.len() - rest.trim_start().len());

    let unit_len: usize = s[unit_start..]
        .chars()
        .take_while(|c| c.is_alphabetic())
        .map(char::len_utf8)
        .sum();
    if unit_len == 0 {
        return None;
    }

    let unit_end = unit_start + unit_len;
    Some((
        Component {
            number: &s[start..number_end],
            unit: &s[unit_start..unit_end],
        },
        unit_end,
    ))
}

// Whitespace and at most one comma between components.
fn skip_separator(s: &str, start: usize) -> usize {
    let rest = s[start..].trim_start();
    let rest = rest.strip_prefix(',').map(str::trim_start).unwrap_or(rest);
    s.len() - rest.len()
}

fn check_millis(ms: f64, raw: &str, options: &ParseOptions) -> Result<f64, DurationParseError> {
    if !ms.is_finite() {
        return Err(invalid_number(raw));
    }
    if ms < 0.0 && !options.allow_negative {
        return Err(negative_not_allowed(raw));
    }
    Ok(ms)
}

fn empty_input(raw: &str) -> DurationParseError {
    DurationParseError::new(ErrorCode::EmptyInput, raw, "Duration string is empty")
}

fn invalid_format(raw: &str) -> DurationParseError {
    DurationParseError::new(
        ErrorCode::InvalidFormat,
        raw,
        format!(
            "Invalid duration format \"{raw}\". Expected a number followed by a unit, e.g. {}",
            parse_constants::EXAMPLE_INPUTS.join(", ")
        ),
    )
    .with_suggestions(parse_constants::EXAMPLE_INPUTS.iter().map(|s| s.to_string()).collect())
}

fn invalid_number(raw: &str) -> DurationParseError {
    DurationParseError::new(
        ErrorCode::InvalidNumber,
        raw,
        format!("Invalid number in duration \"{raw}\""),
    )
}

fn negative_not_allowed(raw: &str) -> DurationParseError {
    DurationParseError::new(
        ErrorCode::NegativeNotAllowed,
        raw,
        format!("Negative durations are not allowed: \"{raw}\""),
    )
}
