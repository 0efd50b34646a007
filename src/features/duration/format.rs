//! Millisecond counts back to human strings.

use crate::config::FormatOptions;
use crate::errors::FormatError;
use crate::features::units::UnitTime;

use super::plural::{simple_is_plural, PluralCategory, PluralRules};

// f64 has ~15 significant decimal digits; more precision only adds noise.
const MAX_PRECISION: u32 = 15;

/// Formats `ms` as a single unit (`"3h"`, `"1.5 hours"`) or, with
/// `compound`, as a greedy breakdown (`"1d, 2h"`).
pub fn format_duration(ms: f64, options: &FormatOptions) -> Result<String, FormatError> {
    if !ms.is_finite() {
        return Err(FormatError::NonFinite(ms));
    }

    let units = allowed_units(options);
    let style = Style::new(options);

    let rendered = if options.compound {
        format_compound(ms.abs(), &units, options, &style)
    } else {
        format_single(ms.abs(), &units, options, &style)
    };

    if ms < 0.0 && !is_zero_rendering(&rendered) {
        Ok(format!("-{rendered}"))
    } else {
        Ok(rendered)
    }
}

struct Style {
    long: bool,
    rules: Option<PluralRules>,
}

impl Style {
    fn new(options: &FormatOptions) -> Self {
        Self {
            long: options.long,
            rules: options.use_intl.then(|| PluralRules::for_locale(&options.locale)),
        }
    }

    fn render(&self, value: f64, unit: UnitTime) -> String {
        if !self.long {
            return format!("{value}{}", unit.symbol());
        }

        let plural = match &self.rules {
            Some(rules) => rules.category(value) != PluralCategory::One,
            None => simple_is_plural(value),
        };
        let name = if plural { unit.plural() } else { unit.singular() };
        format!("{value} {name}")
    }
}

fn format_single(abs: f64, units: &[UnitTime], options: &FormatOptions, style: &Style) -> String {
    let unit = units
        .iter()
        .copied()
        .find(|unit| unit.multiplier() <= abs)
        .unwrap_or_else(|| fallback_unit(units));

    let value = round_to(abs / unit.multiplier(), options.precision);
    style.render(value, unit)
}

fn format_compound(abs: f64, units: &[UnitTime], options: &FormatOptions, style: &Style) -> String {
    // Snap the total to the smallest unit's precision grid first, so rounding
    // the last component can never reach a whole unit of the one above it.
    let smallest = fallback_unit(units).multiplier();
    let mut remaining = round_to(abs / smallest, options.precision) * smallest;
    let mut parts = Vec::new();

    for (idx, unit) in units.iter().enumerate() {
        let multiplier = unit.multiplier();
        let count = if idx + 1 == units.len() {
            // The smallest unit absorbs whatever is left.
            round_to(remaining / multiplier, options.precision)
        } else {
            let whole = (remaining / multiplier).floor();
            remaining -= whole * multiplier;
            whole
        };

        if count > 0.0 {
            parts.push(style.render(count, *unit));
        }
    }

    if parts.is_empty() {
        return style.render(0.0, fallback_unit(units));
    }
    parts.join(&options.separator)
}

/// Preferred units (or all units) ordered largest first, without duplicates.
fn allowed_units(options: &FormatOptions) -> Vec<UnitTime> {
    match &options.preferred_units {
        Some(preferred) if !preferred.is_empty() => UnitTime::ALL
            .into_iter()
            .filter(|unit| preferred.contains(unit))
            .collect(),
        _ => UnitTime::ALL.to_vec(),
    }
}

// Milliseconds when allowed, otherwise the smallest permitted unit.
fn fallback_unit(units: &[UnitTime]) -> UnitTime {
    if units.contains(&UnitTime::Millisecond) {
        UnitTime::Millisecond
    } else {
        units.last().copied().unwrap_or(UnitTime::Millisecond)
    }
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        // Values this large carry no fractional digits anyway.
        return value.round();
    }
    scaled.round() / factor
}

fn is_zero_rendering(rendered: &str) -> bool {
    rendered
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|chunk| !chunk.is_empty())
        .all(|chunk| chunk.parse::<f64>().map(|v| v == 0.0).unwrap_or(true))
}
