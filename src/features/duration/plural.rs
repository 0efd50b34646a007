//! Locale-keyed plural rules for long-form unit names.
//!
//! A small built-in subset of the CLDR cardinal rules. Only the category is
//! locale dependent; unit names themselves are English.

use tracing::warn;

use crate::constants::format as format_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    One,
    Few,
    Many,
    Other,
}

type RuleFn = fn(u64, bool) -> PluralCategory;

/// Plural rule set resolved for one locale.
#[derive(Debug, Clone, Copy)]
pub struct PluralRules {
    language: &'static str,
    rule: RuleFn,
}

const RULES: &[(&str, RuleFn)] = &[
    ("en", one_other),
    ("de", one_other),
    ("nl", one_other),
    ("sv", one_other),
    ("it", one_other),
    ("es", one_other),
    ("fr", zero_one_other),
    ("pt", zero_one_other),
    ("ru", east_slavic),
    ("uk", east_slavic),
    ("pl", polish),
    ("cs", czech),
    ("ja", other_only),
    ("zh", other_only),
    ("ko", other_only),
];

impl PluralRules {
    /// Rules for `locale` (`"fr"`, `"pt-BR"`, `"en_GB"`), falling back to English.
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match Self::lookup(&language) {
            Some(rules) => rules,
            None => {
                warn!(locale, fallback = format_constants::DEFAULT_LOCALE, "no plural rules for locale");
                Self::english()
            }
        }
    }

    pub fn english() -> Self {
        Self {
            language: "en",
            rule: one_other,
        }
    }

    pub fn is_supported(locale: &str) -> bool {
        let language = locale.split(['-', '_']).next().unwrap_or_default();
        Self::lookup(&language.to_ascii_lowercase()).is_some()
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn category(&self, value: f64) -> PluralCategory {
        let n = value.abs();
        let integer = n.trunc() as u64;
        let has_fraction = n.fract() != 0.0;
        (self.rule)(integer, has_fraction)
    }

    fn lookup(language: &str) -> Option<Self> {
        RULES
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(code, rule)| Self {
                language: *code,
                rule: *rule,
            })
    }
}

/// English default used when locale rules are not requested.
pub fn simple_is_plural(value: f64) -> bool {
    value.abs() != 1.0
}

fn one_other(i: u64, has_fraction: bool) -> PluralCategory {
    if i == 1 && !has_fraction {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn zero_one_other(i: u64, _has_fraction: bool) -> PluralCategory {
    if i <= 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn east_slavic(i: u64, has_fraction: bool) -> PluralCategory {
    if has_fraction {
        return PluralCategory::Other;
    }
    match (i % 10, i % 100) {
        (1, m) if m != 11 => PluralCategory::One,
        (2..=4, m) if !(12..=14).contains(&m) => PluralCategory::Few,
        _ => PluralCategory::Many,
    }
}

fn polish(i: u64, has_fraction: bool) -> PluralCategory {
    if has_fraction {
        return PluralCategory::Other;
    }
    if i == 1 {
        return PluralCategory::One;
    }
    match (i % 10, i % 100) {
        (2..=4, m) if !(12..=14).contains(&m) => PluralCategory::Few,
        _ => PluralCategory::Many,
    }
}

fn czech(i: u64, has_fraction: bool) -> PluralCategory {
    match (i, has_fraction) {
        (_, true) => PluralCategory::Many,
        (1, false) => PluralCategory::One,
        (2..=4, false) => PluralCategory::Few,
        _ => PluralCategory::Other,
    }
}

fn other_only(_i: u64, _has_fraction: bool) -> PluralCategory {
    PluralCategory::Other
}
