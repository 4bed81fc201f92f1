// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Number formatting conventions derived from a POSIX locale name.

use serde::{Deserialize, Serialize};

/// Separators used when rendering numbers for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub group_separator: Option<char>,
}

impl NumberLocale {
    /// The `C`/`POSIX` locale: `.` decimal point, no digit grouping.
    pub const C: Self = Self {
        decimal_separator: '.',
        group_separator: None,
    };

    /// Resolve the locale from `LC_ALL`, `LC_NUMERIC`, then `LANG`.
    pub fn system() -> Self {
        ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|name| Self::from_name(&name))
            .unwrap_or(Self::C)
    }

    /// Map a locale name such as `de_DE.UTF-8` or `fr-CA` to its separators.
    ///
    /// Unrecognised languages fall back to English conventions; `C` and
    /// `POSIX` select [`NumberLocale::C`].
    pub fn from_name(name: &str) -> Self {
        let language = name
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let (decimal, group) = match language.as_str() {
            "" | "c" | "posix" => return Self::C,
            "de" | "nl" | "it" | "es" | "pt" | "da" | "id" | "tr" | "el" | "ro" | "hr"
            | "sl" | "sr" => (',', Some('.')),
            "fr" | "ru" | "pl" | "cs" | "sk" | "fi" | "sv" | "nb" | "no" | "uk" | "hu"
            | "bg" | "lt" | "lv" | "et" => (',', Some('\u{a0}')),
            _ => ('.', Some(',')),
        };
        Self {
            decimal_separator: decimal,
            group_separator: group,
        }
    }

    /// Format `value` with `precision` decimal places using these separators.
    pub fn format_decimal(&self, value: f64, precision: usize) -> String {
        let raw = format!("{:.*}", precision, value.abs());
        let (int_part, frac_part) = match raw.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (raw.as_str(), None),
        };

        let mut out = String::with_capacity(raw.len() + 4);
        // A value that rounds to zero keeps no sign.
        if value.is_sign_negative() && raw.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
            out.push('-');
        }
        self.push_grouped(&mut out, int_part);
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    /// Format an integer with digit grouping.
    pub fn format_integer(&self, value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + 4);
        if value < 0 {
            out.push('-');
        }
        self.push_grouped(&mut out, &digits);
        out
    }

    fn push_grouped(&self, out: &mut String, digits: &str) {
        let Some(sep) = self.group_separator else {
            out.push_str(digits);
            return;
        };
        let len = digits.len();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(sep);
            }
            out.push(ch);
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::C
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_locale_has_no_grouping() {
        assert_eq!(NumberLocale::C.format_integer(1_234_567), "1234567");
        assert_eq!(NumberLocale::C.format_decimal(1.5, 2), "1.50");
    }

    #[test]
    fn english_groups_with_commas() {
        let en = NumberLocale::from_name("en_US.UTF-8");
        assert_eq!(en.format_integer(1_000), "1,000");
        assert_eq!(en.format_integer(-1_234_567), "-1,234,567");
        assert_eq!(en.format_decimal(1023.456, 1), "1,023.5");
    }

    #[test]
    fn german_swaps_separators() {
        let de = NumberLocale::from_name("de_DE.UTF-8");
        assert_eq!(de.decimal_separator, ',');
        assert_eq!(de.format_decimal(1234.5, 2), "1.234,50");
    }

    #[test]
    fn posix_names_map_to_c() {
        assert_eq!(NumberLocale::from_name("C.UTF-8"), NumberLocale::C);
        assert_eq!(NumberLocale::from_name("POSIX"), NumberLocale::C);
        assert_eq!(NumberLocale::from_name(""), NumberLocale::C);
    }

    #[test]
    fn negative_zero_drops_sign() {
        assert_eq!(NumberLocale::C.format_decimal(-0.001, 2), "0.00");
        assert_eq!(NumberLocale::C.format_decimal(-1.26, 1), "-1.3");
    }

    #[test]
    fn zero_precision_has_no_separator() {
        assert_eq!(NumberLocale::from_name("fr_FR").format_decimal(12.7, 0), "13");
    }
}
