// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable formatting of durations, byte counts, and volume levels.

use crate::locale::NumberLocale;
use crate::types::DataSizeFormat;

const MS_PER_SECOND: f64 = 1000.0;
const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;

/// Decay constant for [`linear_to_log`]: `ln(100)`, so an input of 1.0 maps
/// to 0.99.
pub const VOLUME_LOG_CONSTANT: f64 = 4.605_170_185_99;

/// Format a duration in milliseconds as `M:SS`, or `H:MM:SS` above one hour.
///
/// Components are truncated, never rounded. A truncated seconds value of 60
/// rolls over into minutes and a minutes value of 60 rolls over into hours,
/// so no component ever displays as 60. Negative and non-finite inputs
/// format as `0:00`.
pub fn format_duration(duration_ms: f64) -> String {
    let duration = if duration_ms.is_finite() {
        duration_ms.max(0.0)
    } else {
        0.0
    };

    let mut hours: i64 = if duration <= MS_PER_HOUR {
        0
    } else {
        (duration / MS_PER_HOUR) as i64
    };
    let after_hours = duration - hours as f64 * MS_PER_HOUR;
    let mut minutes = (after_hours / MS_PER_MINUTE) as i64;
    let mut seconds = ((after_hours - minutes as f64 * MS_PER_MINUTE) / MS_PER_SECOND) as i64;

    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }

    if hours == 0 {
        format!("{minutes}:{seconds:02}")
    } else {
        format!("{hours}:{minutes:02}:{seconds:02}")
    }
}

/// Format a byte count for display, e.g. `"1.50 MB"` or `"512 bytes"`.
///
/// Counts below one unit print as whole bytes regardless of `precision`.
/// Above that, `precision` is capped at three digits per power so a value
/// is never shown more finely than a byte.
pub fn formatted_data_size(
    bytes: i64,
    precision: u8,
    format: DataSizeFormat,
    locale: &NumberLocale,
) -> String {
    let magnitude = bytes.unsigned_abs();
    let power = data_size_power(magnitude, format);

    if power == 0 {
        return format!("{} bytes", locale.format_integer(bytes));
    }

    let scaled = bytes as f64 / (format.base() as f64).powi(power as i32);
    let digits = usize::from(precision).min(3 * power as usize);
    format!("{} {}", locale.format_decimal(scaled, digits), format.unit(power))
}

fn data_size_power(magnitude: u64, format: DataSizeFormat) -> u32 {
    let base = format.base();
    let mut power = 0;
    let mut rest = magnitude;
    while rest >= base && power < 6 {
        rest /= base;
        power += 1;
    }
    power
}

/// Map a linear amplitude to a logarithmic volume scale in `[0, 1)`.
///
/// Inputs below zero are treated as silence.
pub fn linear_to_log(linear: f64) -> f64 {
    1.0 - (-linear.max(0.0) * VOLUME_LOG_CONSTANT).exp()
}
