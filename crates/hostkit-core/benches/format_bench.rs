// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the formatting helpers in hostkit-core.
// These run on every list-row render in the UI, so they are the hottest
// code in the facade.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hostkit_core::format::{format_duration, formatted_data_size, linear_to_log};
use hostkit_core::markup::to_html_escaped;
use hostkit_core::{DataSizeFormat, NumberLocale};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Format a spread of durations either side of the one-hour switch.
fn bench_format_duration(c: &mut Criterion) {
    let samples = [0.0, 59_999.0, 3_599_999.0, 3_600_001.0, 7_261_000.0];

    c.bench_function("format_duration (5 samples)", |b| {
        b.iter(|| {
            for ms in samples {
                black_box(format_duration(black_box(ms)));
            }
        });
    });
}

/// Format byte counts from bytes to exabytes with digit grouping enabled.
fn bench_formatted_data_size(c: &mut Criterion) {
    let locale = NumberLocale::from_name("de_DE.UTF-8");
    let samples = [512_i64, 1_572_864, 5_368_709_120, i64::MAX];

    c.bench_function("formatted_data_size (de_DE)", |b| {
        b.iter(|| {
            for bytes in samples {
                black_box(formatted_data_size(
                    black_box(bytes),
                    2,
                    DataSizeFormat::Traditional,
                    &locale,
                ));
            }
        });
    });
}

/// Escape a short track title with markup characters.
fn bench_html_escape(c: &mut Criterion) {
    let title = r#"<b>"Rock & Roll"</b> (Live)"#;

    c.bench_function("to_html_escaped (title)", |b| {
        b.iter(|| black_box(to_html_escaped(black_box(title)).into_owned()));
    });
}

fn bench_linear_to_log(c: &mut Criterion) {
    c.bench_function("linear_to_log (100 steps)", |b| {
        b.iter(|| {
            for step in 0..100 {
                black_box(linear_to_log(black_box(f64::from(step) / 100.0)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_format_duration,
    bench_formatted_data_size,
    bench_html_escape,
    bench_linear_to_log
);
criterion_main!(benches);
