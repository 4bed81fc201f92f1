// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page — persistent facade configuration.

use dioxus::prelude::*;

use hostkit_core::DataSizeFormat;
use hostkit_core::config::MAX_DATA_SIZE_PRECISION;
use hostkit_utils::Utils;

use crate::services::config_store::ConfigStore;
use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let store = use_context::<ConfigStore>();
    let utils = use_context::<Utils>();
    let mut save_msg = use_signal(|| Option::<(bool, String)>::None);

    // Live preview with the saved format, since the facade is fixed at startup
    let preview = utils.formatted_data_size(1_572_864);
    let locale_name = state.read().config.locale.clone().unwrap_or_default();
    let toolkit = format!("{} {}", utils.toolkit_name(), utils.toolkit_version());

    rsx! {
        div {
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "Data sizes" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Decimal places" }
                    input {
                        r#type: "number",
                        min: "0",
                        max: "{MAX_DATA_SIZE_PRECISION}",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{state.read().config.data_size_precision}",
                        onchange: move |evt| {
                            if let Some(digits) = parse_precision(&evt.value()) {
                                state.write().config.data_size_precision = digits;
                            }
                        },
                    }
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Units" }
                    select {
                        style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: format_label(state.read().config.data_size_format),
                        onchange: move |evt| {
                            if let Some(format) = format_from_label(&evt.value()) {
                                state.write().config.data_size_format = format;
                            }
                        },
                        option { value: "Traditional", "Traditional (kB, MB)" }
                        option { value: "IEC", "IEC (KiB, MiB)" }
                        option { value: "SI", "SI (kB, MB, base 1000)" }
                    }
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Locale" }
                    input {
                        style: "width: 140px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        placeholder: "system",
                        value: "{locale_name}",
                        onchange: move |evt| {
                            let name = evt.value().trim().to_string();
                            state.write().config.locale = (!name.is_empty()).then_some(name);
                        },
                    }
                }
                p { style: "color: #666; font-size: 14px;", "1.5 MiB currently reads as {preview}" }
            }

            section { style: "margin: 16px 0;",
                h3 { "Device" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Haptic pulse (ms)" }
                    input {
                        r#type: "number",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{state.read().config.haptic_pulse_ms}",
                        onchange: move |evt| {
                            if let Ok(ms) = evt.value().parse::<u32>() {
                                state.write().config.haptic_pulse_ms = ms;
                            }
                        },
                    }
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Log filter" }
                    input {
                        style: "width: 140px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: "{state.read().config.log_filter}",
                        onchange: move |evt| {
                            state.write().config.log_filter = evt.value().trim().to_string();
                        },
                    }
                }
            }

            // Save button
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: move |_| {
                    let config = state.read().config.clone();
                    match store.save(&config) {
                        Ok(()) => {
                            tracing::info!(path = %store.path().display(), "settings saved");
                            save_msg.set(Some((true, "Saved. Changes apply on next launch.".into())));
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "failed to save settings");
                            save_msg.set(Some((false, format!("Save failed: {e}"))));
                        }
                    }
                },
                "Save Settings"
            }
            if let Some((ok, ref msg)) = *save_msg.read() {
                {
                    let colour = status_colour(ok);
                    rsx! {
                        p { style: "color: {colour}; font-size: 14px; text-align: center; margin-top: 8px;",
                            "{msg}"
                        }
                    }
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "Hostkit v{VERSION}"
                    br {}
                    "Built with {toolkit}"
                    br {}
                    "PMPL-1.0-or-later"
                }
            }
        }
    }
}

/// Decimal places accepted by the data-size formatter.
fn parse_precision(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|digits| *digits <= MAX_DATA_SIZE_PRECISION)
}

fn status_colour(ok: bool) -> &'static str {
    if ok { "#34c759" } else { "#ff3b30" }
}

fn format_label(format: DataSizeFormat) -> &'static str {
    match format {
        DataSizeFormat::Traditional => "Traditional",
        DataSizeFormat::Iec => "IEC",
        DataSizeFormat::Si => "SI",
    }
}

fn format_from_label(label: &str) -> Option<DataSizeFormat> {
    match label {
        "Traditional" => Some(DataSizeFormat::Traditional),
        "IEC" => Some(DataSizeFormat::Iec),
        "SI" => Some(DataSizeFormat::Si),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_input_is_bounded() {
        assert_eq!(parse_precision("3"), Some(3));
        assert_eq!(parse_precision(" 0 "), Some(0));
        assert_eq!(
            parse_precision(&MAX_DATA_SIZE_PRECISION.to_string()),
            Some(MAX_DATA_SIZE_PRECISION)
        );
        assert_eq!(parse_precision("19"), None);
        assert_eq!(parse_precision("-1"), None);
        assert_eq!(parse_precision("two"), None);
    }

    #[test]
    fn format_labels_round_trip() {
        for format in [DataSizeFormat::Traditional, DataSizeFormat::Iec, DataSizeFormat::Si] {
            assert_eq!(format_from_label(format_label(format)), Some(format));
        }
        assert_eq!(format_from_label("metric"), None);
    }
}
