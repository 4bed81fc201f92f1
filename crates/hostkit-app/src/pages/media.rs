// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Media page — duration and volume formatting, haptics, wake lock.

use dioxus::prelude::*;

use hostkit_utils::Utils;

use crate::state::AppState;

#[component]
pub fn Media() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let utils = use_context::<Utils>();
    let mut duration_ms = use_signal(|| 0.0_f64);
    let mut volume = use_signal(|| 50_u32);
    let mut pulse_ms = use_signal(|| utils.config().haptic_pulse_ms);

    let duration_label = utils.format_duration(*duration_ms.read());
    let linear = f64::from(*volume.read()) / 100.0;
    let volume_label = format!("{linear:.2} linear, {:.3} log", utils.linear_to_log(linear));

    rsx! {
        div {
            h1 { "Media" }

            section { style: "margin: 16px 0;",
                h3 { "Duration" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    input {
                        r#type: "number",
                        style: "width: 160px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{duration_ms}",
                        oninput: move |evt| {
                            if let Ok(ms) = evt.value().parse::<f64>() {
                                duration_ms.set(ms);
                            }
                        },
                    }
                    span { style: "font-variant-numeric: tabular-nums; font-size: 20px;", "{duration_label}" }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Volume" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: "{volume}",
                        oninput: move |evt| {
                            if let Ok(v) = evt.value().parse::<u32>() {
                                volume.set(v.min(100));
                            }
                        },
                    }
                    span { "{volume_label}" }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Device" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    input {
                        r#type: "number",
                        style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{pulse_ms}",
                        onchange: move |evt| {
                            if let Ok(ms) = evt.value().parse::<u32>() {
                                pulse_ms.set(ms);
                            }
                        },
                    }
                    button {
                        style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                        disabled: !utils.has_haptics(),
                        onclick: {
                            let utils = utils.clone();
                            move |_| utils.vibrate(*pulse_ms.read())
                        },
                        if utils.has_haptics() { "Vibrate" } else { "No vibrator" }
                    }
                }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                    span { "Keep screen on" }
                    input {
                        r#type: "checkbox",
                        checked: state.read().screen_on,
                        onchange: {
                            let utils = utils.clone();
                            move |evt: Event<FormData>| {
                                let on = evt.checked();
                                utils.keep_screen_on(on);
                                state.write().screen_on = on;
                            }
                        },
                    }
                }
            }
        }
    }
}
