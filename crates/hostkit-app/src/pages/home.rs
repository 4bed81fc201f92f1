// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page — platform and toolkit summary.

use dioxus::prelude::*;

use hostkit_utils::Utils;

use crate::Route;
use crate::state::AppState;

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let utils = use_context::<Utils>();

    let os = utils.os_version();
    let os_label = if os.name.is_empty() {
        "Unknown platform".to_string()
    } else {
        os.name.clone()
    };
    let os_numbers = if os.is_known() {
        format!("{}.{}.{} ({})", os.major, os.minor, os.micro, utils.os_binary_version())
    } else {
        "version unavailable".to_string()
    };
    let toolkit = format!("{} {}", utils.toolkit_name(), utils.toolkit_version());
    let ssl = yes_no(utils.supports_ssl());
    let haptics = yes_no(utils.has_haptics());

    rsx! {
        div {
            h1 { "Hostkit" }
            p { style: "color: #666;", "Running on {utils.platform_name()}" }

            section { style: "margin: 16px 0;",
                h3 { "System" }
                InfoRow { label: "Operating system", value: os_label }
                InfoRow { label: "OS version", value: os_numbers }
                InfoRow { label: "Toolkit", value: toolkit }
                InfoRow { label: "TLS available", value: ssl }
                InfoRow { label: "Haptics", value: haptics }
            }

            section { style: "margin: 16px 0;",
                h3 { "Storage" }
                button {
                    style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                    onclick: {
                        let utils = utils.clone();
                        move |_| {
                            let granted = utils.check_android_storage_permissions();
                            tracing::info!(granted, "storage permission check");
                            state.write().status_message = Some(if granted {
                                "Storage access granted.".into()
                            } else {
                                "Storage access requested. Grant it and check again.".into()
                            });
                        }
                    },
                    "Check Storage Access"
                }
                if let Some(ref msg) = state.read().status_message {
                    p { style: "color: #666; font-size: 14px;", "{msg}" }
                }
            }

            // Quick actions
            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin: 24px 0;",
                QuickAction { to: Route::Files {}, label: "Files", icon: "\u{1F4C1}" }
                QuickAction { to: Route::Media {}, label: "Media", icon: "\u{1F3B5}" }
            }
        }
    }
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

#[component]
fn InfoRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            span { style: "color: #666;", "{value}" }
        }
    }
}

#[component]
fn QuickAction(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "display: flex; flex-direction: column; align-items: center; padding: 20px; border-radius: 12px; background: #f5f5f7; text-decoration: none; color: #333;",
            span { style: "font-size: 32px;", "{icon}" }
            span { style: "margin-top: 8px; font-size: 14px;", "{label}" }
        }
    }
}
