// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Files page — command-line files, path checks, touch and delete.

use std::path::Path;

use dioxus::prelude::*;

use hostkit_utils::Utils;

use crate::state::{AppState, severity_colour};

#[component]
pub fn Files() -> Element {
    let state = use_context::<Signal<AppState>>();
    let utils = use_context::<Utils>();
    let mut path = use_signal(String::new);
    let mut check = use_signal(|| Option::<String>::None);

    // Rows are (url, escaped label, size)
    let rows: Vec<(String, String, String)> = state
        .read()
        .files
        .iter()
        .map(|url| {
            let p = url.path();
            (url.to_string(), escaped_name(&utils, p), size_label(&utils, p))
        })
        .collect();

    rsx! {
        div {
            h1 { "Files" }

            section { style: "margin: 16px 0;",
                h3 { "Opened with" }
                if rows.is_empty() {
                    p { style: "color: #888;", "No files were passed on the command line." }
                }
                for (url, label, size) in rows {
                    div { key: "{url}",
                        style: "display: flex; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                        span { title: "{url}", dangerous_inner_html: "{label}" }
                        span { style: "color: #666;", "{size}" }
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Path" }
                div { style: "display: flex; gap: 8px;",
                    input {
                        style: "flex: 1; padding: 8px; border: 1px solid #ccc; border-radius: 4px;",
                        placeholder: "/path/to/file",
                        value: "{path}",
                        oninput: move |evt| {
                            path.set(evt.value());
                            check.set(None);
                        },
                    }
                    button {
                        style: "padding: 8px 12px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                        onclick: move |_| {
                            #[cfg(not(any(target_os = "ios", target_os = "android")))]
                            {
                                if let Some(picked) = rfd::FileDialog::new().pick_file() {
                                    path.set(picked.display().to_string());
                                    check.set(None);
                                }
                            }
                        },
                        "Browse"
                    }
                }

                div { style: "display: flex; gap: 8px; margin-top: 12px;",
                    button {
                        style: "flex: 1; padding: 10px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                        onclick: {
                            let utils = utils.clone();
                            move |_| {
                                let target = path.read().clone();
                                check.set(Some(describe_path(&utils, &target)));
                            }
                        },
                        "Check"
                    }
                    button {
                        style: "flex: 1; padding: 10px; border-radius: 8px; border: none; background: #007aff; color: white;",
                        disabled: path.read().trim().is_empty(),
                        onclick: {
                            let utils = utils.clone();
                            move |_| {
                                let target = path.read().clone();
                                utils.touch_file(target.trim());
                                check.set(None);
                            }
                        },
                        "Touch"
                    }
                    button {
                        style: "flex: 1; padding: 10px; border-radius: 8px; border: none; background: #ff3b30; color: white;",
                        disabled: path.read().trim().is_empty(),
                        onclick: {
                            let utils = utils.clone();
                            move |_| {
                                let target = path.read().clone();
                                utils.delete_file(target.trim());
                                check.set(None);
                            }
                        },
                        "Delete"
                    }
                }

                if let Some(ref msg) = *check.read() {
                    p { style: "color: #666; font-size: 14px;", "{msg}" }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Recent" }
                if state.read().alerts.is_empty() {
                    p { style: "color: #888;", "Nothing yet." }
                }
                for alert in state.read().alerts.iter() {
                    {
                        let colour = severity_colour(alert.kind.severity());
                        let when = alert.raised_at.format("%H:%M:%S").to_string();
                        let target = alert.path.display().to_string();
                        rsx! {
                            div { style: "padding: 8px 0; border-bottom: 1px solid #f0f0f0; font-size: 14px;",
                                span { style: "color: {colour};", "{alert.message()}" }
                                span { style: "color: #888; margin-left: 8px;", "{target} at {when}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn escaped_name(utils: &Utils, path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("<b>{}</b>", utils.to_html_escaped(&name))
}

fn size_label(utils: &Utils, path: &Path) -> String {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            utils.formatted_data_size(i64::try_from(meta.len()).unwrap_or(i64::MAX))
        }
        Ok(_) => "folder".into(),
        Err(_) => "missing".into(),
    }
}

fn describe_path(utils: &Utils, target: &str) -> String {
    let target = target.trim();
    if target.is_empty() {
        return "Enter a path first.".into();
    }
    if utils.file_exists(target) {
        format!("File, {}", size_label(utils, Path::new(target)))
    } else if utils.path_exists(target) {
        "Exists, but is not a regular file.".into()
    } else {
        "Does not exist.".into()
    }
}
