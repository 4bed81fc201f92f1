// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hostkit — platform utilities shell
//
// Entry point. Loads configuration, initialises logging, builds the
// utilities facade, and launches the Dioxus UI.

mod pages;
mod services;
mod state;

use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use hostkit_bridge::UiExecutor;
use hostkit_core::{ToolkitVersion, UtilsConfig};
use hostkit_utils::Utils;

use pages::files::Files;
use pages::home::Home;
use pages::media::Media;
use pages::settings::Settings;

use services::config_store::ConfigStore;
use state::AppState;

/// Dioxus version resolved in `Cargo.lock`, recorded by `build.rs`.
const DIOXUS_VERSION: &str = env!("HOSTKIT_DIOXUS_VERSION");

const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(4);

fn main() {
    let store = ConfigStore::new(&services::data_dir::data_dir());
    // Logging is not up yet, so a load failure is reported once it is.
    let loaded = store.load();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => UtilsConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log_filter))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Hostkit starting");
    match loaded {
        Ok(Some(_)) => tracing::info!(path = %store.path().display(), "configuration loaded"),
        Ok(None) => tracing::info!("no saved configuration, using defaults"),
        Err(e) => tracing::warn!(error = %e, "configuration unreadable, using defaults"),
    }

    let (executor, runtime) = ui_executor();

    let utils = Utils::builder()
        .executor(executor)
        .config(config)
        .toolkit(toolkit_version(DIOXUS_VERSION))
        .build();

    dioxus::LaunchBuilder::new()
        .with_context(utils)
        .with_context(store)
        .launch(app);

    drop(runtime);
}

/// Android: haptic and wake-lock calls are posted to the Activity's UI thread.
#[cfg(target_os = "android")]
fn ui_executor() -> (Arc<dyn UiExecutor>, Option<tokio::runtime::Runtime>) {
    (Arc::new(services::ui_thread::MainThreadExecutor), None)
}

/// Desktop: haptic and wake-lock work runs off the UI thread on its own runtime.
#[cfg(not(target_os = "android"))]
fn ui_executor() -> (Arc<dyn UiExecutor>, Option<tokio::runtime::Runtime>) {
    use hostkit_bridge::{InlineExecutor, TokioExecutor};

    match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("hostkit-ui-exec")
        .enable_all()
        .build()
    {
        Ok(rt) => (Arc::new(TokioExecutor::new(rt.handle().clone())), Some(rt)),
        Err(e) => {
            tracing::warn!(error = %e, "executor runtime unavailable, running inline");
            (Arc::new(InlineExecutor), None)
        }
    }
}

/// `major.minor.patch` of a semver string; pre-release and build suffixes are dropped.
fn toolkit_version(semver: &str) -> ToolkitVersion {
    let core = semver.split(['-', '+']).next().unwrap_or_default();
    let mut parts = core.split('.').map(|p| p.parse::<u32>().unwrap_or(0));
    let mut next = || parts.next().unwrap_or(0);
    let (major, minor, patch) = (next(), next(), next());
    ToolkitVersion::new("dioxus", major, minor, patch)
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(TabLayout)]
    #[route("/")]
    Home {},
    #[route("/files")]
    Files {},
    #[route("/media")]
    Media {},
    #[route("/settings")]
    Settings {},
}

/// Root component.
fn app() -> Element {
    let utils = use_context::<Utils>();

    let mut state = use_context_provider(|| Signal::new(AppState::new(&utils)));

    // Forward file-operation alerts into the reactive state
    use_future(move || {
        let mut alerts = utils.subscribe_alerts();
        async move {
            loop {
                match alerts.recv().await {
                    Ok(alert) => {
                        let raised_at = alert.raised_at;
                        state.write().push_alert(alert);
                        spawn(async move {
                            tokio::time::sleep(TOAST_LIFETIME).await;
                            state.write().expire_toast(raised_at);
                        });
                    }
                    Err(RecvError::Lagged(missed)) => {
                        tracing::warn!(missed, "alert listener fell behind");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent bottom tab layout wrapping all pages.
#[component]
fn TabLayout() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            // Page content
            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px;",
                Outlet::<Route> {}
            }

            // Transient alert toast
            if let Some(alert) = state.read().toast.clone() {
                {
                    let colour = state::severity_colour(alert.kind.severity());
                    rsx! {
                        div {
                            style: "position: fixed; left: 16px; right: 16px; bottom: 72px; padding: 12px 16px; border-radius: 8px; color: white; display: flex; justify-content: space-between; align-items: center; background: {colour};",
                            span { "{alert.message()}" }
                            button {
                                style: "border: none; background: transparent; color: white; font-size: 16px;",
                                onclick: move |_| state.write().toast = None,
                                "\u{2715}"
                            }
                        }
                    }
                }
            }

            // Bottom tab bar
            nav { class: "tab-bar",
                style: "display: flex; justify-content: space-around; padding: 8px 0; border-top: 1px solid #e0e0e0; background: #fafafa;",
                TabButton { to: Route::Home {}, label: "Home", icon: "H" }
                TabButton { to: Route::Files {}, label: "Files", icon: "F" }
                TabButton { to: Route::Media {}, label: "Media", icon: "M" }
                TabButton { to: Route::Settings {}, label: "Settings", icon: "S" }
            }
        }
    }
}

#[component]
fn TabButton(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "display: flex; flex-direction: column; align-items: center; text-decoration: none; color: #333; font-size: 12px;",
            span { style: "font-size: 20px;", "{icon}" }
            span { "{label}" }
        }
    }
}
