// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android UI-thread executor.
//
// `Window.addFlags` and `clearFlags` throw `CalledFromWrongThreadException`
// off the Activity's UI thread. The webview runtime already owns a pipe into
// the main looper; tasks ride on it and run there in submission order.

#![cfg(target_os = "android")]

use dioxus::desktop::wry::prelude::dispatch;

use hostkit_bridge::{UiExecutor, UiTask};

/// Posts every task to the Activity's main looper.
#[derive(Debug, Default, Clone, Copy)]
pub struct MainThreadExecutor;

impl UiExecutor for MainThreadExecutor {
    fn submit(&self, task: UiTask) {
        dispatch(move |_env, _activity, _webview| task());
    }
}
