//! Root application module.
//!
//! Contains the main App component and the AppContext holding the shell
//! session, following Leptos conventions.

use leptos::prelude::*;
use termfolio_core::{AutocompleteResult, Session, portfolio_fs};

use crate::components::status::Status;
use crate::components::terminal::Terminal;
use crate::components::titlebar::TitleBar;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. All shell state lives in one [`Session`];
/// components only render it and forward key presses.
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Working directory, input line, history and transcript.
    pub session: RwSignal<Session>,
    /// Candidates from the last ambiguous Tab press.
    pub candidates: RwSignal<Vec<String>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            candidates: RwSignal::new(Vec::new()),
        }
    }

    /// Current prompt, e.g. `root@localhost:~/Desktop`.
    pub fn prompt(&self) -> String {
        self.session.with(|s| s.prompt())
    }

    pub fn input(&self) -> String {
        self.session.with(|s| s.input().to_string())
    }

    /// Manual edit of the input line.
    pub fn edit(&self, value: String) {
        self.candidates.set(Vec::new());
        self.session.update(|s| s.edit(value));
    }

    pub fn submit(&self) {
        self.candidates.set(Vec::new());
        self.session.update(|s| {
            s.submit(portfolio_fs());
        });
    }

    pub fn complete(&self) {
        let result = self.session.try_update(|s| s.complete(portfolio_fs()));
        match result {
            Some(AutocompleteResult::Multiple(candidates)) => self.candidates.set(candidates),
            _ => self.candidates.set(Vec::new()),
        }
    }

    pub fn recall_previous(&self) {
        self.session.update(|s| s.recall_previous());
    }

    pub fn recall_next(&self) {
        self.session.update(|s| s.recall_next());
    }

    /// Ctrl-L.
    pub fn clear(&self) {
        self.candidates.set(Vec::new());
        self.session.update(|s| s.clear());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Provides [`AppContext`] and lays out the window: title bar, terminal and
/// status footer.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! {
        <div class=css::window>
            <TitleBar />
            <Terminal />
            <Status />
        </div>
    }
}
