//! Window title bar.

use leptos::prelude::*;

use crate::config::WINDOW_TITLE;

stylance::import_crate_style!(css, "src/components/titlebar/titlebar.module.css");

#[component]
pub fn TitleBar() -> impl IntoView {
    view! {
        <header class=css::bar>
            <div class=css::title>{WINDOW_TITLE}</div>
            <div class=css::dots>
                <span class=format!("{} {}", css::dot, css::yellow)></span>
                <span class=format!("{} {}", css::dot, css::green)></span>
                <span class=format!("{} {}", css::dot, css::red)></span>
            </div>
        </header>
    }
}
