//! Status footer.
//!
//! Shows the version, a copyright line and the machine name.

use leptos::prelude::*;

use crate::config::{APP_VERSION, MACHINE_NAME, OWNER_NAME};
use crate::utils::dom::current_year;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

#[component]
pub fn Status() -> impl IntoView {
    let copyright = format!("© {} {}", current_year(), OWNER_NAME);

    view! {
        <footer class=css::bar>
            <span class=css::version>{APP_VERSION}</span>
            <span class=css::owner>{copyright}</span>
            <span class=css::machine>{MACHINE_NAME}</span>
        </footer>
    }
}
