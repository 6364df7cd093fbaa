//! Terminal view component.
//!
//! Welcome line, transcript and the input line.

use leptos::prelude::*;

use super::boot;
use crate::app::AppContext;
use crate::components::terminal::{Entry, Input};
use crate::utils::dom::focus_terminal_input;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

/// Auto-scroll output to bottom when the transcript changes.
fn setup_autoscroll_effect(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.session.track();
        ctx.candidates.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    let typed = RwSignal::new(String::new());
    boot::type_welcome(typed);
    setup_autoscroll_effect(ctx, output_ref);

    let prompt = Signal::derive(move || ctx.prompt());
    let handle_click = move |_| focus_terminal_input();

    view! {
        <div node_ref=output_ref class=css::container on:click=handle_click>
            <div class=css::welcome>{move || typed.get()}</div>
            <For
                each=move || ctx.session.with(|s| s.transcript().to_vec())
                key=|entry| entry.id
                children=|entry| view! { <Entry entry=entry /> }
            />
            <Input prompt=prompt />
        </div>
    }
}
