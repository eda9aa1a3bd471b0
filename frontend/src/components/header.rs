use leptos::*;

use crate::services::{go_to, toggle_menu, Section};
use crate::BRAND_NAME;

#[component]
pub fn Header(
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    let nav_buttons = move |class: &'static str| {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button class=class on:click=move |_| go_to(section, set_menu_open)>
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="site-nav">
            <div class="nav-bar">
                <a href="#" class="logo">
                    <span class="logo-icon">"🏠"</span>
                    <span class="logo-text">{BRAND_NAME}</span>
                </a>

                <div class="nav-links">
                    {nav_buttons("nav-link")}
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(toggle_menu)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    {nav_buttons("mobile-link")}
                </div>
            </Show>
        </nav>
    }
}
