//! Footer component

use leptos::*;

use crate::catalog::FOOTER_SERVICES;
use crate::services::{go_to, Section};
use crate::{BRAND_NAME, COMPANY_NAME};

#[component]
pub fn Footer(set_menu_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <footer>
            <div class="footer-grid">
                <div>
                    <div class="logo">
                        <span class="logo-icon">"🏠"</span>
                        <span class="logo-text">{BRAND_NAME}</span>
                    </div>
                    <p>"Megbízható partner az okosotthon- és biztonsági megoldások terén Szegeden és környékén."</p>
                </div>

                <div>
                    <h4>"Gyors Linkek"</h4>
                    <ul class="footer-links">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! {
                                <li>
                                    <button class="footer-link" on:click=move |_| go_to(section, set_menu_open)>
                                        {section.label()}
                                    </button>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4>"Szolgáltatásaink"</h4>
                    <ul>
                        {FOOTER_SERVICES.iter().map(|name| view! { <li>{*name}</li> }).collect_view()}
                    </ul>
                </div>
            </div>

            <div class="copyright">
                "© 2026 " {COMPANY_NAME} ". Minden jog fenntartva."
            </div>
        </footer>
    }
}
