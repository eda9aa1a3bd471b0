//! Hero section component

use leptos::*;

use crate::services::{go_to, Section};

#[component]
pub fn Hero(set_menu_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Megfizethető Okos Otthon Megoldások"</h1>
            <p class="subtitle">"A legköltséghatékonyabb okos automatizálás Szegeden"</p>
            <p class="lead">
                "Professzionális fűtés- és hűtésvezérlés, okosotthon-automatizálás és "
                "biztonsági rendszerek — Zigbee és vezetékes opciókkal."
            </p>
            <div class="hero-actions">
                <button class="btn btn-primary" on:click=move |_| go_to(Section::Contact, set_menu_open)>
                    "Kérjen Ingyenes Árajánlatot"
                </button>
                <button class="btn btn-secondary" on:click=move |_| go_to(Section::Services, set_menu_open)>
                    "Szolgáltatások Megtekintése"
                </button>
            </div>
        </section>
    }
}
