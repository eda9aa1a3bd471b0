use leptos::*;

use crate::catalog::SERVICES;
use crate::services::{go_to, Section};

#[component]
pub fn ServiceGrid(set_menu_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <div class="section-header">
                <h2>"Szolgáltatásaink"</h2>
                <div class="divider"></div>
                <p>"Megfizethető okos megoldások minden otthonba és vállalkozásba"</p>
            </div>

            <div class="service-grid">
                {SERVICES
                    .iter()
                    .map(|service| view! {
                        <div class="service-card">
                            <div class="service-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="service-cta">
                <h3>"Lakossági és Üzleti Szolgáltatások"</h3>
                <p>
                    "Otthoni és vállalati telepítések, helyi konfiguráció, adatvédelmi fókusz "
                    "— nincs „spy” a rendszereinkben."
                </p>
                <button class="btn btn-primary" on:click=move |_| go_to(Section::Contact, set_menu_open)>
                    "Vegye Fel Velünk a Kapcsolatot"
                </button>
            </div>
        </section>
    }
}
