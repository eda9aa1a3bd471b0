use leptos::*;

use crate::catalog::{ABOUT_PARAGRAPHS, HIGHLIGHTS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="section-header">
                <h2>"Rólunk"</h2>
                <div class="divider"></div>
            </div>

            <div class="about-grid">
                <div>
                    <h3>"Családi Kiválóság"</h3>
                    {ABOUT_PARAGRAPHS
                        .iter()
                        .map(|text| view! { <p>{*text}</p> })
                        .collect_view()}
                </div>

                <div class="about-highlights">
                    <h3>"Miért Minket Válasszon?"</h3>
                    <ul>
                        {HIGHLIGHTS
                            .iter()
                            .map(|highlight| view! {
                                <li class="highlight">
                                    <span class="check">"✓"</span>
                                    <div>
                                        <span class="highlight-title">{highlight.title}</span>
                                        <p>{highlight.description}</p>
                                    </div>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
