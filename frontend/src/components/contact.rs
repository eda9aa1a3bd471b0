//! Contact section with the lead capture form.
//!
//! The form state lives in a [`LeadForm`] signal. Submitting snapshots the
//! fields, performs one insert on the injected [`LeadStore`], then shows a
//! banner until its [`BannerTimer`] fires. The timer is kept in a stored
//! value and cancelled on a new submit and on unmount.

use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::catalog::CONTACT_DETAILS;
use crate::form::LeadForm;
use crate::services::{BannerTimer, BrowserScheduler, LeadStore};
use crate::types::FormField;

#[component]
pub fn ContactSection(store: Rc<dyn LeadStore>) -> impl IntoView {
    view! {
        <section id="contact" class="section contact">
            <div class="section-header">
                <h2>"Kapcsolat"</h2>
                <div class="divider"></div>
                <p>"Vegye fel velünk a kapcsolatot ingyenes konzultáció vagy árajánlat céljából"</p>
            </div>

            <div class="contact-grid">
                <div>
                    <h3>"Lépjen Kapcsolatba Velünk"</h3>
                    <div class="contact-details">
                        {CONTACT_DETAILS
                            .iter()
                            .map(|detail| view! {
                                <div class="contact-detail">
                                    <div class="contact-icon">{detail.icon}</div>
                                    <div>
                                        <h4>{detail.heading}</h4>
                                        {match detail.href {
                                            Some(href) => view! { <a href=href>{detail.value}</a> }.into_view(),
                                            None => view! { <p>{detail.value}</p> }.into_view(),
                                        }}
                                        {detail.note.map(|note| view! { <p class="note">{note}</p> })}
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <ContactForm store=store/>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ContactForm(store: Rc<dyn LeadStore>) -> impl IntoView {
    let form = create_rw_signal(LeadForm::new());
    let reset_timer = store_value(BannerTimer::new(BrowserScheduler));

    on_cleanup(move || {
        reset_timer.try_update_value(BannerTimer::cancel);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(pending) = form.try_update(LeadForm::begin_submit).flatten() else {
            log::debug!("Submission already in flight, ignoring submit");
            return;
        };

        // A new submission hides the previous banner right away.
        reset_timer.update_value(BannerTimer::cancel);
        log::info!("📤 Sending contact request...");

        let store = Rc::clone(&store);
        spawn_local(async move {
            let outcome = store.insert(std::slice::from_ref(&pending.record)).await;
            let ticket = pending.ticket;

            let applied = form
                .try_update(|f| f.finish_submit(ticket, outcome))
                .unwrap_or(false);
            if !applied {
                return;
            }

            reset_timer.try_update_value(|timer| {
                timer.schedule(move || {
                    form.try_update(|f| f.reset_banner(ticket));
                })
            });
        });
    };

    let state = move || form.with(LeadForm::state);

    view! {
        <div class="contact-form">
            <h3>"Üzenet Küldése"</h3>

            {move || {
                state().banner().map(|banner| view! {
                    <div class=banner.class>
                        <p class="banner-title">{banner.title}</p>
                        <p class="banner-detail">{banner.detail}</p>
                    </div>
                })
            }}

            <form on:submit=on_submit>
                {FormField::ALL
                    .into_iter()
                    .map(|field| view! { <FieldInput form=form field=field/> })
                    .collect_view()}

                <button
                    type="submit"
                    class="btn btn-primary btn-submit"
                    disabled=move || form.with(LeadForm::is_submitting)
                >
                    {move || state().button_label()}
                </button>

                <p class="form-hint">"* Minden mező kitöltése kötelező"</p>
            </form>
        </div>
    }
}

/// Labeled input bound to one field of the form.
#[component]
fn FieldInput(form: RwSignal<LeadForm>, field: FormField) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.update_field(field, text));
    };

    let control = if field == FormField::Message {
        view! {
            <textarea
                id=field.id()
                required=true
                rows=5
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                type=field.input_type()
                id=field.id()
                required=true
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_view()
    };

    view! {
        <div class="form-field">
            <label for=field.id()>{field.label()}</label>
            {control}
        </div>
    }
}
