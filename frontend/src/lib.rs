//! OkosŐr Szeged - Frontend Rust/Leptos Application
//!
//! Single-page marketing site for a Szeged smart-home and security
//! installer, with a contact form that stores leads in Supabase.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (section links, mobile menu)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero                                                        │
//! │  About           (#about)                                    │
//! │  ProductCatalog  (#products)                                 │
//! │  ServiceGrid     (#services)                                 │
//! │  ContactSection  (#contact) ── ContactForm ── LeadStore      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Constants and store configuration
//! - [`types`] - Lead record, form state, errors
//! - [`catalog`] - Static page content
//! - [`form`] - Contact form state machine
//! - [`components`] - UI components
//! - [`services`] - Lead store client and in-page navigation

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod catalog;
pub mod form;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Leads
    LeadSubmission, FormField,
    // Form state
    SubmissionState, Banner,
    // Errors
    StoreError, ConfigError, StoreResult,
};

// Form
pub use form::{LeadForm, PendingSubmission};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount the app.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🏠 OkosŐr Szeged - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

/// Build the lead store from the build-time configuration.
///
/// A missing configuration does not prevent the page from rendering; the
/// form then reports a failure on submit.
pub fn lead_store() -> Rc<dyn LeadStore> {
    match StoreConfig::from_build_env() {
        Ok(config) => {
            log::debug!("Lead store: {}", config.table_endpoint(LEADS_TABLE));
            Rc::new(SupabaseStore::new(config))
        }
        Err(e) => {
            log::warn!("⚠️ {} - contact form submissions will fail", e);
            Rc::new(UnconfiguredStore::new(e))
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=PAGE_TITLE/>
        <Meta
            name="description"
            content="Megfizethető okosotthon-, fűtés- és biztonsági rendszerek telepítése Szegeden és környékén."
        />
        <Site store=lead_store()/>
    }
}

/// Page shell: owns the mobile menu flag and lays out the sections.
#[component]
pub fn Site(store: Rc<dyn LeadStore>) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <Header menu_open=menu_open set_menu_open=set_menu_open/>

        <main>
            <Hero set_menu_open=set_menu_open/>
            <About/>
            <ProductCatalog set_menu_open=set_menu_open/>
            <ServiceGrid set_menu_open=set_menu_open/>
            <ContactSection store=store/>
        </main>

        <Footer set_menu_open=set_menu_open/>
    }
}
