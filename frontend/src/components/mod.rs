//! UI Components for the OkosŐr site.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with mobile menu
//! - [`Hero`] - Headline and calls to action
//! - [`Footer`] - Quick links, services, copyright
//!
//! # Content Sections
//! - [`About`] - Company story and highlights
//! - [`ProductCatalog`] - Security package cards
//! - [`ServiceGrid`] - Service cards
//! - [`ContactSection`] - Contact details and the lead form ([`ContactForm`])

mod header;
mod hero;
mod about;
mod products;
mod service_grid;
mod contact;
mod footer;

pub use header::*;
pub use hero::*;
pub use about::*;
pub use products::*;
pub use service_grid::*;
pub use contact::*;
pub use footer::*;
