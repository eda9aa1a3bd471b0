//! Browser and remote services.
//!
//! # Services
//!
//! - [`store`] - Lead persistence (Supabase REST insert)
//! - [`navigation`] - Smooth scrolling between page sections
//! - [`timer`] - Cancellable banner auto-reset

pub mod store;
pub mod navigation;
pub mod timer;

pub use store::*;
pub use navigation::*;
pub use timer::*;
