//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `home`, `units`, `menu`) so individual
//! screens can depend on small focused models. Each is provided as an
//! `RwSignal` context at the application shell; `context` holds the typed
//! accessors.

pub mod auth;
pub mod context;
pub mod home;
pub mod menu;
pub mod units;
