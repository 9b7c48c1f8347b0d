//! Typed accessors for the signals provided at the application shell.
//!
//! Calling an accessor outside the provider tree is a programming error;
//! each panics with a stable message naming the missing provider so the
//! failure is unambiguous in the console.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::home::HomeState;
use crate::state::menu::MenuState;
use crate::state::units::UnitsState;

/// Panic message for an accessor used outside its provider.
pub fn missing_provider_message(provider: &str) -> String {
    format!("{provider} context is missing: component must be nested inside <App>")
}

fn expect<T: Clone + Send + Sync + 'static>(provider: &str) -> RwSignal<T> {
    use_context::<RwSignal<T>>().unwrap_or_else(|| panic!("{}", missing_provider_message(provider)))
}

pub fn use_auth() -> RwSignal<AuthState> {
    expect("AuthState")
}

pub fn use_home() -> RwSignal<HomeState> {
    expect("HomeState")
}

pub fn use_units() -> RwSignal<UnitsState> {
    expect("UnitsState")
}

pub fn use_menu() -> RwSignal<MenuState> {
    expect("MenuState")
}
