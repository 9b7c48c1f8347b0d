//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, page-level
//! error promotion, create/delete flows) and delegates rendering details to
//! `components` and the form engine.

pub mod ingredients;
pub mod login;
pub mod plans;
pub mod products;
pub mod recipe_detail;
pub mod recipes;
pub mod settings;
pub mod users;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::context::{use_auth, use_menu};
use crate::state::menu::Section;

/// Redirect to `/login` once the session resolves without a user, and mark
/// the active side-nav section. Every authenticated page calls this first.
pub(crate) fn guard_page(section: Section) {
    let auth = use_auth();
    let menu = use_menu();
    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
    Effect::new(move || {
        menu.update(|m| m.active = section);
    });
}
