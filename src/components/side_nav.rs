//! Side navigation: section links, color-scheme toggle, logout.
//!
//! Reads the menu state from context; the active section highlight is set
//! by each page on mount.

use leptos::prelude::*;

use crate::state::context::{use_auth, use_menu};
use crate::state::menu::Section;
use crate::util::color_scheme::{self, ColorScheme};

#[component]
pub fn SideNav() -> impl IntoView {
    let auth = use_auth();
    let menu = use_menu();
    let scheme = RwSignal::new(ColorScheme::default());

    #[cfg(feature = "hydrate")]
    {
        let detected = color_scheme::detect();
        color_scheme::apply(detected);
        scheme.set(detected);
    }

    let on_toggle_menu = move |_| menu.update(|m| m.open = !m.open);
    let on_toggle_scheme = move |_| {
        let next = color_scheme::toggle(scheme.get_untracked());
        scheme.set(next);
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
        }
    };

    view! {
        <nav class="side-nav" class:side-nav--collapsed=move || !menu.get().open>
            <button class="side-nav__toggle" on:click=on_toggle_menu aria-label="Toggle menu">
                "☰"
            </button>
            <ul class="side-nav__sections">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <a
                                    class="side-nav__link"
                                    class:side-nav__link--active=move || menu.get().active == section
                                    href=section.path()
                                >
                                    {section.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="side-nav__footer">
                <button class="side-nav__scheme" on:click=on_toggle_scheme>
                    {move || match scheme.get() {
                        ColorScheme::Light => "Dark mode",
                        ColorScheme::Dark => "Light mode",
                    }}
                </button>
                <span class="side-nav__user">
                    {move || auth.get().user.map(|u| u.name).unwrap_or_default()}
                </span>
                <button class="side-nav__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </nav>
    }
}
