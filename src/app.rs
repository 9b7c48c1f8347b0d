//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::side_nav::SideNav;
use crate::pages::{
    ingredients::IngredientsPage, login::LoginPage, plans::PlansPage, products::ProductsPage,
    recipe_detail::RecipeDetailPage, recipes::RecipesPage, settings::SettingsPage,
    users::UsersPage,
};
use crate::state::auth::AuthState;
use crate::state::home::HomeState;
use crate::state::menu::MenuState;
use crate::state::units::UnitsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Fetch the signed-in user, their home, and the unit catalog once after
/// hydration. Pages read these through the context signals.
fn bootstrap(
    auth: RwSignal<AuthState>,
    home: RwSignal<HomeState>,
    units: RwSignal<UnitsState>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;

        match api::fetch_current_user().await {
            Ok(user) => auth.update(|state| {
                state.user = Some(user);
                state.loading = false;
            }),
            Err(e) => {
                leptos::logging::warn!("session probe failed: {e}");
                auth.update(|state| state.loading = false);
                home.update(|state| state.loading = false);
                units.update(|state| state.loading = false);
                return;
            }
        }
        match api::fetch_current_home().await {
            Ok(fetched) => home.update(|state| {
                state.home = Some(fetched);
                state.loading = false;
            }),
            Err(e) => {
                leptos::logging::warn!("home fetch failed: {e}");
                home.update(|state| {
                    state.error = Some(e.user_message());
                    state.loading = false;
                });
            }
        }
        match api::list_units().await {
            Ok(items) => units.update(|state| {
                state.items = items;
                state.loading = false;
            }),
            Err(e) => {
                leptos::logging::warn!("unit list fetch failed: {e}");
                units.update(|state| state.loading = false);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, home, units);
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let home = RwSignal::new(HomeState::default());
    let units = RwSignal::new(UnitsState::default());
    let menu = RwSignal::new(MenuState::default());

    provide_context(auth);
    provide_context(home);
    provide_context(units);
    provide_context(menu);

    let booted = RwSignal::new(false);
    Effect::new(move || {
        if booted.get() {
            return;
        }
        booted.set(true);
        bootstrap(auth, home, units);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/larder-admin.css"/>
        <Title text="Larder"/>

        <Router>
            <div class="app-shell">
                <Show when=move || auth.read().user.is_some()>
                    <SideNav/>
                </Show>
                <main class="app-shell__content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("") view=PlansPage/>
                        <Route path=StaticSegment("products") view=ProductsPage/>
                        <Route path=StaticSegment("recipes") view=RecipesPage/>
                        <Route
                            path=(StaticSegment("recipes"), ParamSegment("id"))
                            view=RecipeDetailPage
                        />
                        <Route path=StaticSegment("ingredients") view=IngredientsPage/>
                        <Route path=StaticSegment("users") view=UsersPage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
