//! Meal plan overview: upcoming meals for the current home, grouped by day.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::components::page_error::PageError;
use crate::components::toast::ToastHost;
use crate::net::types::{Plan, Recipe};
use crate::pages::guard_page;
use crate::state::context::use_home;
use crate::state::menu::Section;

/// Plans bucketed by date, dates ascending, entries sorted by recipe title
/// within a day.
pub(crate) fn plans_by_date(plans: &[Plan]) -> Vec<(String, Vec<Plan>)> {
    let mut buckets: BTreeMap<String, Vec<Plan>> = BTreeMap::new();
    for plan in plans {
        buckets.entry(plan.date.clone()).or_default().push(plan.clone());
    }
    buckets
        .into_iter()
        .map(|(date, mut entries)| {
            entries.sort_by(|a, b| a.recipe_title.cmp(&b.recipe_title));
            (date, entries)
        })
        .collect()
}

#[component]
pub fn PlansPage() -> impl IntoView {
    guard_page(Section::Plans);
    let home = use_home();

    let plans = RwSignal::new(Vec::<Plan>::new());
    let recipes = RwSignal::new(Vec::<Recipe>::new());
    let loading = RwSignal::new(true);
    let page_error = RwSignal::new(None::<String>);
    let toast = RwSignal::new(None::<String>);

    let new_recipe = RwSignal::new(String::new());
    let new_date = RwSignal::new(String::new());

    let load = move || {
        let Some(home_id) = home.get_untracked().home.map(|h| h.id) else {
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            match api::list_plans(&home_id).await {
                Ok(items) => {
                    plans.set(items);
                    page_error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("plan list fetch failed: {e}");
                    page_error.set(Some(e.user_message()));
                }
            }
            match api::list_recipes().await {
                Ok(items) => recipes.set(items),
                Err(e) => leptos::logging::warn!("recipe list fetch failed: {e}"),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = home_id;
            loading.set(false);
        }
    };

    // The home arrives asynchronously after login, so keep watching until it
    // is there, then fetch once.
    let fetched = RwSignal::new(false);
    Effect::new(move || {
        let ready = home.read().home.is_some();
        if !ready || fetched.get_untracked() {
            return;
        }
        fetched.set(true);
        load();
    });

    let on_create = move |_| {
        let recipe_id = new_recipe.get_untracked();
        let date = new_date.get_untracked();
        if recipe_id.is_empty() || date.is_empty() {
            toast.set(Some("Pick a recipe and a date.".to_owned()));
            return;
        }
        let Some(home_id) = home.get_untracked().home.map(|h| h.id) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            match api::create_plan(&home_id, &recipe_id, &date).await {
                Ok(plan) => {
                    plans.update(|list| list.push(plan));
                    toast.set(Some("Meal planned.".to_owned()));
                }
                Err(e) => {
                    leptos::logging::warn!("plan create failed: {e}");
                    toast.set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (home_id, recipe_id, date);
        }
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            match api::delete_plan(&id).await {
                Ok(_) => plans.update(|list| list.retain(|p| p.id != id)),
                Err(e) => {
                    leptos::logging::warn!("plan delete failed: {e}");
                    toast.set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="page plans-page">
            <header class="page__header">
                <h1>"Meal plans"</h1>
            </header>
            <Show
                when=move || page_error.get().is_none()
                fallback=move || {
                    view! {
                        <PageError
                            message=page_error.get().unwrap_or_default()
                            on_retry=Callback::new(move |()| load())
                        />
                    }
                }
            >
                <div class="plans-page__composer">
                    <select
                        class="plans-page__recipe"
                        on:change=move |ev| new_recipe.set(event_target_value(&ev))
                    >
                        <option value="">"Recipe..."</option>
                        {move || {
                            recipes
                                .get()
                                .into_iter()
                                .map(|r| view! { <option value=r.id.clone()>{r.title}</option> })
                                .collect_view()
                        }}
                    </select>
                    <input
                        class="plans-page__date"
                        type="date"
                        prop:value=move || new_date.get()
                        on:input=move |ev| new_date.set(event_target_value(&ev))
                    />
                    <button class="plans-page__add" on:click=on_create>
                        "Plan meal"
                    </button>
                </div>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="page__loading">"Loading..."</p> }
                >
                    <Show
                        when=move || !plans.with(Vec::is_empty)
                        fallback=|| view! { <p class="page__empty">"No meals planned yet."</p> }
                    >
                        {move || {
                            plans_by_date(&plans.get())
                                .into_iter()
                                .map(|(date, entries)| {
                                    view! {
                                        <section class="plan-day">
                                            <h2 class="plan-day__date">{date}</h2>
                                            <ul class="plan-day__list">
                                                {entries
                                                    .into_iter()
                                                    .map(|plan| {
                                                        let id = plan.id.clone();
                                                        view! {
                                                            <li class="plan-day__entry">
                                                                <span class="plan-day__title">{plan.recipe_title}</span>
                                                                <button
                                                                    class="plan-day__remove"
                                                                    on:click=move |_| on_delete(id.clone())
                                                                >
                                                                    "Remove"
                                                                </button>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </section>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </Show>
            </Show>
            <ToastHost message=toast/>
        </div>
    }
}
