//! Recipes list screen. Opening a row navigates to the editor.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::data_table::{DataTable, TableRow, optional_cell};
use crate::components::page_error::PageError;
use crate::components::toast::ToastHost;
use crate::form::engine::SchemaForm;
use crate::form::schema::FormSchema;
use crate::net::api;
use crate::net::types::Recipe;
use crate::pages::guard_page;
use crate::state::menu::Section;

/// Reduce recipes to rows: title, portions, group/step counts.
pub(crate) fn recipe_rows(recipes: &[Recipe]) -> Vec<TableRow> {
    recipes
        .iter()
        .map(|r| {
            TableRow::new(
                r.id.clone(),
                vec![
                    r.title.clone(),
                    r.portions.map_or_else(|| "—".to_owned(), |p| p.to_string()),
                    format!("{} groups", r.groups.len()),
                    format!("{} steps", r.steps.len()),
                    optional_cell(r.description.as_deref()),
                ],
            )
        })
        .collect()
}

#[component]
pub fn RecipesPage() -> impl IntoView {
    guard_page(Section::Recipes);
    let navigate = use_navigate();

    let recipes = RwSignal::new(Vec::<Recipe>::new());
    let loading = RwSignal::new(true);
    let page_error = RwSignal::new(None::<String>);
    let toast = RwSignal::new(None::<String>);
    let show_create = RwSignal::new(false);
    let create_schema = RwSignal::new(None::<FormSchema>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            loading.set(true);
            match api::list_recipes().await {
                Ok(items) => {
                    recipes.set(items);
                    page_error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("recipe list fetch failed: {e}");
                    page_error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        fetched.set(true);
        load();
    });

    let on_show_create = move |_| {
        show_create.set(true);
        if create_schema.get_untracked().is_some() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_form_schema("recipe.create").await {
                Ok(schema) => create_schema.set(Some(schema)),
                Err(e) => {
                    leptos::logging::warn!("recipe form schema fetch failed: {e}");
                    toast.set(Some(e.user_message()));
                    show_create.set(false);
                }
            }
        });
    };

    let on_created = Callback::new(move |()| {
        show_create.set(false);
        toast.set(Some("Recipe created.".to_owned()));
        load();
    });

    // Navigation happens in an effect so row callbacks stay plain signal writes.
    let open_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(id) = open_id.get() {
            open_id.set(None);
            navigate(&format!("/recipes/{id}"), NavigateOptions::default());
        }
    });
    let on_open = Callback::new(move |id: String| open_id.set(Some(id)));

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_recipe(&id).await {
                Ok(_) => recipes.update(|items| items.retain(|r| r.id != id)),
                Err(e) => {
                    leptos::logging::warn!("recipe delete failed: {e}");
                    toast.set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="page recipes-page">
            <header class="page__header">
                <h1>"Recipes"</h1>
                <button class="page__action" on:click=on_show_create>
                    "New recipe"
                </button>
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
                <Show when=move || loading.get()>
                    <p class="page__loading">"Loading..."</p>
                </Show>
                {move || {
                    let rows = recipe_rows(&recipes.get());
                    view! {
                        <DataTable
                            headers=vec![
                                "Title".to_owned(),
                                "Portions".to_owned(),
                                "Groups".to_owned(),
                                "Steps".to_owned(),
                                "Description".to_owned(),
                            ]
                            rows=rows
                            on_open=on_open
                            on_delete=on_delete
                            empty_label="No recipes yet.".to_owned()
                        />
                    }
                }}
                <Show when=move || show_create.get()>
                    {move || {
                        create_schema
                            .get()
                            .map(|schema| {
                                view! {
                                    <div class="page__create-form">
                                        <SchemaForm
                                            schema=schema
                                            action=api::recipes_endpoint().to_owned()
                                            submit_label="Create recipe".to_owned()
                                            on_success=on_created
                                        />
                                    </div>
                                }
                            })
                    }}
                </Show>
            </Show>
            <ToastHost message=toast/>
        </div>
    }
}
