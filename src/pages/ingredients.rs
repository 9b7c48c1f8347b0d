//! Ingredient catalog: list, create, delete.

#[cfg(test)]
#[path = "ingredients_test.rs"]
mod ingredients_test;

use leptos::prelude::*;

use crate::components::data_table::{DataTable, TableRow, optional_cell};
use crate::components::page_error::PageError;
use crate::components::toast::ToastHost;
use crate::form::engine::SchemaForm;
use crate::form::schema::FormSchema;
use crate::net::api;
use crate::net::types::{Ingredient, Product};
use crate::pages::guard_page;
use crate::state::menu::Section;

pub(crate) fn ingredient_rows(ingredients: &[Ingredient], products: &[Product]) -> Vec<TableRow> {
    ingredients
        .iter()
        .map(|ingredient| {
            let product_title = ingredient.product_id.as_deref().and_then(|id| {
                products
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| p.title.as_str())
            });
            TableRow::new(
                &ingredient.id,
                vec![
                    ingredient.title.clone(),
                    optional_cell(product_title),
                ],
            )
        })
        .collect()
}

#[component]
pub fn IngredientsPage() -> impl IntoView {
    guard_page(Section::Ingredients);

    let ingredients = RwSignal::new(Vec::<Ingredient>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let page_error = RwSignal::new(None::<String>);
    let toast = RwSignal::new(None::<String>);
    let show_create = RwSignal::new(false);
    let create_schema = RwSignal::new(None::<FormSchema>);

    let load = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::list_ingredients().await {
                Ok(items) => {
                    ingredients.set(items);
                    page_error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("ingredient list fetch failed: {e}");
                    page_error.set(Some(e.user_message()));
                }
            }
            match api::list_products().await {
                Ok(items) => products.set(items),
                Err(e) => leptos::logging::warn!("product list fetch failed: {e}"),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
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
            match api::fetch_form_schema("ingredient.create").await {
                Ok(schema) => create_schema.set(Some(schema)),
                Err(e) => {
                    leptos::logging::warn!("form schema fetch failed: {e}");
                    toast.set(Some(e.user_message()));
                }
            }
        });
    };

    let on_created = Callback::new(move |()| {
        show_create.set(false);
        toast.set(Some("Ingredient created.".to_owned()));
        load();
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_ingredient(&id).await {
                Ok(_) => ingredients.update(|list| list.retain(|i| i.id != id)),
                Err(e) => {
                    leptos::logging::warn!("ingredient delete failed: {e}");
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
        <div class="page ingredients-page">
            <header class="page__header">
                <h1>"Ingredients"</h1>
                <button class="page__action" on:click=on_show_create>
                    "New ingredient"
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
                <Show when=move || show_create.get()>
                    {move || {
                        create_schema
                            .get()
                            .map(|schema| {
                                view! {
                                    <div class="page__create-form">
                                        <SchemaForm
                                            schema=schema
                                            action=api::ingredients_endpoint().to_owned()
                                            submit_label="Create ingredient".to_owned()
                                            on_success=on_created
                                        />
                                    </div>
                                }
                            })
                    }}
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="page__loading">"Loading..."</p> }
                >
                    {move || {
                        let rows = ingredient_rows(&ingredients.get(), &products.get());
                        view! {
                            <DataTable
                                headers=vec!["Title".to_owned(), "Product".to_owned()]
                                rows=rows
                                on_delete=on_delete
                            />
                        }
                    }}
                </Show>
            </Show>
            <ToastHost message=toast/>
        </div>
    }
}
