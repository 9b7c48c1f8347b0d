//! Products list screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Canonical list-screen shape: fetch on mount with page-level error
//! promotion, shared data table, server-schema create form, inline delete.
//! Product creation posts multipart because the form carries an image.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::components::data_table::{DataTable, TableRow, optional_cell, price_cell};
use crate::components::page_error::PageError;
use crate::components::toast::ToastHost;
use crate::form::engine::SchemaForm;
use crate::form::payload::Encoding;
use crate::form::schema::FormSchema;
use crate::net::api;
use crate::net::types::Product;
use crate::pages::guard_page;
use crate::state::context::use_units;
use crate::state::menu::Section;
use crate::state::units::UnitsState;

/// Reduce products to table rows: title, price, unit, supplier.
pub(crate) fn product_rows(products: &[Product], units: &UnitsState) -> Vec<TableRow> {
    products
        .iter()
        .map(|p| {
            TableRow::new(
                p.id.clone(),
                vec![
                    p.title.clone(),
                    price_cell(p.gross_price),
                    p.unit_id
                        .as_deref()
                        .map_or_else(|| "—".to_owned(), |id| units.abbreviation(id)),
                    optional_cell(p.supplier.as_deref()),
                ],
            )
        })
        .collect()
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    guard_page(Section::Products);
    let units = use_units();

    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let page_error = RwSignal::new(None::<String>);
    let toast = RwSignal::new(None::<String>);
    let show_create = RwSignal::new(false);
    let create_schema = RwSignal::new(None::<FormSchema>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            loading.set(true);
            match api::list_products().await {
                Ok(items) => {
                    products.set(items);
                    page_error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("product list fetch failed: {e}");
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
            match api::fetch_form_schema("product.create").await {
                Ok(schema) => create_schema.set(Some(schema)),
                Err(e) => {
                    leptos::logging::warn!("product form schema fetch failed: {e}");
                    toast.set(Some(e.user_message()));
                    show_create.set(false);
                }
            }
        });
    };

    let on_created = Callback::new(move |()| {
        show_create.set(false);
        toast.set(Some("Product created.".to_owned()));
        load();
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(_) => products.update(|items| items.retain(|p| p.id != id)),
                Err(e) => {
                    leptos::logging::warn!("product delete failed: {e}");
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
        <div class="page products-page">
            <header class="page__header">
                <h1>"Products"</h1>
                <button class="page__action" on:click=on_show_create>
                    "New product"
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
                    let rows = product_rows(&products.get(), &units.get());
                    view! {
                        <DataTable
                            headers=vec![
                                "Title".to_owned(),
                                "Price".to_owned(),
                                "Unit".to_owned(),
                                "Supplier".to_owned(),
                            ]
                            rows=rows
                            on_delete=on_delete
                            empty_label="No products yet.".to_owned()
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
                                            action=api::products_endpoint().to_owned()
                                            encoding=Encoding::Multipart
                                            submit_label="Create product".to_owned()
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
