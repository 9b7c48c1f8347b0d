//! Settings: home details and the unit catalog.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::components::data_table::{DataTable, TableRow};
use crate::components::page_error::PageError;
use crate::components::toast::ToastHost;
use crate::form::engine::SchemaForm;
use crate::form::schema::FormSchema;
use crate::net::api;
use crate::net::types::Unit;
use crate::pages::guard_page;
use crate::state::context::{use_home, use_units};
use crate::state::menu::Section;

pub(crate) fn unit_rows(units: &[Unit]) -> Vec<TableRow> {
    units
        .iter()
        .map(|unit| {
            TableRow::new(
                &unit.id,
                vec![
                    unit.title.clone(),
                    unit.abbreviation.clone(),
                    format!("{}", unit.factor),
                ],
            )
        })
        .collect()
}

#[component]
#[allow(clippy::too_many_lines)]
pub fn SettingsPage() -> impl IntoView {
    guard_page(Section::Settings);
    let home = use_home();
    let units = use_units();

    let page_error = RwSignal::new(None::<String>);
    let toast = RwSignal::new(None::<String>);
    let home_schema = RwSignal::new(None::<FormSchema>);
    let unit_schema = RwSignal::new(None::<FormSchema>);
    let show_create_unit = RwSignal::new(false);

    let load_schemas = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_form_schema("home.edit").await {
                Ok(schema) => {
                    home_schema.set(Some(schema));
                    page_error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("form schema fetch failed: {e}");
                    page_error.set(Some(e.user_message()));
                }
            }
        });
    };

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        fetched.set(true);
        load_schemas();
    });

    let reload_units = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::list_units().await {
                Ok(items) => units.update(|state| {
                    state.items = items;
                    state.loading = false;
                }),
                Err(e) => leptos::logging::warn!("unit list fetch failed: {e}"),
            }
        });
    };

    let on_home_saved = Callback::new(move |()| {
        toast.set(Some("Home updated.".to_owned()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_current_home().await {
                Ok(fetched_home) => home.update(|state| state.home = Some(fetched_home)),
                Err(e) => leptos::logging::warn!("home refresh failed: {e}"),
            }
        });
    });

    let on_show_create_unit = move |_| {
        show_create_unit.set(true);
        if unit_schema.get_untracked().is_some() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_form_schema("unit.create").await {
                Ok(schema) => unit_schema.set(Some(schema)),
                Err(e) => {
                    leptos::logging::warn!("form schema fetch failed: {e}");
                    toast.set(Some(e.user_message()));
                }
            }
        });
    };

    let on_unit_created = Callback::new(move |()| {
        show_create_unit.set(false);
        toast.set(Some("Unit created.".to_owned()));
        reload_units();
    });

    let on_delete_unit = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_unit(&id).await {
                Ok(_) => units.update(|state| state.items.retain(|u| u.id != id)),
                Err(e) => {
                    leptos::logging::warn!("unit delete failed: {e}");
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
        <div class="page settings-page">
            <header class="page__header">
                <h1>"Settings"</h1>
            </header>
            <Show
                when=move || page_error.get().is_none()
                fallback=move || {
                    view! {
                        <PageError
                            message=page_error.get().unwrap_or_default()
                            on_retry=Callback::new(move |()| load_schemas())
                        />
                    }
                }
            >
                <section class="settings-page__home">
                    <h2>"Home"</h2>
                    {move || {
                        let schema = home_schema.get()?;
                        let current = home.get().home?;
                        let record = serde_json::to_value(&current).ok()?;
                        Some(view! {
                            <SchemaForm
                                schema=schema
                                record=record
                                action=format!("/api/v1/homes/{}", current.id)
                                submit_label="Save home".to_owned()
                                on_success=on_home_saved
                            />
                        })
                    }}
                </section>
                <section class="settings-page__units">
                    <div class="page__header">
                        <h2>"Units"</h2>
                        <button class="page__action" on:click=on_show_create_unit>
                            "New unit"
                        </button>
                    </div>
                    <Show when=move || show_create_unit.get()>
                        {move || {
                            unit_schema
                                .get()
                                .map(|schema| {
                                    view! {
                                        <div class="page__create-form">
                                            <SchemaForm
                                                schema=schema
                                                action=api::units_endpoint().to_owned()
                                                submit_label="Create unit".to_owned()
                                                on_success=on_unit_created
                                            />
                                        </div>
                                    }
                                })
                        }}
                    </Show>
                    {move || {
                        let rows = unit_rows(&units.get().items);
                        view! {
                            <DataTable
                                headers=vec![
                                    "Title".to_owned(),
                                    "Abbreviation".to_owned(),
                                    "Factor".to_owned(),
                                ]
                                rows=rows
                                on_delete=on_delete_unit
                                empty_label="No units yet.".to_owned()
                            />
                        }
                    }}
                </section>
            </Show>
            <ToastHost message=toast/>
        </div>
    }
}
