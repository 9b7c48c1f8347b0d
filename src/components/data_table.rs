//! Generic data table for entity list screens.
//!
//! DESIGN
//! ======
//! List screens reduce their entities to pre-formatted string cells, so one
//! table component covers products, recipes, ingredients, units, users, and
//! plans without generics leaking into the view layer.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;

/// One row: the entity id (for actions) plus pre-formatted cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new(id: impl Into<String>, cells: Vec<String>) -> Self {
        Self { id: id.into(), cells: cells.into_iter().collect() }
    }
}

/// Format an optional price for a table cell.
pub fn price_cell(price: Option<f64>) -> String {
    price.map_or_else(|| "—".to_owned(), |p| format!("{p:.2}"))
}

/// Format an optional plain value for a table cell.
pub fn optional_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "—".to_owned(),
    }
}

/// A table of pre-formatted rows with optional per-row open/delete actions.
#[component]
pub fn DataTable(
    headers: Vec<String>,
    rows: Vec<TableRow>,
    #[prop(optional)] on_open: Option<Callback<String>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
    #[prop(default = "Nothing here yet.".to_owned())] empty_label: String,
) -> impl IntoView {
    let has_actions = on_open.is_some() || on_delete.is_some();
    let is_empty = rows.is_empty();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {headers
                        .into_iter()
                        .map(|h| view! { <th class="data-table__header">{h}</th> })
                        .collect_view()}
                    <Show when=move || has_actions>
                        <th class="data-table__header data-table__header--actions"></th>
                    </Show>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let row_id = row.id.clone();
                        let delete_id = row.id.clone();
                        view! {
                            <tr class="data-table__row">
                                {row
                                    .cells
                                    .into_iter()
                                    .map(|cell| view! { <td class="data-table__cell">{cell}</td> })
                                    .collect_view()}
                                <Show when=move || has_actions>
                                    <td class="data-table__cell data-table__cell--actions">
                                        {on_open
                                            .map(|cb| {
                                                let id = row_id.clone();
                                                view! {
                                                    <button
                                                        class="data-table__action"
                                                        on:click=move |_| cb.run(id.clone())
                                                    >
                                                        "Open"
                                                    </button>
                                                }
                                            })}
                                        {on_delete
                                            .map(|cb| {
                                                let id = delete_id.clone();
                                                view! {
                                                    <button
                                                        class="data-table__action data-table__action--delete"
                                                        on:click=move |_| cb.run(id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            })}
                                    </td>
                                </Show>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
        <Show when=move || is_empty>
            <p class="data-table__empty">{empty_label.clone()}</p>
        </Show>
    }
}
