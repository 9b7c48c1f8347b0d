//! Recipe editor: metadata form, ingredient groups, steps.
//!
//! DESIGN
//! ======
//! All edits mutate a local `Recipe` copy through the pure helpers below and
//! persist in one PUT when the user saves. Steps may only reference
//! ingredient items from groups already defined; removing a group or item
//! prunes the references so the invariant holds through every edit path.
//! Reordering runs on the shared splice helpers; drag start fires a haptic
//! tick that never influences the result.

#[cfg(test)]
#[path = "recipe_detail_test.rs"]
mod recipe_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::page_error::PageError;
use crate::components::toast::ToastHost;
use crate::net::types::{Ingredient, IngredientGroup, IngredientItem, Recipe, Step};
use crate::pages::guard_page;
use crate::state::context::use_units;
use crate::state::menu::Section;
use crate::util::reorder::{self, haptic_tick};

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn add_group(recipe: &mut Recipe, title: &str) {
    recipe.groups.push(IngredientGroup {
        id: new_id(),
        title: title.to_owned(),
        items: Vec::new(),
    });
}

pub(crate) fn remove_group(recipe: &mut Recipe, group_idx: usize) {
    if group_idx >= recipe.groups.len() {
        return;
    }
    recipe.groups.remove(group_idx);
    prune_step_refs(recipe);
}

pub(crate) fn add_item(
    recipe: &mut Recipe,
    group_idx: usize,
    ingredient: &Ingredient,
    amount: f64,
    unit_id: Option<String>,
) {
    let Some(group) = recipe.groups.get_mut(group_idx) else {
        return;
    };
    group.items.push(IngredientItem {
        id: new_id(),
        ingredient_id: ingredient.id.clone(),
        title: ingredient.title.clone(),
        amount,
        unit_id,
    });
}

pub(crate) fn remove_item(recipe: &mut Recipe, group_idx: usize, item_idx: usize) {
    let Some(group) = recipe.groups.get_mut(group_idx) else {
        return;
    };
    if item_idx >= group.items.len() {
        return;
    }
    group.items.remove(item_idx);
    prune_step_refs(recipe);
}

pub(crate) fn add_step(recipe: &mut Recipe, text: &str) {
    recipe.steps.push(Step {
        id: new_id(),
        text: text.to_owned(),
        item_ids: Vec::new(),
    });
}

pub(crate) fn remove_step(recipe: &mut Recipe, step_idx: usize) {
    if step_idx < recipe.steps.len() {
        recipe.steps.remove(step_idx);
    }
}

/// Ingredient items a step may reference: every item of every defined group,
/// in group order.
pub(crate) fn selectable_items(recipe: &Recipe) -> Vec<(String, String)> {
    recipe
        .groups
        .iter()
        .flat_map(|g| g.items.iter().map(|i| (i.id.clone(), i.title.clone())))
        .collect()
}

/// Toggle an item reference on a step. Adding is refused when the item does
/// not exist in any group; removing is always allowed.
pub(crate) fn toggle_step_item(recipe: &mut Recipe, step_idx: usize, item_id: &str) -> bool {
    let known = recipe
        .groups
        .iter()
        .any(|g| g.items.iter().any(|i| i.id == item_id));
    let Some(step) = recipe.steps.get_mut(step_idx) else {
        return false;
    };
    if let Some(pos) = step.item_ids.iter().position(|id| id == item_id) {
        step.item_ids.remove(pos);
        return true;
    }
    if !known {
        return false;
    }
    step.item_ids.push(item_id.to_owned());
    true
}

/// Drop step references to items that no longer exist in any group.
pub(crate) fn prune_step_refs(recipe: &mut Recipe) {
    let known: Vec<String> = recipe
        .groups
        .iter()
        .flat_map(|g| g.items.iter().map(|i| i.id.clone()))
        .collect();
    for step in &mut recipe.steps {
        step.item_ids.retain(|id| known.contains(id));
    }
}

pub(crate) fn move_group(recipe: &mut Recipe, src: usize, dst: Option<usize>) -> bool {
    reorder::reorder(&mut recipe.groups, src, dst)
}

pub(crate) fn move_step(recipe: &mut Recipe, src: usize, dst: Option<usize>) -> bool {
    reorder::reorder(&mut recipe.steps, src, dst)
}

/// Move an item within a group or across groups.
pub(crate) fn move_item(
    recipe: &mut Recipe,
    from_group: usize,
    to_group: usize,
    src: usize,
    dst: usize,
) -> bool {
    let group_count = recipe.groups.len();
    if from_group >= group_count || to_group >= group_count {
        return false;
    }
    if from_group == to_group {
        return reorder::reorder(&mut recipe.groups[from_group].items, src, Some(dst));
    }
    let (from, to) = if from_group < to_group {
        let (left, right) = recipe.groups.split_at_mut(to_group);
        (&mut left[from_group], &mut right[0])
    } else {
        let (left, right) = recipe.groups.split_at_mut(from_group);
        (&mut right[0], &mut left[to_group])
    };
    reorder::move_between(&mut from.items, &mut to.items, src, dst)
}

/// Merge the dragged item into the target row when both reference the same
/// ingredient in the same unit: amounts add and the dragged row disappears.
/// Returns `false` (caller falls back to a plain move) when the rows are
/// not combinable.
pub(crate) fn combine_items(
    recipe: &mut Recipe,
    group_idx: usize,
    src: usize,
    dst: usize,
) -> bool {
    let Some(group) = recipe.groups.get_mut(group_idx) else {
        return false;
    };
    if src == dst || src >= group.items.len() || dst >= group.items.len() {
        return false;
    }
    if group.items[src].ingredient_id != group.items[dst].ingredient_id
        || group.items[src].unit_id != group.items[dst].unit_id
    {
        return false;
    }
    let Some(removed) = reorder::remove_combined(&mut group.items, src) else {
        return false;
    };
    let dst = if src < dst { dst - 1 } else { dst };
    group.items[dst].amount += removed.amount;
    prune_step_refs(recipe);
    true
}

/// What is currently being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragSource {
    Group(usize),
    Step(usize),
    Item { group: usize, index: usize },
}

#[component]
#[allow(clippy::too_many_lines)]
pub fn RecipeDetailPage() -> impl IntoView {
    guard_page(Section::Recipes);
    let params = use_params_map();
    let units = use_units();

    let recipe = RwSignal::new(None::<Recipe>);
    let ingredients = RwSignal::new(Vec::<Ingredient>::new());
    let page_error = RwSignal::new(None::<String>);
    let toast = RwSignal::new(None::<String>);
    let drag = RwSignal::new(None::<DragSource>);

    let new_group_title = RwSignal::new(String::new());
    let new_step_text = RwSignal::new(String::new());
    let item_ingredient = RwSignal::new(String::new());
    let item_amount = RwSignal::new(String::new());
    let item_unit = RwSignal::new(String::new());

    let recipe_id = move || params.read().get("id").unwrap_or_default();

    let load = move || {
        let id = recipe_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            match api::fetch_recipe(&id).await {
                Ok(fetched) => {
                    recipe.set(Some(fetched));
                    page_error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("recipe fetch failed: {e}");
                    page_error.set(Some(e.user_message()));
                }
            }
            match api::list_ingredients().await {
                Ok(items) => ingredients.set(items),
                Err(e) => leptos::logging::warn!("ingredient list fetch failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        fetched.set(true);
        load();
    });

    let edit = move |f: &dyn Fn(&mut Recipe)| {
        recipe.update(|r| {
            if let Some(r) = r.as_mut() {
                f(r);
            }
        });
    };

    let on_add_group = move |_| {
        let title = new_group_title.get_untracked().trim().to_owned();
        if title.is_empty() {
            return;
        }
        edit(&|r| add_group(r, &title));
        new_group_title.set(String::new());
    };

    let on_add_step = move |_| {
        let text = new_step_text.get_untracked().trim().to_owned();
        if text.is_empty() {
            return;
        }
        edit(&|r| add_step(r, &text));
        new_step_text.set(String::new());
    };

    let on_add_item = move |group_idx: usize| {
        let ingredient_id = item_ingredient.get_untracked();
        let Ok(amount) = item_amount.get_untracked().trim().parse::<f64>() else {
            toast.set(Some("Enter a numeric amount.".to_owned()));
            return;
        };
        let unit_id = {
            let value = item_unit.get_untracked();
            if value.is_empty() { None } else { Some(value) }
        };
        let Some(ingredient) = ingredients
            .get_untracked()
            .into_iter()
            .find(|i| i.id == ingredient_id)
        else {
            toast.set(Some("Pick an ingredient first.".to_owned()));
            return;
        };
        edit(&|r| add_item(r, group_idx, &ingredient, amount, unit_id.clone()));
        item_amount.set(String::new());
    };

    let on_save = move |_| {
        let Some(current) = recipe.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            match api::update_recipe(&current).await {
                Ok(saved) => {
                    recipe.set(Some(saved));
                    toast.set(Some("Recipe saved.".to_owned()));
                }
                Err(e) => {
                    leptos::logging::warn!("recipe save failed: {e}");
                    toast.set(Some(e.user_message()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current;
        }
    };

    let on_drag_start = move |source: DragSource| {
        haptic_tick();
        drag.set(Some(source));
    };

    let on_drop_group = move |dst: usize| {
        if let Some(DragSource::Group(src)) = drag.get_untracked() {
            edit(&|r| {
                move_group(r, src, Some(dst));
            });
        }
        drag.set(None);
    };

    let on_drop_step = move |dst: usize| {
        if let Some(DragSource::Step(src)) = drag.get_untracked() {
            edit(&|r| {
                move_step(r, src, Some(dst));
            });
        }
        drag.set(None);
    };

    let on_drop_item = move |to_group: usize, dst: usize| {
        if let Some(DragSource::Item { group, index }) = drag.get_untracked() {
            edit(&|r| {
                // Same-group drops onto a matching ingredient row combine;
                // everything else is a plain move.
                if group == to_group && combine_items(r, group, index, dst) {
                    return;
                }
                move_item(r, group, to_group, index, dst);
            });
        }
        drag.set(None);
    };

    view! {
        <div class="page recipe-detail-page">
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
                <Show
                    when=move || recipe.get().is_some()
                    fallback=|| view! { <p class="page__loading">"Loading..."</p> }
                >
                    <header class="page__header">
                        <h1>{move || recipe.get().map(|r| r.title).unwrap_or_default()}</h1>
                        <button class="page__action" on:click=on_save>
                            "Save recipe"
                        </button>
                    </header>

                    <section class="recipe-groups">
                        <h2>"Ingredient groups"</h2>
                        {move || {
                            let groups = recipe.get().map(|r| r.groups).unwrap_or_default();
                            let unit_state = units.get();
                            groups
                                .iter()
                                .enumerate()
                                .map(|(group_idx, group)| {
                                    let group_title = group.title.clone();
                                    let items = group.items.clone();
                                    view! {
                                        <div
                                            class="recipe-group"
                                            draggable="true"
                                            on:dragstart=move |_| on_drag_start(DragSource::Group(group_idx))
                                            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                                            on:drop=move |_| on_drop_group(group_idx)
                                        >
                                            <div class="recipe-group__header">
                                                <span class="recipe-group__title">{group_title}</span>
                                                <button
                                                    class="recipe-group__remove"
                                                    on:click=move |_| edit(&|r| remove_group(r, group_idx))
                                                >
                                                    "✕"
                                                </button>
                                            </div>
                                            <ul class="recipe-group__items">
                                                {items
                                                    .iter()
                                                    .enumerate()
                                                    .map(|(item_idx, item)| {
                                                        let label = format!(
                                                            "{} {} {}",
                                                            item.amount,
                                                            item.unit_id
                                                                .as_deref()
                                                                .map_or_else(String::new, |id| unit_state.abbreviation(id)),
                                                            item.title,
                                                        );
                                                        view! {
                                                            <li
                                                                class="recipe-item"
                                                                draggable="true"
                                                                on:dragstart=move |ev: leptos::ev::DragEvent| {
                                                                    ev.stop_propagation();
                                                                    on_drag_start(DragSource::Item {
                                                                        group: group_idx,
                                                                        index: item_idx,
                                                                    });
                                                                }
                                                                on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                                                                on:drop=move |ev: leptos::ev::DragEvent| {
                                                                    ev.stop_propagation();
                                                                    on_drop_item(group_idx, item_idx);
                                                                }
                                                            >
                                                                <span class="recipe-item__label">{label}</span>
                                                                <button
                                                                    class="recipe-item__remove"
                                                                    on:click=move |_| edit(&|r| remove_item(r, group_idx, item_idx))
                                                                >
                                                                    "✕"
                                                                </button>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                            <button
                                                class="recipe-group__add-item"
                                                on:click=move |_| on_add_item(group_idx)
                                            >
                                                "Add item"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <div class="recipe-groups__composer">
                            <select
                                class="recipe-groups__ingredient"
                                on:change=move |ev| item_ingredient.set(event_target_value(&ev))
                            >
                                <option value="">"Ingredient..."</option>
                                {move || {
                                    ingredients
                                        .get()
                                        .into_iter()
                                        .map(|i| view! { <option value=i.id.clone()>{i.title}</option> })
                                        .collect_view()
                                }}
                            </select>
                            <input
                                class="recipe-groups__amount"
                                type="number"
                                placeholder="Amount"
                                prop:value=move || item_amount.get()
                                on:input=move |ev| item_amount.set(event_target_value(&ev))
                            />
                            <select
                                class="recipe-groups__unit"
                                on:change=move |ev| item_unit.set(event_target_value(&ev))
                            >
                                <option value="">"Unit..."</option>
                                {move || {
                                    units
                                        .get()
                                        .items
                                        .into_iter()
                                        .map(|u| view! { <option value=u.id.clone()>{u.abbreviation}</option> })
                                        .collect_view()
                                }}
                            </select>
                            <input
                                class="recipe-groups__new-group"
                                type="text"
                                placeholder="New group title"
                                prop:value=move || new_group_title.get()
                                on:input=move |ev| new_group_title.set(event_target_value(&ev))
                            />
                            <button class="recipe-groups__add" on:click=on_add_group>
                                "Add group"
                            </button>
                        </div>
                    </section>

                    <section class="recipe-steps">
                        <h2>"Steps"</h2>
                        <ol class="recipe-steps__list">
                            {move || {
                                let current = recipe.get();
                                let selectable = current.as_ref().map(selectable_items).unwrap_or_default();
                                current
                                    .map(|r| r.steps)
                                    .unwrap_or_default()
                                    .iter()
                                    .enumerate()
                                    .map(|(step_idx, step)| {
                                        let text = step.text.clone();
                                        let item_ids = step.item_ids.clone();
                                        let selectable = selectable.clone();
                                        view! {
                                            <li
                                                class="recipe-step"
                                                draggable="true"
                                                on:dragstart=move |_| on_drag_start(DragSource::Step(step_idx))
                                                on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                                                on:drop=move |_| on_drop_step(step_idx)
                                            >
                                                <p class="recipe-step__text">{text}</p>
                                                <div class="recipe-step__items">
                                                    {selectable
                                                        .into_iter()
                                                        .map(|(item_id, item_title)| {
                                                            let checked = item_ids.iter().any(|id| *id == item_id);
                                                            let toggle_id = item_id.clone();
                                                            view! {
                                                                <label class="recipe-step__item">
                                                                    <input
                                                                        type="checkbox"
                                                                        prop:checked=checked
                                                                        on:change=move |_| {
                                                                            edit(&|r| {
                                                                                toggle_step_item(r, step_idx, &toggle_id);
                                                                            });
                                                                        }
                                                                    />
                                                                    {item_title}
                                                                </label>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                                <button
                                                    class="recipe-step__remove"
                                                    on:click=move |_| edit(&|r| remove_step(r, step_idx))
                                                >
                                                    "✕"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ol>
                        <div class="recipe-steps__composer">
                            <textarea
                                class="recipe-steps__input"
                                placeholder="Describe the next step..."
                                prop:value=move || new_step_text.get()
                                on:input=move |ev| new_step_text.set(event_target_value(&ev))
                            ></textarea>
                            <button class="recipe-steps__add" on:click=on_add_step>
                                "Add step"
                            </button>
                        </div>
                    </section>
                </Show>
            </Show>
            <ToastHost message=toast/>
        </div>
    }
}
