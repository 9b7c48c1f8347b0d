use super::*;

fn ingredient(id: &str, title: &str) -> Ingredient {
    Ingredient {
        id: id.to_owned(),
        title: title.to_owned(),
        product_id: None,
    }
}

fn sample_recipe() -> Recipe {
    let mut recipe = Recipe {
        id: "r1".to_owned(),
        title: "Stew".to_owned(),
        description: None,
        portions: Some(4),
        image_url: None,
        groups: Vec::new(),
        steps: Vec::new(),
    };
    add_group(&mut recipe, "Base");
    add_group(&mut recipe, "Sauce");
    add_item(&mut recipe, 0, &ingredient("i1", "Onion"), 2.0, None);
    add_item(&mut recipe, 0, &ingredient("i2", "Carrot"), 3.0, Some("u1".to_owned()));
    add_item(&mut recipe, 1, &ingredient("i3", "Tomato"), 400.0, Some("u2".to_owned()));
    add_step(&mut recipe, "Chop everything.");
    add_step(&mut recipe, "Simmer.");
    recipe
}

// ============================================================================
// Groups and items
// ============================================================================

#[test]
fn add_group_appends_with_fresh_id() {
    let mut recipe = sample_recipe();
    add_group(&mut recipe, "Garnish");
    assert_eq!(recipe.groups.len(), 3);
    assert_eq!(recipe.groups[2].title, "Garnish");
    assert!(!recipe.groups[2].id.is_empty());
    assert_ne!(recipe.groups[2].id, recipe.groups[1].id);
}

#[test]
fn add_item_copies_ingredient_title() {
    let recipe = sample_recipe();
    assert_eq!(recipe.groups[0].items[1].title, "Carrot");
    assert_eq!(recipe.groups[0].items[1].ingredient_id, "i2");
    assert_eq!(recipe.groups[0].items[1].unit_id.as_deref(), Some("u1"));
}

#[test]
fn add_item_to_missing_group_is_a_no_op() {
    let mut recipe = sample_recipe();
    add_item(&mut recipe, 9, &ingredient("i9", "Salt"), 1.0, None);
    assert_eq!(selectable_items(&recipe).len(), 3);
}

#[test]
fn selectable_items_follow_group_order() {
    let recipe = sample_recipe();
    let titles: Vec<String> = selectable_items(&recipe).into_iter().map(|(_, t)| t).collect();
    assert_eq!(titles, ["Onion", "Carrot", "Tomato"]);
}

// ============================================================================
// Step references and the pruning invariant
// ============================================================================

#[test]
fn toggle_adds_known_item_and_removes_on_second_call() {
    let mut recipe = sample_recipe();
    let onion = recipe.groups[0].items[0].id.clone();
    assert!(toggle_step_item(&mut recipe, 0, &onion));
    assert_eq!(recipe.steps[0].item_ids, [onion.clone()]);
    assert!(toggle_step_item(&mut recipe, 0, &onion));
    assert!(recipe.steps[0].item_ids.is_empty());
}

#[test]
fn toggle_refuses_unknown_item() {
    let mut recipe = sample_recipe();
    assert!(!toggle_step_item(&mut recipe, 0, "ghost"));
    assert!(recipe.steps[0].item_ids.is_empty());
}

#[test]
fn toggle_on_missing_step_fails() {
    let mut recipe = sample_recipe();
    let onion = recipe.groups[0].items[0].id.clone();
    assert!(!toggle_step_item(&mut recipe, 5, &onion));
}

#[test]
fn removing_a_group_prunes_its_step_references() {
    let mut recipe = sample_recipe();
    let onion = recipe.groups[0].items[0].id.clone();
    let tomato = recipe.groups[1].items[0].id.clone();
    toggle_step_item(&mut recipe, 0, &onion);
    toggle_step_item(&mut recipe, 0, &tomato);
    remove_group(&mut recipe, 0);
    assert_eq!(recipe.steps[0].item_ids, [tomato]);
}

#[test]
fn removing_an_item_prunes_only_its_references() {
    let mut recipe = sample_recipe();
    let onion = recipe.groups[0].items[0].id.clone();
    let carrot = recipe.groups[0].items[1].id.clone();
    toggle_step_item(&mut recipe, 1, &onion);
    toggle_step_item(&mut recipe, 1, &carrot);
    remove_item(&mut recipe, 0, 0);
    assert_eq!(recipe.steps[1].item_ids, [carrot]);
}

#[test]
fn remove_step_drops_the_step() {
    let mut recipe = sample_recipe();
    remove_step(&mut recipe, 0);
    assert_eq!(recipe.steps.len(), 1);
    assert_eq!(recipe.steps[0].text, "Simmer.");
    remove_step(&mut recipe, 7);
    assert_eq!(recipe.steps.len(), 1);
}

// ============================================================================
// Combining item rows
// ============================================================================

#[test]
fn combine_items_adds_amounts_and_drops_the_dragged_row() {
    let mut recipe = sample_recipe();
    add_item(&mut recipe, 0, &ingredient("i1", "Onion"), 1.5, None);
    // Row 2 is a second Onion line with the same (missing) unit as row 0.
    assert!(combine_items(&mut recipe, 0, 2, 0));
    assert_eq!(recipe.groups[0].items.len(), 2);
    assert!((recipe.groups[0].items[0].amount - 3.5).abs() < 1e-9);
    assert_eq!(recipe.groups[0].items[0].title, "Onion");
}

#[test]
fn combine_items_adjusts_target_after_earlier_removal() {
    let mut recipe = sample_recipe();
    add_item(&mut recipe, 0, &ingredient("i2", "Carrot"), 1.0, Some("u1".to_owned()));
    // Dragging row 1 onto row 2: both Carrot in u1, target shifts left.
    assert!(combine_items(&mut recipe, 0, 1, 2));
    assert_eq!(recipe.groups[0].items.len(), 2);
    assert!((recipe.groups[0].items[1].amount - 4.0).abs() < 1e-9);
}

#[test]
fn combine_items_refuses_mismatched_rows() {
    let mut recipe = sample_recipe();
    // Onion onto Carrot: different ingredients.
    assert!(!combine_items(&mut recipe, 0, 0, 1));
    assert_eq!(recipe.groups[0].items.len(), 2);
    // Self-drop and out-of-bounds are no-ops too.
    assert!(!combine_items(&mut recipe, 0, 0, 0));
    assert!(!combine_items(&mut recipe, 0, 5, 0));
    assert!(!combine_items(&mut recipe, 9, 0, 1));
}

#[test]
fn combine_items_prunes_references_to_the_removed_row() {
    let mut recipe = sample_recipe();
    add_item(&mut recipe, 0, &ingredient("i1", "Onion"), 1.0, None);
    let dragged = recipe.groups[0].items[2].id.clone();
    let target = recipe.groups[0].items[0].id.clone();
    toggle_step_item(&mut recipe, 0, &dragged);
    toggle_step_item(&mut recipe, 0, &target);
    assert!(combine_items(&mut recipe, 0, 2, 0));
    assert_eq!(recipe.steps[0].item_ids, [target]);
}

// ============================================================================
// Reordering
// ============================================================================

#[test]
fn move_group_swaps_order() {
    let mut recipe = sample_recipe();
    assert!(move_group(&mut recipe, 0, Some(1)));
    assert_eq!(recipe.groups[0].title, "Sauce");
    assert_eq!(recipe.groups[1].title, "Base");
}

#[test]
fn move_group_without_target_keeps_order() {
    let mut recipe = sample_recipe();
    assert!(!move_group(&mut recipe, 0, None));
    assert_eq!(recipe.groups[0].title, "Base");
}

#[test]
fn move_step_reorders() {
    let mut recipe = sample_recipe();
    assert!(move_step(&mut recipe, 1, Some(0)));
    assert_eq!(recipe.steps[0].text, "Simmer.");
}

#[test]
fn move_item_within_a_group() {
    let mut recipe = sample_recipe();
    assert!(move_item(&mut recipe, 0, 0, 1, 0));
    assert_eq!(recipe.groups[0].items[0].title, "Carrot");
    assert_eq!(recipe.groups[0].items[1].title, "Onion");
}

#[test]
fn move_item_across_groups_keeps_step_references() {
    let mut recipe = sample_recipe();
    let onion = recipe.groups[0].items[0].id.clone();
    toggle_step_item(&mut recipe, 0, &onion);
    assert!(move_item(&mut recipe, 0, 1, 0, 0));
    assert_eq!(recipe.groups[0].items.len(), 1);
    assert_eq!(recipe.groups[1].items[0].title, "Onion");
    // Still in a group, so the step reference survives.
    assert_eq!(recipe.steps[0].item_ids, [onion]);
}

#[test]
fn move_item_with_bad_group_fails() {
    let mut recipe = sample_recipe();
    assert!(!move_item(&mut recipe, 0, 9, 0, 0));
    assert!(!move_item(&mut recipe, 9, 0, 0, 0));
}
