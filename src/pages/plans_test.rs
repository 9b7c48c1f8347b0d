use super::*;

fn plan(id: &str, date: &str, title: &str) -> Plan {
    Plan {
        id: id.to_owned(),
        home_id: "h1".to_owned(),
        recipe_id: format!("r-{id}"),
        recipe_title: title.to_owned(),
        date: date.to_owned(),
    }
}

#[test]
fn plans_by_date_groups_and_sorts_dates_ascending() {
    let plans = [
        plan("a", "2026-03-15", "Stew"),
        plan("b", "2026-03-14", "Curry"),
        plan("c", "2026-03-15", "Bread"),
    ];
    let grouped = plans_by_date(&plans);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].0, "2026-03-14");
    assert_eq!(grouped[1].0, "2026-03-15");
    assert_eq!(grouped[1].1.len(), 2);
}

#[test]
fn plans_by_date_sorts_entries_by_recipe_title() {
    let plans = [
        plan("a", "2026-03-15", "Stew"),
        plan("c", "2026-03-15", "Bread"),
    ];
    let grouped = plans_by_date(&plans);
    let titles: Vec<&str> = grouped[0].1.iter().map(|p| p.recipe_title.as_str()).collect();
    assert_eq!(titles, ["Bread", "Stew"]);
}

#[test]
fn plans_by_date_handles_empty_input() {
    assert!(plans_by_date(&[]).is_empty());
}
