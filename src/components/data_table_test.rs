use super::*;

#[test]
fn table_row_new_collects_cells() {
    let row = TableRow::new("p1", vec!["Milk".to_owned(), "1.29".to_owned()]);
    assert_eq!(row.id, "p1");
    assert_eq!(row.cells, vec!["Milk", "1.29"]);
}

#[test]
fn price_cell_formats_two_decimals() {
    assert_eq!(price_cell(Some(1.2)), "1.20");
    assert_eq!(price_cell(Some(0.0)), "0.00");
}

#[test]
fn price_cell_dashes_missing_price() {
    assert_eq!(price_cell(None), "—");
}

#[test]
fn optional_cell_dashes_empty_and_missing() {
    assert_eq!(optional_cell(Some("Rewe")), "Rewe");
    assert_eq!(optional_cell(Some("")), "—");
    assert_eq!(optional_cell(None), "—");
}
