use super::*;

#[test]
fn unit_rows_format_factor_without_trailing_zeros() {
    let units = [
        Unit {
            id: "u1".to_owned(),
            title: "Gram".to_owned(),
            abbreviation: "g".to_owned(),
            factor: 1.0,
        },
        Unit {
            id: "u2".to_owned(),
            title: "Kilogram".to_owned(),
            abbreviation: "kg".to_owned(),
            factor: 1000.0,
        },
        Unit {
            id: "u3".to_owned(),
            title: "Teaspoon".to_owned(),
            abbreviation: "tsp".to_owned(),
            factor: 4.2,
        },
    ];
    let rows = unit_rows(&units);
    assert_eq!(rows[0].cells, ["Gram", "g", "1"]);
    assert_eq!(rows[1].cells, ["Kilogram", "kg", "1000"]);
    assert_eq!(rows[2].cells, ["Teaspoon", "tsp", "4.2"]);
}

#[test]
fn unit_rows_keep_list_order() {
    let units = [
        Unit {
            id: "b".to_owned(),
            title: "Litre".to_owned(),
            abbreviation: "l".to_owned(),
            factor: 1.0,
        },
        Unit {
            id: "a".to_owned(),
            title: "Cup".to_owned(),
            abbreviation: "cup".to_owned(),
            factor: 0.25,
        },
    ];
    let rows = unit_rows(&units);
    assert_eq!(rows[0].id, "b");
    assert_eq!(rows[1].id, "a");
}
