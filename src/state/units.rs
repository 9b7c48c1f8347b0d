//! Cached unit list, shared by product and recipe editors.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use crate::net::types::Unit;

/// Units are read-many/write-rare: fetched once at shell mount, refreshed
/// after settings edits.
#[derive(Clone, Debug, Default)]
pub struct UnitsState {
    pub items: Vec<Unit>,
    pub loading: bool,
}

impl UnitsState {
    /// Abbreviation for a unit id, falling back to the id itself.
    pub fn abbreviation(&self, unit_id: &str) -> String {
        self.items
            .iter()
            .find(|u| u.id == unit_id)
            .map_or_else(|| unit_id.to_owned(), |u| u.abbreviation.clone())
    }
}
