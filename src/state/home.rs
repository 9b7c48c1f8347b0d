//! Current-home state: the household whose data the admin is editing.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use crate::net::types::Home;

/// The resolved home for this session, if any.
#[derive(Clone, Debug, Default)]
pub struct HomeState {
    pub home: Option<Home>,
    pub loading: bool,
    pub error: Option<String>,
}

impl HomeState {
    /// Id of the active home, used to scope plan queries.
    pub fn home_id(&self) -> Option<&str> {
        self.home.as_ref().map(|h| h.id.as_str())
    }
}
