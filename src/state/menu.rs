//! Side-navigation state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Sections of the admin, in navigation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Plans,
    Products,
    Recipes,
    Ingredients,
    Users,
    Settings,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Plans,
        Section::Products,
        Section::Recipes,
        Section::Ingredients,
        Section::Users,
        Section::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Plans => "Plans",
            Section::Products => "Products",
            Section::Recipes => "Recipes",
            Section::Ingredients => "Ingredients",
            Section::Users => "Users",
            Section::Settings => "Settings",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Section::Plans => "/",
            Section::Products => "/products",
            Section::Recipes => "/recipes",
            Section::Ingredients => "/ingredients",
            Section::Users => "/users",
            Section::Settings => "/settings",
        }
    }
}

/// Menu open/closed flag plus the active section highlight.
#[derive(Clone, Debug)]
pub struct MenuState {
    pub open: bool,
    pub active: Section,
}

impl Default for MenuState {
    fn default() -> Self {
        Self { open: true, active: Section::Plans }
    }
}
