//! Color-scheme preference persisted across sessions.
//!
//! This is the only local state the admin keeps in the browser: everything
//! else lives server-side. The stored value wins over the OS preference.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "larder_color_scheme";

/// The two supported color schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Storage representation, also used as the `<html>` class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized falls back to light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Resolve the active scheme: stored preference first, then the OS
/// `prefers-color-scheme` media query, then light.
pub fn detect() -> ColorScheme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ColorScheme::Light;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                return ColorScheme::from_stored(&stored);
            }
        }
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { ColorScheme::Dark } else { ColorScheme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ColorScheme::Light
    }
}

/// Set the scheme class on `<html>` so the stylesheet can theme globally.
pub fn apply(scheme: ColorScheme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = el.class_list();
            match scheme {
                ColorScheme::Dark => {
                    let _ = classes.add_1("dark");
                }
                ColorScheme::Light => {
                    let _ = classes.remove_1("dark");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scheme;
    }
}

/// Flip the scheme, apply it, and persist the choice.
pub fn toggle(current: ColorScheme) -> ColorScheme {
    let next = current.flipped();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.as_str());
            }
        }
    }
    next
}
