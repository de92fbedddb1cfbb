//! Theme preference value and its resolution rules.
//!
//! Both the persisted value and the root attribute resolve through
//! [`Theme::resolve`]: only `dark` and `light` are meaningful, everything
//! else (absent, `auto`, or garbage) is [`Theme::Auto`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// A named visual variant of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    Light,
    /// Follow the system preference. Styling for this value is left to
    /// stylesheet rules keyed on the attribute.
    #[default]
    Auto,
}

impl Theme {
    /// Resolve a stored or attribute value. Matching is exact and
    /// case-sensitive.
    #[must_use]
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => Self::Auto,
        }
    }

    /// Next theme in the fixed cycle `dark → light → auto → dark`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Auto,
            Self::Auto => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Auto => "auto",
        }
    }

    /// Whether the toggle control should read as pressed.
    #[must_use]
    pub fn is_pressed(self) -> bool {
        self == Self::Dark
    }

    /// `aria-pressed` attribute value for this theme.
    #[must_use]
    pub fn pressed_attr(self) -> &'static str {
        if self.is_pressed() { "true" } else { "false" }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
