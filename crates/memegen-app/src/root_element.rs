//! Root element class list
//!
//! Stand-in for the document root: a set of marker classes that the
//! presentation layer reads when choosing how to draw. The only marker in
//! use today is [`DARK_CLASS`].

use std::collections::BTreeSet;

/// Marker present while the dark theme is active
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    classes: BTreeSet<String>,
}

impl RootElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add or remove a class. Returns `true` if the list changed.
    pub fn set_class(&mut self, class: &str, present: bool) -> bool {
        if present {
            self.classes.insert(class.to_string())
        } else {
            self.classes.remove(class)
        }
    }

    pub fn is_dark(&self) -> bool {
        self.has_class(DARK_CLASS)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}
