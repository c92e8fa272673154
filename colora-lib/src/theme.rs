use crate::error::{Error, Result};
use std::collections::HashMap;

/// Property name => value for one selector, e.g. "color" => "#00193a".
pub type Declarations = HashMap<String, String>;

/// A named stylesheet: every registered selector and the declarations bound to it.
///
/// Declarations are keyed by selector first, then by property, so binding a
/// property on one selector never touches another selector.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    name: String,
    locator: String,
    /// Registered selector => its declarations (possibly empty).
    rules: HashMap<String, Declarations>,
}

impl Theme {
    pub fn new(name: impl Into<String>, locator: impl Into<String>) -> Self {
        Theme {
            name: name.into(),
            locator: locator.into(),
            rules: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path (or identifier) the theme source comes from.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Register a selector. Returns `false` if it was already known, in which
    /// case its declarations are left untouched.
    pub fn add_selector(&mut self, selector: &str) -> bool {
        if self.rules.contains_key(selector) {
            return false;
        }
        self.rules.insert(selector.to_string(), Declarations::new());
        true
    }

    pub fn has_selector(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    pub fn selector_count(&self) -> usize {
        self.rules.len()
    }

    /// Total number of (selector, property) bindings.
    pub fn declaration_count(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    /// Registered selectors in lexical order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names.into_iter()
    }

    /// Bind `property: value` on `selector`, replacing any earlier value.
    ///
    /// Returns the replaced value, or [`Error::UnknownSelector`] if the
    /// selector was never registered with [`Theme::add_selector`].
    pub fn set_declaration(
        &mut self,
        selector: &str,
        property: &str,
        value: &str,
    ) -> Result<Option<String>> {
        let declarations = self
            .rules
            .get_mut(selector)
            .ok_or_else(|| Error::unknown_selector(selector))?;
        Ok(declarations.insert(property.to_string(), value.to_string()))
    }

    /// Value of `property` on `selector`, or `None` if no such binding exists.
    pub fn get_declaration(&self, property: &str, selector: &str) -> Option<&str> {
        self.rules
            .get(selector)
            .and_then(|declarations| declarations.get(property))
            .map(String::as_str)
    }

    /// All declarations of `selector`.
    ///
    /// `None` means the selector was never registered; a registered selector
    /// without declarations yields an empty map.
    pub fn get_declarations_for_selector(&self, selector: &str) -> Option<&Declarations> {
        self.rules.get(selector)
    }

    /// Every `(selector, value)` binding of one property, in selector order.
    pub fn selectors_with_property<'a>(
        &'a self,
        property: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.selectors().filter_map(move |selector| {
            self.get_declaration(property, selector)
                .map(|value| (selector, value))
        })
    }
}
