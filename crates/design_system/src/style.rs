//! Layered inline-style composition.
//!
//! Primitives build their inline `style` attribute from a base layer, a size
//! layer, and a variant layer. [`StyleMap::merge`] applies a later layer on top
//! of an earlier one: a property set in both keeps the later value and the
//! position it first appeared at.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered set of CSS declarations.
pub struct StyleMap {
    declarations: Vec<(&'static str, String)>,
}

impl StyleMap {
    /// Creates an empty style layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing any earlier value in place.
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.insert(property, value.into());
        self
    }

    /// Sets `property` only when `condition` holds.
    pub fn set_if(self, condition: bool, property: &'static str, value: impl Into<String>) -> Self {
        if condition {
            self.set(property, value)
        } else {
            self
        }
    }

    /// Layers `other` on top of `self`. Later layers win.
    pub fn merge(mut self, other: StyleMap) -> Self {
        for (property, value) in other.declarations {
            self.insert(property, value);
        }
        self
    }

    /// Returns the current value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns `true` when no declaration is set.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serializes the map into an inline `style` attribute value.
    pub fn to_inline(&self) -> String {
        self.to_string()
    }

    fn insert(&mut self, property: &'static str, value: String) {
        match self
            .declarations
            .iter_mut()
            .find(|(name, _)| *name == property)
        {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (property, value) in &self.declarations {
            write!(f, "{property}:{value};")?;
        }
        Ok(())
    }
}

impl FromIterator<(&'static str, String)> for StyleMap {
    fn from_iter<T: IntoIterator<Item = (&'static str, String)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |map, (property, value)| map.set(property, value))
    }
}

pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
}

pub(crate) fn percent(value: f64) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn later_layers_override_in_place() {
        let base = StyleMap::new()
            .set("display", "flex")
            .set("color", "black")
            .set("cursor", "pointer");
        let variant = StyleMap::new().set("color", "white").set("border", "none");

        let merged = base.merge(variant);

        assert_eq!(merged.get("color"), Some("white"));
        assert_eq!(
            merged.to_inline(),
            "display:flex;color:white;cursor:pointer;border:none;"
        );
    }

    #[test]
    fn set_if_skips_false_conditions() {
        let style = StyleMap::new()
            .set_if(false, "width", "100%")
            .set_if(true, "width", "auto");
        assert_eq!(style.get("width"), Some("auto"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn collects_from_pairs_with_last_write_winning() {
        let style: StyleMap = [("top", "0".to_string()), ("top", "4px".to_string())]
            .into_iter()
            .collect();
        assert_eq!(style.to_inline(), "top:4px;");
    }

    #[test]
    fn unit_helpers_keep_fractional_values() {
        assert_eq!(px(-8.0), "-8px");
        assert_eq!(percent(12.5), "12.5%");
        assert!(StyleMap::new().is_empty());
    }
}
