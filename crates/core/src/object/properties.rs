use crate::error::ObjectError;
use crate::value::Value;
use std::collections::BTreeMap;

/// Property storage for dynamic objects.
///
/// Reading a missing property fails with [`ObjectError::UndefinedProperty`],
/// writing creates or replaces, `has` is true only for present non-null
/// values and removing a missing property does nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Properties {
    class: &'static str,
    values: BTreeMap<String, Value>,
}

impl Properties {
    pub fn new(class: &'static str) -> Self {
        Self { class, values: BTreeMap::new() }
    }

    pub fn class(&self) -> &'static str {
        self.class
    }

    pub fn get(&self, name: &str) -> Result<Value, ObjectError> {
        self.values.get(name).cloned().ok_or_else(|| ObjectError::undefined_property(self.class, name))
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_owned(), value);
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(Value::is_set)
    }

    pub fn unset(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Borrows a property without cloning it.
    pub fn peek(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_property_is_undefined() {
        let properties = Properties::new("Point");

        let error = properties.get("x").unwrap_err();
        assert!(matches!(error, ObjectError::UndefinedProperty { class: "Point", ref name } if name == "x"));
    }

    #[test]
    fn has_ignores_null_values() {
        let mut properties = Properties::new("Point");
        properties.set("x", Value::from(1));
        properties.set("y", Value::Null);

        assert!(properties.has("x"));
        assert!(!properties.has("y"));
        assert!(!properties.has("z"));
        assert_eq!(properties.get("y").unwrap(), Value::Null);
    }

    #[test]
    fn unset_is_silent_for_missing_names() {
        let mut properties = Properties::new("Point");
        properties.set("x", Value::from(1));

        properties.unset("x");
        properties.unset("x");

        assert!(properties.is_empty());
        assert!(properties.get("x").is_err());
    }
}
