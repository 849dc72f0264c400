use crate::error::ObjectError;
use crate::object::{Object, Properties};
use crate::value::Value;

/// A plain object: named, with properties and no methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    properties: Properties,
}

impl Record {
    pub fn new(class: &'static str) -> Self {
        Self { properties: Properties::new(class) }
    }

    #[must_use]
    pub fn with<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        self.properties.set(name, value.into());
        self
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

impl Object for Record {
    fn class_name(&self) -> &'static str {
        self.properties.class()
    }

    fn get(&self, name: &str) -> Result<Value, ObjectError> {
        self.properties.get(name)
    }

    fn set(&mut self, name: &str, value: Value) -> Result<(), ObjectError> {
        self.properties.set(name, value);
        Ok(())
    }

    fn has(&self, name: &str) -> bool {
        self.properties.has(name)
    }

    fn unset(&mut self, name: &str) -> Result<(), ObjectError> {
        self.properties.unset(name);
        Ok(())
    }

    fn invoke(&mut self, name: &str, _args: Vec<Value>) -> Result<Value, ObjectError> {
        Err(ObjectError::undefined_method(self.class_name(), name))
    }
}
