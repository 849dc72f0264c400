use decorate_core::{arity, Object, ObjectError, Properties, Value};

/// A piece of text that can be drawn, cleared and dumped.
///
/// The text lives in the `text` property, so it can be read and replaced
/// through any decorator wrapping the component.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    properties: Properties,
}

impl Text {
    pub const CLASS: &'static str = "Text";

    pub fn new<S: Into<String>>(text: S) -> Self {
        let mut properties = Properties::new(Self::CLASS);
        properties.set("text", Value::from(text.into()));
        Self { properties }
    }

    pub fn text(&self) -> String {
        self.properties.peek("text").map(ToString::to_string).unwrap_or_default()
    }

    pub fn draw(&self) -> String {
        self.text()
    }

    pub fn clear(&mut self) {
        self.properties.set("text", Value::from(""));
    }

    pub fn dump(&self) -> String {
        format!("{self:#?}")
    }
}

impl Object for Text {
    fn class_name(&self) -> &'static str {
        Self::CLASS
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

    fn invoke(&mut self, name: &str, args: Vec<Value>) -> Result<Value, ObjectError> {
        match name {
            "draw" => {
                arity(Self::CLASS, name, &args, 0)?;
                Ok(Value::from(self.draw()))
            }
            "clear" => {
                arity(Self::CLASS, name, &args, 0)?;
                self.clear();
                Ok(Value::Null)
            }
            "dump" => {
                arity(Self::CLASS, name, &args, 0)?;
                Ok(Value::from(self.dump()))
            }
            _ => Err(ObjectError::undefined_method(Self::CLASS, name)),
        }
    }
}
