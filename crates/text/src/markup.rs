//! Decorator variants for [`Text`].

use crate::text::Text;
use decorate_core::{CallThrough, ObjectError, Value, Variant};
use tracing::trace;

fn surround(open: &str, inner: &Value, close: &str) -> Value {
    Value::from(format!("{open}{inner}{close}"))
}

/// Draws the wrapped text in `<b>` tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bold;

impl Variant for Bold {
    const NAME: &'static str = "Bold";
    const COMPONENT_CLASS: Option<&'static str> = Some(Text::CLASS);

    fn call(&mut self, name: &str, args: Vec<Value>, parent: CallThrough<'_>) -> Result<Value, ObjectError> {
        match name {
            "draw" => Ok(surround("<b>", &parent.invoke(name, args)?, "</b>")),
            _ => parent.invoke(name, args),
        }
    }
}

/// Draws the wrapped text in `<i>` tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct Italic;

impl Variant for Italic {
    const NAME: &'static str = "Italic";
    const COMPONENT_CLASS: Option<&'static str> = Some(Text::CLASS);

    fn call(&mut self, name: &str, args: Vec<Value>, parent: CallThrough<'_>) -> Result<Value, ObjectError> {
        match name {
            "draw" => Ok(surround("<i>", &parent.invoke(name, args)?, "</i>")),
            _ => parent.invoke(name, args),
        }
    }
}

/// Counts the calls forwarded to any object.
///
/// Defines `call_count()` itself, which is not forwarded and not counted.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallCounter {
    calls: usize,
}

impl CallCounter {
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Variant for CallCounter {
    const NAME: &'static str = "CallCounter";

    fn call(&mut self, name: &str, args: Vec<Value>, parent: CallThrough<'_>) -> Result<Value, ObjectError> {
        if name == "call_count" {
            return Ok(Value::from(self.calls));
        }
        self.calls += 1;
        trace!(method = name, calls = self.calls, "counted call");
        parent.invoke(name, args)
    }
}
