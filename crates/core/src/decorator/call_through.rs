use crate::error::ObjectError;
use crate::object::ObjectRef;
use crate::value::Value;
use tracing::trace;

/// The base decorator behavior handed to a variant's method table.
///
/// Every operation goes to the wrapped component unchanged, which is how an
/// overriding method runs the original behavior next to its own.
#[derive(Debug, Clone, Copy)]
pub struct CallThrough<'a> {
    variant: &'static str,
    component: &'a ObjectRef,
}

impl<'a> CallThrough<'a> {
    pub(crate) fn new(variant: &'static str, component: &'a ObjectRef) -> Self {
        Self { variant, component }
    }

    /// The wrapped component.
    pub fn component(&self) -> &'a ObjectRef {
        self.component
    }

    pub fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Value, ObjectError> {
        trace!(variant = self.variant, component = self.component.class_name(), method = name, "forward call");
        self.component.invoke(name, args)
    }

    pub fn get(&self, name: &str) -> Result<Value, ObjectError> {
        trace!(variant = self.variant, component = self.component.class_name(), property = name, "forward get");
        self.component.get(name)
    }

    pub fn set(&self, name: &str, value: Value) -> Result<(), ObjectError> {
        trace!(variant = self.variant, component = self.component.class_name(), property = name, "forward set");
        self.component.set(name, value)
    }

    pub fn has(&self, name: &str) -> bool {
        trace!(variant = self.variant, component = self.component.class_name(), property = name, "forward has");
        self.component.has(name)
    }

    pub fn unset(&self, name: &str) -> Result<(), ObjectError> {
        trace!(variant = self.variant, component = self.component.class_name(), property = name, "forward unset");
        self.component.unset(name)
    }
}
