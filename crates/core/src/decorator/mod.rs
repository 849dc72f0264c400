//! The decorator base.
//!
//! A concrete decorator is a [`Variant`]: a type that names itself, optionally
//! declares the class of component it accepts, and overrides the methods it
//! wants to intercept. [`Decorator`] pairs a variant with the component it
//! wraps, checks that component once at construction and forwards every access
//! the variant does not handle itself.

mod call_through;

pub use call_through::CallThrough;

use crate::error::{Expected, InvalidComponent, ObjectError};
use crate::object::{Decoration, Object, ObjectRef};
use crate::value::Value;
use std::fmt;
use tracing::debug;

/// Static definition of a decorator variant.
///
/// `COMPONENT_CLASS` is the component-type tag. When it is `None` the variant
/// accepts any object (but no primitive value).
///
/// `call` is the variant's method table. The default forwards every call to
/// the wrapped component, an override matches on the names it defines and
/// hands the rest to `parent`:
///
/// ```
/// use decorate_core::{CallThrough, ObjectError, Value, Variant};
///
/// #[derive(Debug, Default)]
/// struct Shout;
///
/// impl Variant for Shout {
///     const NAME: &'static str = "Shout";
///     const COMPONENT_CLASS: Option<&'static str> = Some("Text");
///
///     fn call(&mut self, name: &str, args: Vec<Value>, parent: CallThrough<'_>) -> Result<Value, ObjectError> {
///         match name {
///             "draw" => Ok(Value::from(parent.invoke(name, args)?.to_string().to_uppercase())),
///             _ => parent.invoke(name, args),
///         }
///     }
/// }
/// ```
pub trait Variant: fmt::Debug + 'static {
    const NAME: &'static str;

    const COMPONENT_CLASS: Option<&'static str> = None;

    fn call(&mut self, name: &str, args: Vec<Value>, parent: CallThrough<'_>) -> Result<Value, ObjectError> {
        parent.invoke(name, args)
    }
}

/// A variant bound to the component it wraps.
///
/// The component reference is set once by [`Decorator::new`] and can not be
/// replaced afterwards.
#[derive(Debug)]
pub struct Decorator<V: Variant> {
    variant: V,
    component: ObjectRef,
}

impl<V: Variant> Decorator<V> {
    /// Wraps `component`, failing when it is not acceptable for `V`.
    pub fn new<C: Into<Value>>(variant: V, component: C) -> Result<Self, InvalidComponent> {
        let component = validate(V::NAME, V::COMPONENT_CLASS, component.into())?;
        debug!(variant = V::NAME, component = component.class_name(), "decorator created");
        Ok(Self { variant, component })
    }

    pub fn variant(&self) -> &V {
        &self.variant
    }

    pub fn component(&self) -> &ObjectRef {
        &self.component
    }

    pub fn into_object(self) -> ObjectRef {
        ObjectRef::new(self)
    }

    fn parent(&self) -> CallThrough<'_> {
        CallThrough::new(V::NAME, &self.component)
    }
}

/// Builds a default `V` around `component` and shares it as an object.
pub fn decorate<V: Variant + Default>(component: impl Into<Value>) -> Result<ObjectRef, InvalidComponent> {
    Decorator::new(V::default(), component).map(Decorator::into_object)
}

/// Checks `component` against a decorator's tag.
///
/// With a tag, the component must be an instance of the tagged class or a
/// decorator declaring the very same tag. Without a tag any object is fine.
/// Primitive values are always refused.
pub fn validate(decorator: &'static str, tag: Option<&'static str>, component: Value) -> Result<ObjectRef, InvalidComponent> {
    let expected = Expected::from_tag(tag);

    let object = match component {
        Value::Object(object) => object,
        primitive => {
            debug!(decorator, %expected, given = primitive.type_name(), "component refused");
            return Err(InvalidComponent::new(decorator, expected, primitive.type_name()));
        }
    };

    let accepted = match tag {
        None => true,
        Some(class) => {
            object.is_instance_of(class)
                || object.decoration().is_some_and(|decoration| decoration.component_class == Some(class))
        }
    };

    if accepted {
        Ok(object)
    } else {
        debug!(decorator, %expected, given = object.class_name(), "component refused");
        Err(InvalidComponent::new(decorator, expected, object.class_name()))
    }
}

impl<V: Variant> Object for Decorator<V> {
    fn class_name(&self) -> &'static str {
        V::NAME
    }

    fn decoration(&self) -> Option<Decoration> {
        Some(Decoration { variant: V::NAME, component_class: V::COMPONENT_CLASS, component: self.component.clone() })
    }

    fn get(&self, name: &str) -> Result<Value, ObjectError> {
        self.parent().get(name)
    }

    fn set(&mut self, name: &str, value: Value) -> Result<(), ObjectError> {
        self.parent().set(name, value)
    }

    fn has(&self, name: &str) -> bool {
        self.parent().has(name)
    }

    fn unset(&mut self, name: &str) -> Result<(), ObjectError> {
        self.parent().unset(name)
    }

    fn invoke(&mut self, name: &str, args: Vec<Value>) -> Result<Value, ObjectError> {
        let parent = CallThrough::new(V::NAME, &self.component);
        self.variant.call(name, args, parent)
    }
}
