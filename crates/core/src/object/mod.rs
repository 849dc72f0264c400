//! The name-based forwarding protocol.
//!
//! Every component and every decorator implements [`Object`], the capability
//! interface through which properties are read, written, tested and removed
//! and through which methods are invoked by name. Objects are shared through
//! [`ObjectRef`], a single-threaded handle: cloning it aliases the same
//! instance, so a write made through one handle is seen through all others.

mod properties;
mod record;

pub use properties::Properties;
pub use record::Record;

use crate::error::ObjectError;
use crate::value::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// An object reachable through the forwarding protocol.
pub trait Object: fmt::Debug {
    /// Name of the runtime class, used for tag checks and error messages.
    fn class_name(&self) -> &'static str;

    /// Whether the object counts as an instance of `class`.
    ///
    /// Defaults to class name equality, override it to model a subtype that
    /// is also accepted wherever its parent class is.
    fn is_instance_of(&self, class: &str) -> bool {
        self.class_name() == class
    }

    /// Present only on decorators.
    fn decoration(&self) -> Option<Decoration> {
        None
    }

    fn get(&self, name: &str) -> Result<Value, ObjectError>;

    fn set(&mut self, name: &str, value: Value) -> Result<(), ObjectError>;

    /// Whether the property exists and is set. Never an error.
    fn has(&self, name: &str) -> bool;

    fn unset(&mut self, name: &str) -> Result<(), ObjectError>;

    fn invoke(&mut self, name: &str, args: Vec<Value>) -> Result<Value, ObjectError>;
}

/// The view a decorator gives of itself: its variant, the tag it declares and
/// the component it wraps.
#[derive(Debug, Clone)]
pub struct Decoration {
    pub variant: &'static str,
    pub component_class: Option<&'static str>,
    pub component: ObjectRef,
}

/// Shared handle to an [`Object`].
///
/// The class name and the decoration are captured when the handle is created,
/// both are fixed for the lifetime of the object and stay readable while an
/// outer call holds the object.
#[derive(Clone)]
pub struct ObjectRef {
    class: &'static str,
    decoration: Option<Rc<Decoration>>,
    inner: Rc<RefCell<dyn Object>>,
}

impl ObjectRef {
    pub fn new<O: Object + 'static>(object: O) -> Self {
        let class = object.class_name();
        let decoration = object.decoration().map(Rc::new);
        Self { class, decoration, inner: Rc::new(RefCell::new(object)) }
    }

    #[inline]
    pub fn class_name(&self) -> &'static str {
        self.class
    }

    /// Falls back to class name equality while an outer call holds the object.
    pub fn is_instance_of(&self, class: &str) -> bool {
        match self.inner.try_borrow() {
            Ok(object) => object.is_instance_of(class),
            Err(_) => {
                trace!(class = self.class, expected = class, "object busy, comparing class names");
                self.class == class
            }
        }
    }

    pub fn decoration(&self) -> Option<Decoration> {
        self.decoration.as_deref().cloned()
    }

    #[inline]
    pub fn is_decorator(&self) -> bool {
        self.decoration().is_some()
    }

    /// Walks every decorator layer down to the real component.
    pub fn innermost(&self) -> ObjectRef {
        let mut current = self.clone();
        while let Some(decoration) = current.decoration() {
            current = decoration.component;
        }
        current
    }

    /// Number of decorator layers above the real component.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.decoration();
        while let Some(decoration) = current {
            depth += 1;
            current = decoration.component.decoration();
        }
        depth
    }

    pub fn get(&self, name: &str) -> Result<Value, ObjectError> {
        let object = self.inner.try_borrow().map_err(|_| ObjectError::busy(self.class))?;
        object.get(name)
    }

    pub fn set(&self, name: &str, value: Value) -> Result<(), ObjectError> {
        let mut object = self.inner.try_borrow_mut().map_err(|_| ObjectError::busy(self.class))?;
        object.set(name, value)
    }

    pub fn has(&self, name: &str) -> bool {
        match self.inner.try_borrow() {
            Ok(object) => object.has(name),
            Err(_) => {
                trace!(class = self.class, property = name, "object busy, reporting property as absent");
                false
            }
        }
    }

    pub fn unset(&self, name: &str) -> Result<(), ObjectError> {
        let mut object = self.inner.try_borrow_mut().map_err(|_| ObjectError::busy(self.class))?;
        object.unset(name)
    }

    pub fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Value, ObjectError> {
        let mut object = self.inner.try_borrow_mut().map_err(|_| ObjectError::busy(self.class))?;
        object.invoke(name, args)
    }

    /// Whether both handles point at the same instance.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&this.inner), Rc::as_ptr(&other.inner))
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for ObjectRef {}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(object) => fmt::Debug::fmt(&*object, f),
            Err(_) => write!(f, "{} {{ .. }}", self.class),
        }
    }
}

/// Rejects a call whose argument count differs from what `method` expects.
pub fn arity(class: &'static str, method: &str, args: &[Value], expected: usize) -> Result<(), ObjectError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ObjectError::argument_count(class, method, expected, args.len()))
    }
}
