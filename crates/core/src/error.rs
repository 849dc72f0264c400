use std::fmt;
use thiserror::Error;

/// What a decorator variant accepts as its wrapped component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// an instance of the tagged class, or a decorator declaring the same tag
    Class(&'static str),
    /// wildcard mode: any object, but never a primitive value
    AnyObject,
}

impl Expected {
    pub fn from_tag(tag: Option<&'static str>) -> Self {
        tag.map_or(Self::AnyObject, Self::Class)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, "an instance of {class} or according decorator"),
            Self::AnyObject => f.write_str("an object"),
        }
    }
}

/// Raised when a decorator is constructed around an incompatible component.
///
/// This is the only error the decorator layer originates itself, everything
/// else is an [`ObjectError`] coming from the wrapped component.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("component passed to {decorator} must be {expected}, {given} given")]
pub struct InvalidComponent {
    decorator: &'static str,
    expected: Expected,
    given: String,
}

impl InvalidComponent {
    pub fn new<S: ToString>(decorator: &'static str, expected: Expected, given: S) -> Self {
        Self { decorator, expected, given: given.to_string() }
    }

    /// name of the decorator variant that refused the component
    pub fn decorator(&self) -> &'static str {
        self.decorator
    }

    pub fn expected(&self) -> Expected {
        self.expected
    }

    /// runtime kind of the rejected value, a class name for objects
    pub fn given(&self) -> &str {
        &self.given
    }
}

/// Errors produced by components during property access or method calls.
///
/// Decorators never translate these, a forwarded access fails with exactly the
/// error the component would have produced if called directly.
#[derive(Error, Debug)]
pub enum ObjectError {
    #[error("undefined property {class}::${name}")]
    UndefinedProperty { class: &'static str, name: String },

    #[error("call to undefined method {class}::{name}()")]
    UndefinedMethod { class: &'static str, name: String },

    #[error("{class}::{method}() expects {expected} argument(s), {given} given")]
    ArgumentCount { class: &'static str, method: String, expected: usize, given: usize },

    #[error("invalid argument for {class}::{method}(): {reason}")]
    InvalidArgument { class: &'static str, method: String, reason: String },

    #[error("{class} is already in use by an outer call")]
    Busy { class: &'static str },

    #[error("{source}")]
    Other {
        #[from]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ObjectError {
    pub fn undefined_property<S: ToString>(class: &'static str, name: S) -> Self {
        Self::UndefinedProperty { class, name: name.to_string() }
    }

    pub fn undefined_method<S: ToString>(class: &'static str, name: S) -> Self {
        Self::UndefinedMethod { class, name: name.to_string() }
    }

    pub fn argument_count<S: ToString>(class: &'static str, method: S, expected: usize, given: usize) -> Self {
        Self::ArgumentCount { class, method: method.to_string(), expected, given }
    }

    pub fn invalid_argument<S: ToString, R: ToString>(class: &'static str, method: S, reason: R) -> Self {
        Self::InvalidArgument { class, method: method.to_string(), reason: reason.to_string() }
    }

    pub fn busy(class: &'static str) -> Self {
        Self::Busy { class }
    }

    pub fn other<E: Into<Box<dyn std::error::Error + Send + Sync>>>(e: E) -> Self {
        Self::Other { source: e.into() }
    }
}
