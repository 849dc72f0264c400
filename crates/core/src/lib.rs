//! Decorate any object
//!
//! This crate wraps an arbitrary component in decorators that forward every
//! property access and method call to it, except for the methods a decorator
//! overrides. Decorators can wrap other decorators, so independent behaviors
//! stack around one component without touching its type.
//!
//! # Parts
//!
//! - [`Object`] and [`ObjectRef`]: the name-based forwarding protocol
//!   (`get`, `set`, `has`, `unset`, `invoke`) and the shared handle to it
//! - [`Variant`] and [`Decorator`]: the decorator base, with construction time
//!   validation against the variant's component class
//! - [`layer`]: statically typed decoration and stacking
//!
//! # Example
//!
//! ```
//! use decorate_core::{decorate, CallThrough, ObjectError, ObjectRef, Record, Value, Variant};
//!
//! #[derive(Debug, Default)]
//! struct Audited {
//!     writes: usize,
//! }
//!
//! impl Variant for Audited {
//!     const NAME: &'static str = "Audited";
//!
//!     fn call(&mut self, name: &str, args: Vec<Value>, parent: CallThrough<'_>) -> Result<Value, ObjectError> {
//!         match name {
//!             "writes" => Ok(Value::from(self.writes)),
//!             _ => {
//!                 self.writes += 1;
//!                 parent.invoke(name, args)
//!             }
//!         }
//!     }
//! }
//!
//! let invoice = ObjectRef::new(Record::new("Invoice").with("total", 40));
//! let audited = decorate::<Audited>(invoice.clone()).unwrap();
//!
//! // properties are read from and written to the wrapped component
//! audited.set("total", Value::from(42)).unwrap();
//! assert_eq!(invoice.get("total").unwrap(), Value::from(42));
//!
//! // methods the variant defines win over forwarding
//! assert_eq!(audited.invoke("writes", vec![]).unwrap(), Value::from(0));
//!
//! // everything else reaches the component, errors included
//! assert!(audited.invoke("pay", vec![]).is_err());
//! assert_eq!(audited.invoke("writes", vec![]).unwrap(), Value::from(1));
//!
//! // primitives can not be decorated
//! assert!(decorate::<Audited>(Value::from("Invoice")).is_err());
//! ```

mod decorator;
mod error;
mod object;
mod value;

pub mod layer;

pub use decorator::{decorate, validate, CallThrough, Decorator, Variant};
pub use error::{Expected, InvalidComponent, ObjectError};
pub use object::{arity, Decoration, Object, ObjectRef, Properties, Record};
pub use value::Value;
