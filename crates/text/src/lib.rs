//! Text markup built on `decorate-core`
//!
//! A [`Text`] component draws a string. [`Bold`] and [`Italic`] decorate it by
//! surrounding what it draws with markup, and stack in any order:
//!
//! ```
//! use decorate_core::{decorate, ObjectRef, Value};
//! use decorate_text::{Bold, Italic, Text};
//!
//! let text = decorate::<Bold>(ObjectRef::new(Text::new("Hello World")))
//!     .and_then(decorate::<Italic>)
//!     .unwrap();
//!
//! assert_eq!(text.invoke("draw", vec![]).unwrap(), Value::from("<i><b>Hello World</b></i>"));
//! ```
//!
//! [`CallCounter`] decorates any object, and [`typed`] holds the compile time
//! checked rendition of the same markup.

mod markup;
mod text;

pub mod typed;

pub use markup::{Bold, CallCounter, Italic};
pub use text::Text;
