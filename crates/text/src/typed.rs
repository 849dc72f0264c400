//! Statically typed markup.
//!
//! The same decorations as [`Bold`](crate::Bold) and [`Italic`](crate::Italic), checked by the compiler instead
//! of at construction: a wrapper only accepts a component implementing
//! [`Drawable`], overrides `draw` and forwards the rest of the interface.

use crate::text::Text;
use decorate_core::layer::{Layer, LayerExt};

pub trait Drawable {
    fn draw(&self) -> String;

    fn clear(&mut self);

    fn dump(&self) -> String;
}

impl Drawable for Text {
    fn draw(&self) -> String {
        Text::draw(self)
    }

    fn clear(&mut self) {
        Text::clear(self);
    }

    fn dump(&self) -> String {
        Text::dump(self)
    }
}

macro_rules! markup_wrapper {
    ($wrapper:ident, $layer:ident, $open:literal, $close:literal) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $wrapper<C> {
            component: C,
        }

        impl<C: Drawable> $wrapper<C> {
            pub fn new(component: C) -> Self {
                Self { component }
            }

            pub fn component(&self) -> &C {
                &self.component
            }

            pub fn into_inner(self) -> C {
                self.component
            }
        }

        impl<C: Drawable> Drawable for $wrapper<C> {
            fn draw(&self) -> String {
                format!(concat!($open, "{}", $close), self.component.draw())
            }

            fn clear(&mut self) {
                self.component.clear();
            }

            fn dump(&self) -> String {
                self.component.dump()
            }
        }

        #[derive(Debug, Default, Clone, Copy)]
        pub struct $layer;

        impl LayerExt for $layer {}

        impl<C: Drawable> Layer<C> for $layer {
            type Out = $wrapper<C>;

            fn wrap(&self, component: C) -> Self::Out {
                $wrapper::new(component)
            }
        }
    };
}

markup_wrapper!(Bolded, BoldLayer, "<b>", "</b>");
markup_wrapper!(Italicized, ItalicLayer, "<i>", "</i>");
