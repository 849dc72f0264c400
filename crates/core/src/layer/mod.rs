//! Statically typed decoration.
//!
//! A [`Layer`] turns a component into a decorated component. Layers compose
//! with [`LayerExt::and_then`] into a stack that is described once and applied
//! to as many components as needed. [`VariantLayer`] lifts a dynamic decorator
//! variant into a layer.

mod identity;
mod layer_composer;
mod layer_fn;
mod variant_layer;

pub use identity::IdentityLayer;
pub use layer_composer::LayerComposer;
pub use layer_fn::{layer_fn, LayerFn};
pub use variant_layer::{variant, VariantLayer};

/// A layer that wraps a component into another
pub trait Layer<C> {
    /// the decorated component
    type Out;

    /// wrap the component
    fn wrap(&self, component: C) -> Self::Out;
}

/// Stacking for layers.
///
/// `C` is only fixed when the stack is applied, so the methods live on a
/// separate trait each layer type opts into.
pub trait LayerExt: Sized {
    /// `layer` wraps the output of `self`, so it ends up outermost
    fn and_then<L>(self, layer: L) -> LayerComposer<Self, L> {
        LayerComposer::new(self, layer)
    }

    /// `layer` wraps first, `self` wraps its output
    fn compose<L>(self, layer: L) -> LayerComposer<L, Self> {
        LayerComposer::new(layer, self)
    }
}
