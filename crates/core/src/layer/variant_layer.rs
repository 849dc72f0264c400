use crate::decorator::{decorate, Variant};
use crate::error::InvalidComponent;
use crate::layer::{Layer, LayerExt};
use crate::object::ObjectRef;
use crate::value::Value;
use std::fmt;
use std::marker::PhantomData;

/// Decorates with a default `V` on every `wrap`.
///
/// Stacked variant layers stop at the first component that is refused.
pub struct VariantLayer<V> {
    _variant: PhantomData<fn() -> V>,
}

pub fn variant<V: Variant + Default>() -> VariantLayer<V> {
    VariantLayer { _variant: PhantomData }
}

impl<V> Clone for VariantLayer<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for VariantLayer<V> {}

impl<V: Variant> fmt::Debug for VariantLayer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VariantLayer").field(&V::NAME).finish()
    }
}

impl<V> LayerExt for VariantLayer<V> {}

impl<V: Variant + Default> Layer<Value> for VariantLayer<V> {
    type Out = Result<ObjectRef, InvalidComponent>;

    fn wrap(&self, component: Value) -> Self::Out {
        decorate::<V>(component)
    }
}

impl<V: Variant + Default> Layer<ObjectRef> for VariantLayer<V> {
    type Out = Result<ObjectRef, InvalidComponent>;

    fn wrap(&self, component: ObjectRef) -> Self::Out {
        decorate::<V>(component)
    }
}

impl<V: Variant + Default> Layer<Result<ObjectRef, InvalidComponent>> for VariantLayer<V> {
    type Out = Result<ObjectRef, InvalidComponent>;

    fn wrap(&self, component: Result<ObjectRef, InvalidComponent>) -> Self::Out {
        component.and_then(decorate::<V>)
    }
}
