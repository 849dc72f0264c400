//! Pairs of layers.
//!
//! [`LayerExt::and_then`] and [`LayerExt::compose`] build these. A stack of
//! variant layers is a nest of composers, applied innermost first, so the
//! first variant named ends up closest to the component.

use crate::layer::{IdentityLayer, Layer, LayerExt};

/// Two layers applied in order, `inner` first
#[derive(Clone, Copy, Debug)]
pub struct LayerComposer<L1, L2> {
    inner: L1,
    outer: L2,
}

impl<L1, L2> LayerComposer<L1, L2> {
    pub fn new(inner: L1, outer: L2) -> Self {
        Self { inner, outer }
    }
}

impl Default for LayerComposer<IdentityLayer, IdentityLayer> {
    fn default() -> Self {
        Self::new(IdentityLayer, IdentityLayer)
    }
}

impl<L1, L2> LayerExt for LayerComposer<L1, L2> {}

impl<C, L1, L2> Layer<C> for LayerComposer<L1, L2>
where
    L1: Layer<C>,
    L2: Layer<L1::Out>,
{
    type Out = L2::Out;

    fn wrap(&self, component: C) -> Self::Out {
        let wrapped = self.inner.wrap(component);
        self.outer.wrap(wrapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::variant;
    use crate::{ObjectRef, Record, Variant};

    #[derive(Debug, Default)]
    struct Audit;

    impl Variant for Audit {
        const NAME: &'static str = "Audit";
    }

    #[derive(Debug, Default)]
    struct Seal;

    impl Variant for Seal {
        const NAME: &'static str = "Seal";
    }

    fn variants_outermost_first(decorated: &ObjectRef) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut current = decorated.decoration();
        while let Some(decoration) = current {
            names.push(decoration.variant);
            current = decoration.component.decoration();
        }
        names
    }

    #[test]
    fn inner_layer_sits_next_to_the_component() {
        let invoice = ObjectRef::new(Record::new("Invoice"));

        let sealed = LayerComposer::new(variant::<Audit>(), variant::<Seal>()).wrap(invoice.clone()).unwrap();
        assert_eq!(variants_outermost_first(&sealed), ["Seal", "Audit"]);

        let audited = LayerComposer::new(variant::<Seal>(), variant::<Audit>()).wrap(invoice.clone()).unwrap();
        assert_eq!(variants_outermost_first(&audited), ["Audit", "Seal"]);

        assert_eq!(sealed.innermost(), invoice);
        assert_eq!(audited.innermost(), invoice);
    }

    #[test]
    fn default_composer_changes_nothing() {
        let invoice = ObjectRef::new(Record::new("Invoice"));
        let wrapped = LayerComposer::default().wrap(invoice.clone());
        assert!(ObjectRef::ptr_eq(&wrapped, &invoice));
    }
}
