//! Closures as layers.
//!
//! Useful at the edges of a stack: turning a concrete component into an
//! [`ObjectRef`](crate::ObjectRef) before the variant layers run, or mapping
//! a decorated result afterwards.

use crate::layer::{Layer, LayerExt};

/// A layer that wraps by calling `f`.
#[derive(Copy, Clone, Debug)]
pub struct LayerFn<F> {
    f: F,
}

/// Builds a [`LayerFn`] from a closure taking the component.
pub fn layer_fn<C, Out, F>(f: F) -> LayerFn<F>
where
    F: Fn(C) -> Out,
{
    LayerFn { f }
}

impl<F> LayerExt for LayerFn<F> {}

impl<C, Out, F> Layer<C> for LayerFn<F>
where
    F: Fn(C) -> Out,
{
    type Out = Out;

    fn wrap(&self, component: C) -> Self::Out {
        (self.f)(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::variant;
    use crate::{InvalidComponent, ObjectRef, Record, Value, Variant};

    #[derive(Debug, Default)]
    struct Ledger;

    impl Variant for Ledger {
        const NAME: &'static str = "Ledger";
        const COMPONENT_CLASS: Option<&'static str> = Some("Invoice");
    }

    #[test]
    fn lifts_a_concrete_component_into_a_variant_stack() {
        let stack = layer_fn(ObjectRef::new::<Record>).and_then(variant::<Ledger>()).and_then(variant::<Ledger>());

        let ledger = stack.wrap(Record::new("Invoice").with("total", 120)).unwrap();

        assert_eq!(ledger.depth(), 2);
        assert_eq!(ledger.innermost().class_name(), "Invoice");
        assert_eq!(ledger.get("total").unwrap(), Value::from(120));
    }

    #[test]
    fn maps_the_decorated_result() {
        let stack = variant::<Ledger>().and_then(layer_fn(|decorated: Result<ObjectRef, InvalidComponent>| match decorated {
            Ok(ledger) => ledger.class_name().to_owned(),
            Err(error) => error.given().to_owned(),
        }));

        assert_eq!(stack.wrap(ObjectRef::new(Record::new("Invoice"))), "Ledger");
        assert_eq!(stack.wrap(ObjectRef::new(Record::new("Receipt"))), "Receipt");
    }
}
