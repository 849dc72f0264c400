//! The neutral layer.
//!
//! Stacks built from a runtime list start from [`IdentityLayer`], and an
//! optional decoration can be swapped for it without changing the stack type
//! around it.

use crate::layer::{Layer, LayerExt};

/// A layer that leaves the component untouched
#[derive(Default, Clone, Copy, Debug)]
pub struct IdentityLayer;

impl LayerExt for IdentityLayer {}

impl<C> Layer<C> for IdentityLayer {
    type Out = C;

    #[inline(always)]
    fn wrap(&self, component: C) -> Self::Out {
        component
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ObjectRef, Record};

    #[test]
    fn hands_back_the_same_instance() {
        let invoice = ObjectRef::new(Record::new("Invoice"));

        let wrapped = IdentityLayer.and_then(IdentityLayer).wrap(invoice.clone());

        assert!(ObjectRef::ptr_eq(&wrapped, &invoice));
        assert_eq!(wrapped.depth(), 0);
        assert!(!wrapped.is_decorator());
    }
}
