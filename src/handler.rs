//! Handler abstraction.
//!
//! A handler is an opaque callable producing some output `R`. Static and
//! not-found handlers receive an empty parameter slice; dynamic handlers
//! receive one value per wildcard segment, in template order. The router does
//! not check that a handler expects that many values.

use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Maximum number of wildcard values stored inline before spilling to the heap
pub const MAX_INLINE_PARAMS: usize = 8;

/// Positional values extracted from a dynamic match
pub type ParamVec = SmallVec<[String; MAX_INLINE_PARAMS]>;

/// Callable registered against a route
pub trait Handler<R>: Send + Sync {
    /// Invoke the handler with the positional values of the match
    fn call(&self, params: &[String]) -> R;
}

impl<R, F> Handler<R> for F
where
    F: Fn(&[String]) -> R + Send + Sync,
{
    #[inline]
    fn call(&self, params: &[String]) -> R {
        self(params)
    }
}

/// Shared, type-erased handler as stored in the route table
pub struct BoxedHandler<R>(Arc<dyn Handler<R>>);

impl<R> BoxedHandler<R> {
    pub fn new<H>(handler: H) -> Self
    where
        H: Handler<R> + 'static,
    {
        Self(Arc::new(handler))
    }

    #[inline]
    pub fn call(&self, params: &[String]) -> R {
        self.0.call(params)
    }
}

impl<R> Clone for BoxedHandler<R> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<R> fmt::Debug for BoxedHandler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedHandler")
    }
}
