use crate::core::ContainerError;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Caller-supplied function mapping a datum to a number.
///
/// Used both as a *quantity* (the value being aggregated) and as a
/// *selection* (a weight multiplier; non-positive results exclude the datum).
/// Clones share the underlying closure.
///
/// A function may carry a name. Names are the only part of a function that
/// can be compared, so merging two containers whose functions are both named
/// differently is rejected.
pub struct UserFcn<D: ?Sized> {
    name: Option<Arc<str>>,
    f: Arc<dyn Fn(&D) -> f64 + Send + Sync>,
}

impl<D: ?Sized> UserFcn<D> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&D) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: None,
            f: Arc::new(f),
        }
    }

    pub fn named<N, F>(name: N, f: F) -> Self
    where
        N: Into<Arc<str>>,
        F: Fn(&D) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            f: Arc::new(f),
        }
    }

    /// Selection that accepts every datum with weight 1.
    pub fn unweighted() -> Self {
        Self::named("unweighted", |_: &D| 1.0)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn call(&self, datum: &D) -> f64 {
        (self.f)(datum)
    }

    /// Function carried by the sum of two containers.
    ///
    /// Fails when both functions are named and the names differ. Otherwise
    /// the named one wins, so the outcome of a chain of merges does not
    /// depend on how it is grouped.
    pub(crate) fn merged(
        &self,
        other: &Self,
        kind: &'static str,
        role: &'static str,
    ) -> Result<Self, ContainerError> {
        match (self.name(), other.name()) {
            (Some(a), Some(b)) if a != b => Err(ContainerError::FunctionMismatch {
                kind,
                role,
                left: a.to_string(),
                right: b.to_string(),
            }),
            (None, Some(_)) => Ok(other.clone()),
            _ => Ok(self.clone()),
        }
    }
}

impl<D: ?Sized> Clone for UserFcn<D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            f: Arc::clone(&self.f),
        }
    }
}

impl<D: ?Sized> Debug for UserFcn<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "UserFcn({name})"),
            None => write!(f, "UserFcn(<anonymous>)"),
        }
    }
}
