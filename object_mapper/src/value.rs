//! Type-erased values carried between source and target.

use std::any::{Any, type_name};
use std::fmt;
use std::rc::Rc;

/// An opaque value extracted from a source object.
///
/// Values are reference counted so extracted fields can be cloned into a
/// target without knowing their concrete type. The mapper performs no
/// coercion: a value only lands in a field whose type matches exactly.
#[derive(Clone)]
pub struct Value {
    inner: Rc<dyn Any>,
    type_name: &'static str,
}

impl Value {
    /// Wraps `value`, remembering its type name for diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_mapper::Value;
    ///
    /// let value = Value::new(String::from("Ann"));
    /// assert!(value.is::<String>());
    /// assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("Ann"));
    /// ```
    #[must_use]
    pub fn new<T: Any + Clone>(value: T) -> Self {
        Self {
            inner: Rc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the wrapped type as reported by [`std::any::type_name`].
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the wrapped value is a `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrows the wrapped value as a `T`, if it is one.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Takes the wrapped value out as a `T`.
    ///
    /// The value is cloned only when other handles to it are still alive.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when the wrapped value is not a `T`.
    pub fn downcast<T: Any + Clone>(self) -> Result<T, Self> {
        let Self { inner, type_name } = self;
        match inner.downcast::<T>() {
            Ok(typed) => Ok(Rc::unwrap_or_clone(typed)),
            Err(erased) => Err(Self {
                inner: erased,
                type_name,
            }),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").field(&self.type_name).finish()
    }
}
