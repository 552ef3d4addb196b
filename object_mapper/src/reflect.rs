//! Runtime introspection capabilities consumed by the mapper.
//!
//! [`Reflect`] exposes a type's public methods and [`Mappable`] grants
//! write access to its declared fields. Both are normally generated: use
//! `#[object_mapper::reflect]` on an inherent `impl` block and
//! `#[derive(object_mapper::Mappable)]` on the struct.

use std::any::Any;
use std::fmt;

use crate::{AttributeBag, Value};

/// How a method receives `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Receiver {
    /// Associated function without a `self` parameter.
    None,
    /// `&self`.
    Ref,
    /// `&mut self`.
    RefMut,
    /// `self` by value, including typed receivers such as `self: Box<Self>`.
    Value,
}

/// Descriptor of a single public method on `T`.
pub struct Method<T> {
    name: &'static str,
    receiver: Receiver,
    required_params: usize,
    invoke: Option<fn(&T) -> Value>,
}

impl<T> Method<T> {
    /// Describes a method that the mapper cannot call.
    #[must_use]
    pub const fn new(name: &'static str, receiver: Receiver, required_params: usize) -> Self {
        Self {
            name,
            receiver,
            required_params,
            invoke: None,
        }
    }

    /// Attaches the function used to call the method through a shared borrow.
    #[must_use]
    pub const fn with_invoke(mut self, invoke: fn(&T) -> Value) -> Self {
        self.invoke = Some(invoke);
        self
    }

    /// Method name as written in the source.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// How the method takes `self`.
    #[must_use]
    pub const fn receiver(&self) -> Receiver {
        self.receiver
    }

    /// Returns `true` for associated functions without a receiver.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self.receiver, Receiver::None)
    }

    /// Number of parameters besides the receiver.
    #[must_use]
    pub const fn required_params(&self) -> usize {
        self.required_params
    }

    /// Returns `true` when [`Method::invoke`] can produce a value.
    #[must_use]
    pub const fn is_invocable(&self) -> bool {
        self.invoke.is_some()
    }

    /// Calls the method on `object`.
    ///
    /// Returns `None` for methods that need arguments, a mutable or owned
    /// receiver, or otherwise cannot be called generically.
    #[must_use]
    pub fn invoke(&self, object: &T) -> Option<Value> {
        self.invoke.map(|call| call(object))
    }
}

impl<T> Clone for Method<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Method<T> {}

impl<T> fmt::Debug for Method<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("receiver", &self.receiver)
            .field("required_params", &self.required_params)
            .field("invocable", &self.is_invocable())
            .finish_non_exhaustive()
    }
}

/// Types whose public methods can be enumerated at run time.
///
/// # Examples
///
/// ```rust
/// use object_mapper::{Receiver, Reflect, reflect};
///
/// struct Badge {
///     label: String,
/// }
///
/// #[reflect]
/// impl Badge {
///     pub fn get_label(&self) -> &str {
///         &self.label
///     }
///
///     pub fn blank() -> Self {
///         Self { label: String::new() }
///     }
/// }
///
/// let methods = Badge::methods();
/// assert_eq!(methods.len(), 2);
/// assert_eq!(methods[0].name(), "get_label");
/// assert_eq!(methods[1].receiver(), Receiver::None);
/// ```
pub trait Reflect: Any {
    /// Public methods in declaration order.
    ///
    /// The list is rebuilt on every call.
    fn methods() -> Vec<Method<Self>>
    where
        Self: Sized;

    /// Returns the attribute bag when `self` is a plain data holder.
    ///
    /// Plain data holders are read attribute by attribute instead of through
    /// accessor methods.
    fn attribute_bag(&self) -> Option<&AttributeBag> {
        None
    }
}

/// Privileged write access to a type's declared fields.
///
/// Implementations assign straight into the named field, so a field can be
/// populated even when the type offers no public setter for it.
pub trait Mappable: Reflect {
    /// The type's own declared field names in declaration order.
    fn declared_fields() -> &'static [&'static str]
    where
        Self: Sized;

    /// Assigns `value` to `field`.
    ///
    /// # Errors
    ///
    /// Returns the value unchanged when `field` is not declared or the value
    /// is not of the field's type.
    fn write_field(&mut self, field: &str, value: Value) -> Result<(), Value>;
}
