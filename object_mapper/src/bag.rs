//! Plain attribute bags used as ad-hoc sources.

use crate::{Mappable, Method, Reflect, Value};

/// A plain data holder: named attributes without accessor methods.
///
/// When a bag is used as a source the mapper copies its attributes directly
/// by name instead of deriving field names from accessors. Attributes keep
/// their insertion order; inserting an existing name replaces its value in
/// place.
///
/// # Examples
///
/// ```rust
/// use object_mapper::{AttributeBag, Value};
///
/// let bag = AttributeBag::new()
///     .with("id", Value::new(7_u64))
///     .with("name", Value::new(String::from("Ann")));
/// assert_eq!(bag.field_names().collect::<Vec<_>>(), ["id", "name"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttributeBag {
    attributes: Vec<(String, Value)>,
}

impl AttributeBag {
    /// Creates an empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    /// Sets `name` to `value` and returns the bag.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let key = name.into();
        if let Some(slot) = self.slot_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.attributes.push((key, value));
        None
    }

    /// Borrows the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Removes and returns the value stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let index = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(index).1)
    }

    /// Returns `true` if an attribute called `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of attributes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if the bag holds no attributes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attribute names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(key, _)| key.as_str())
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.attributes
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

impl Reflect for AttributeBag {
    fn methods() -> Vec<Method<Self>> {
        Vec::new()
    }

    fn attribute_bag(&self) -> Option<&AttributeBag> {
        Some(self)
    }
}

/// Dynamic attributes are not declared fields, so a bag used as a target
/// receives nothing.
impl Mappable for AttributeBag {
    fn declared_fields() -> &'static [&'static str] {
        &[]
    }

    fn write_field(&mut self, _field: &str, value: Value) -> Result<(), Value> {
        Err(value)
    }
}
