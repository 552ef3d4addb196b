//! Field extraction from sources and attribute discovery on targets.

use std::collections::BTreeMap;

use crate::accessor::getter_attribute;
use crate::{FieldFilter, Reflect, Value};

/// Values read from a source, keyed by attribute name.
///
/// Built fresh for every `fill`; nothing is cached between sessions.
#[derive(Debug, Clone, Default)]
pub struct ExtractedFields {
    fields: BTreeMap<String, Value>,
}

impl ExtractedFields {
    /// Borrows the value extracted for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns `true` if a value was extracted for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of extracted fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Extracted names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn insert(&mut self, name: String, value: Value) {
        self.fields.insert(name, value);
    }
}

/// Reads every accessor-exposed value from `source`.
///
/// Attribute bags are copied attribute by attribute. Any other source is
/// read through its accessors in declaration order; when two accessors
/// expose the same attribute (`get_active` and `is_active`, say) the one
/// declared last wins. Accessors that cannot be called through a shared
/// borrow are skipped.
///
/// # Examples
///
/// ```rust
/// use object_mapper::{AttributeBag, Value, extract};
///
/// let bag = AttributeBag::new().with("id", Value::new(7_u64));
/// let fields = extract(&bag);
/// assert_eq!(fields.get("id").and_then(Value::downcast_ref::<u64>), Some(&7));
/// ```
#[must_use]
pub fn extract<S: Reflect>(source: &S) -> ExtractedFields {
    let mut extracted = ExtractedFields::default();
    if let Some(bag) = source.attribute_bag() {
        for (name, value) in bag.iter() {
            extracted.insert(name.to_owned(), value.clone());
        }
        return extracted;
    }

    for method in S::methods() {
        let Some(name) = getter_attribute(&method) else {
            continue;
        };
        if let Some(value) = method.invoke(source) {
            extracted.insert(name, value);
        } else {
            tracing::debug!(
                method = method.name(),
                receiver = ?method.receiver(),
                "skipping accessor that cannot be called through a shared borrow"
            );
        }
    }
    extracted
}

/// Attribute names exposed by `T`'s accessors that `filter` lets through.
///
/// Names follow declaration order and appear once each.
#[must_use]
pub fn allowed_attributes<T: Reflect>(filter: &FieldFilter) -> Vec<String> {
    let unfiltered = filter.is_empty();
    let mut allowed: Vec<String> = Vec::new();
    for name in T::methods().iter().filter_map(getter_attribute) {
        if (!unfiltered && filter.is_excluded(&name)) || allowed.contains(&name) {
            continue;
        }
        allowed.push(name);
    }
    allowed
}
