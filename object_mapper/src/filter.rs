//! Allow-list and deny-list configuration for a mapping session.

use serde::{Deserialize, Serialize};

/// Field filter applied to the target's accessor-derived attribute names.
///
/// Both lists are independent. When both are set a name has to be absent
/// from [`FieldFilter::excludes`] *and* present in [`FieldFilter::only`] to be
/// copied. Names are not validated against any type.
///
/// The filter deserializes from configuration data, so callers can keep
/// reusable mapping profiles alongside the rest of their settings.
///
/// ```rust
/// use object_mapper::FieldFilter;
///
/// let filter = FieldFilter::default()
///     .with_only(["id", "name", "email"])
///     .with_excludes(["email"]);
/// assert!(!filter.is_excluded("name"));
/// assert!(filter.is_excluded("email"));
/// assert!(filter.is_excluded("password"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldFilter {
    /// Names that are never copied.
    pub excludes: Vec<String>,
    /// When non-empty, the only names that may be copied.
    pub only: Vec<String>,
}

impl FieldFilter {
    /// Replaces the deny-list.
    #[must_use]
    pub fn with_excludes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the allow-list.
    #[must_use]
    pub fn with_only<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` when `name` must not be copied.
    ///
    /// A name on the deny-list is always excluded. Otherwise, a non-empty
    /// allow-list excludes every name it does not contain.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        if self.excludes.iter().any(|field| field == name) {
            return true;
        }
        !self.only.is_empty() && !self.only.iter().any(|field| field == name)
    }

    /// Returns `true` when neither list is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.excludes.is_empty() && self.only.is_empty()
    }
}
