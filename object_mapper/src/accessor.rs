//! Accessor recognition and attribute naming.
//!
//! An accessor is a public instance method without parameters whose name
//! starts with `get` or `is` followed by at least one more character. The
//! attribute it exposes is the rest of the name with its first character
//! lower-cased, so `getFirstName` exposes `firstName` and `isActive` exposes
//! `active`.
//!
//! Rust methods are normally `snake_case`; a single `_` directly after the
//! prefix is treated as a separator, so `get_first_name` exposes
//! `first_name` and `is_active` exposes `active`. A bare `get_` or `is_` is
//! not an accessor.
//!
//! The prefix test is purely textual: `issuer` reads as `is` + `suer`.

use crate::Method;

/// Prefix of value accessors.
pub const GET_PREFIX: &str = "get";

/// Prefix of boolean accessors.
pub const IS_PREFIX: &str = "is";

const SEPARATOR: char = '_';

/// Returns the part of `method_name` that names the attribute.
///
/// # Examples
///
/// ```rust
/// use object_mapper::accessor::accessor_suffix;
///
/// assert_eq!(accessor_suffix("getFirstName"), Some("FirstName"));
/// assert_eq!(accessor_suffix("get_first_name"), Some("first_name"));
/// assert_eq!(accessor_suffix("is_active"), Some("active"));
/// assert_eq!(accessor_suffix("get"), None);
/// assert_eq!(accessor_suffix("name"), None);
/// ```
#[must_use]
pub fn accessor_suffix(method_name: &str) -> Option<&str> {
    let rest = method_name
        .strip_prefix(IS_PREFIX)
        .or_else(|| method_name.strip_prefix(GET_PREFIX))?;
    let suffix = rest.strip_prefix(SEPARATOR).unwrap_or(rest);
    (!suffix.is_empty()).then_some(suffix)
}

/// Derives the attribute name exposed by the accessor `method_name`.
///
/// Returns `None` when the name is not an accessor name. The first character
/// of the suffix is lower-cased (ASCII only); the rest is kept verbatim.
///
/// # Examples
///
/// ```rust
/// use object_mapper::accessor::attribute_name;
///
/// assert_eq!(attribute_name("getFirstName").as_deref(), Some("firstName"));
/// assert_eq!(attribute_name("isActive").as_deref(), Some("active"));
/// assert_eq!(attribute_name("get_email").as_deref(), Some("email"));
/// assert_eq!(attribute_name("getURL").as_deref(), Some("uRL"));
/// ```
#[must_use]
pub fn attribute_name(method_name: &str) -> Option<String> {
    let suffix = accessor_suffix(method_name)?;
    let mut chars = suffix.chars();
    let first = chars.next()?;
    let mut name = String::with_capacity(suffix.len());
    name.push(first.to_ascii_lowercase());
    name.push_str(chars.as_str());
    Some(name)
}

/// Returns `true` if `method` is an accessor.
///
/// Accessors take `self` in some form, require no parameters, and carry an
/// accessor name.
#[must_use]
pub fn is_getter<T>(method: &Method<T>) -> bool {
    !method.is_static()
        && method.required_params() == 0
        && accessor_suffix(method.name()).is_some()
}

/// Attribute name of `method` when it is an accessor.
#[must_use]
pub fn getter_attribute<T>(method: &Method<T>) -> Option<String> {
    if is_getter(method) {
        attribute_name(method.name())
    } else {
        None
    }
}
