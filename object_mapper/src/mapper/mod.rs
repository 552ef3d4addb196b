//! The mapping session: designate a target, narrow the fields, fill.

use crate::{
    FieldFilter, InvalidInput, Mappable, MapperResult, Reflect, allowed_attributes, extract,
};

/// One-shot mapping session populating a borrowed target.
///
/// A session is configured with consuming builder calls and then filled:
///
/// 1. [`Mapper::map`] designates the target and snapshots its declared
///    fields;
/// 2. [`Mapper::excludes`] and [`Mapper::only`] narrow the copied fields
///    (the last call of each kind wins);
/// 3. [`Mapper::fill`] reads the source and writes every allowed, extracted
///    value into the target.
///
/// A field is copied when it is declared on the target, exposed by one of
/// the target's own accessors, passes the filter, and is exposed by the
/// source. Everything else is left untouched; mismatches are not errors.
///
/// ```rust
/// use object_mapper::{Mappable, Mapper, reflect};
///
/// #[derive(Debug, Default, Mappable)]
/// struct User {
///     id: u64,
///     email: String,
/// }
///
/// #[reflect]
/// impl User {
///     pub fn get_id(&self) -> u64 {
///         self.id
///     }
///
///     pub fn get_email(&self) -> &str {
///         &self.email
///     }
/// }
///
/// let source = User { id: 7, email: String::from("a@x.io") };
/// let mut target = User::default();
/// Mapper::new()
///     .map(&mut target)
///     .excludes(["email"])
///     .fill(&source)?;
/// assert_eq!(target.id, 7);
/// assert!(target.email.is_empty());
/// # Ok::<_, object_mapper::MapperError>(())
/// ```
#[derive(Debug)]
pub struct Mapper<'a, T: Mappable> {
    target: Option<&'a mut T>,
    target_fields: Vec<&'static str>,
    filter: FieldFilter,
}

impl<'a, T: Mappable> Mapper<'a, T> {
    /// Creates a session with no target and no filters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: None,
            target_fields: Vec::new(),
            filter: FieldFilter {
                excludes: Vec::new(),
                only: Vec::new(),
            },
        }
    }

    /// Designates the object to populate.
    ///
    /// The target's declared field names are captured now and reused by every
    /// later [`Mapper::fill`].
    #[must_use]
    pub fn map(mut self, target: &'a mut T) -> Self {
        self.target_fields = T::declared_fields().to_vec();
        self.target = Some(target);
        self
    }

    /// Designates the object to populate when it may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NullTarget`] when `target` is `None`.
    pub fn try_map(self, target: Option<&'a mut T>) -> MapperResult<Self> {
        let object = target.ok_or(InvalidInput::NullTarget)?;
        Ok(self.map(object))
    }

    /// Replaces the deny-list. Names are not checked against the target.
    #[must_use]
    pub fn excludes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = self.filter.with_excludes(fields);
        self
    }

    /// Replaces the allow-list. Names are not checked against the target.
    #[must_use]
    pub fn only<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = self.filter.with_only(fields);
        self
    }

    /// Replaces both lists with a prepared filter.
    #[must_use]
    pub fn with_filter(mut self, filter: FieldFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The active filter.
    #[must_use]
    pub const fn filter(&self) -> &FieldFilter {
        &self.filter
    }

    /// Declared field names captured by [`Mapper::map`].
    #[must_use]
    pub const fn target_fields(&self) -> &[&'static str] {
        self.target_fields.as_slice()
    }

    /// Copies `source` into the target and returns the target.
    ///
    /// Calling `fill` again with an unchanged source leaves the target as it
    /// was after the first call.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MissingTarget`] when no target was designated.
    pub fn fill<S: Reflect>(&mut self, source: &S) -> MapperResult<&mut T> {
        self.fill_from(Some(source))
    }

    /// Copies `source` into the target when it may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MissingTarget`] when no target was designated
    /// and [`InvalidInput::NullSource`] when `source` is `None`. Nothing is
    /// written in either case.
    pub fn fill_from<S: Reflect>(&mut self, source: Option<&S>) -> MapperResult<&mut T> {
        let target = self.target.as_deref_mut().ok_or(InvalidInput::MissingTarget)?;
        let object = source.ok_or(InvalidInput::NullSource)?;

        let _span = tracing::debug_span!(
            "fill",
            target_type = std::any::type_name::<T>(),
            source_type = std::any::type_name::<S>(),
        )
        .entered();

        let extracted = extract(object);
        let allowed = allowed_attributes::<T>(&self.filter);

        for &field in &self.target_fields {
            if !allowed.iter().any(|name| name == field) {
                continue;
            }
            let Some(value) = extracted.get(field) else {
                continue;
            };
            match target.write_field(field, value.clone()) {
                Ok(()) => tracing::trace!(field, "copied field"),
                Err(rejected) => tracing::debug!(
                    field,
                    value_type = rejected.type_name(),
                    "skipping field whose type does not match the value"
                ),
            }
        }
        Ok(target)
    }
}

impl<T: Mappable> Default for Mapper<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
