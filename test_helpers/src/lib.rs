//! Test helpers shared across crates.
//!
//! This crate provides sample domain types for mapping tests and a tracing
//! subscriber suitable for the test harness.

pub mod fixtures {
    //! Sample source and target types.
    //!
    //! [`Account`] is a target whose fields have no setters; [`AccountView`]
    //! is the matching read model used as a source.

    use object_mapper::{Mappable, reflect};

    /// Target type with read-only accessors and no setters.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Mappable)]
    pub struct Account {
        id: u64,
        name: String,
        email: String,
    }

    #[reflect]
    impl Account {
        /// Account identifier.
        #[must_use]
        pub const fn get_id(&self) -> u64 {
            self.id
        }

        /// Display name.
        #[must_use]
        pub fn get_name(&self) -> &str {
            &self.name
        }

        /// Contact address.
        #[must_use]
        pub fn get_email(&self) -> &str {
            &self.email
        }
    }

    /// Source type exposing the account data through accessors only.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AccountView {
        id: u64,
        name: String,
        email: String,
    }

    impl AccountView {
        /// Builds a view from its parts.
        #[must_use]
        pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
            Self {
                id,
                name: name.into(),
                email: email.into(),
            }
        }
    }

    #[reflect]
    impl AccountView {
        /// Account identifier.
        #[must_use]
        pub const fn get_id(&self) -> u64 {
            self.id
        }

        /// Display name.
        #[must_use]
        pub fn get_name(&self) -> String {
            self.name.clone()
        }

        /// Contact address.
        #[must_use]
        pub fn get_email(&self) -> String {
            self.email.clone()
        }
    }

    /// The view used throughout the scenarios: id 7, Ann, `a@x.io`.
    #[must_use]
    pub fn ann() -> AccountView {
        AccountView::new(7, "Ann", "a@x.io")
    }
}

pub mod logging {
    //! Tracing setup for tests.

    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::TestWriter;

    /// Installs a fmt subscriber writing through the test harness.
    ///
    /// Honours `RUST_LOG`. Calling it more than once is harmless: later
    /// calls leave the first subscriber in place.
    pub fn init() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(TestWriter::new())
            .try_init()
            .ok();
    }
}
