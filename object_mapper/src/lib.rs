//! Core crate for the `object_mapper` field projection engine.
//!
//! A [`Mapper`] copies values from a *source* object into the identically
//! named fields of a *target* object. Field names are derived from the
//! source's accessor methods (`get_name`, `getName`, `is_active`, ...), and
//! the copy can be narrowed with an allow-list ([`Mapper::only`]) or a
//! deny-list ([`Mapper::excludes`]).
//!
//! Rust has no ambient reflection, so both sides opt in explicitly. The
//! companion `object_mapper_macros` crate provides [`reflect`] for inherent
//! `impl` blocks, which records the public methods, and the [`Mappable`]
//! derive, which grants the mapper write access to a struct's declared fields.
//!
//! ```rust
//! use object_mapper::{Mappable, Mapper, reflect};
//!
//! #[derive(Debug, Default, Mappable)]
//! struct Account {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[reflect]
//! impl Account {
//!     pub fn get_id(&self) -> u64 {
//!         self.id
//!     }
//!
//!     pub fn get_name(&self) -> &str {
//!         &self.name
//!     }
//! }
//!
//! struct Profile;
//!
//! #[reflect]
//! impl Profile {
//!     pub fn get_id(&self) -> u64 {
//!         7
//!     }
//!
//!     pub fn get_name(&self) -> String {
//!         String::from("Ann")
//!     }
//! }
//!
//! let mut account = Account::default();
//! Mapper::new().map(&mut account).fill(&Profile)?;
//! assert_eq!(account.id, 7);
//! assert_eq!(account.name, "Ann");
//! # Ok::<_, object_mapper::MapperError>(())
//! ```

extern crate self as object_mapper;

pub use object_mapper_macros::{Mappable, reflect};

pub mod accessor;
mod bag;
mod error;
mod extract;
mod filter;
mod mapper;
mod reflect;
mod value;

pub use bag::AttributeBag;
pub use error::{InvalidInput, MapperError, MapperResult};
pub use extract::{ExtractedFields, allowed_attributes, extract};
pub use filter::FieldFilter;
pub use mapper::Mapper;
pub use reflect::{Mappable, Method, Receiver, Reflect};
pub use value::Value;
