//! Dialect profiles and type resolution.
//!
//! A dialect is described by data, not by overriding generator methods:
//!
//! - [`TypeNames`]: sparse data type → keyword overrides
//! - [`TypeRule`]: priority-ordered special renderings (auto-increment
//!   pseudo-types, collapsed float precision, ...)
//! - [`DialectProfile`]: the immutable bundle of the above plus the dialect's
//!   capabilities and pre-table phases
//!
//! # Usage
//!
//! ```rust,ignore
//! let profile = DialectProfile::builder("postgres", PostgresDialect::new())
//!     .type_name(DataType::Blob, "BYTEA")
//!     .rule(TypeRule::byte_width(DataType::AutoInc, "SERIAL", "BIGSERIAL", 8))
//!     .phase(SequencePhase)
//!     .build();
//! ```

mod profile;
mod typemap;

pub use profile::{DialectProfile, DialectProfileBuilder};
pub use typemap::{byte_width, default_type, TypeNames, TypeRender, TypeRule};
