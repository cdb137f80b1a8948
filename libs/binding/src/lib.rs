//! # Sigbind Header Binding - Rules Layer
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer of the header binding system:
//! converting raw, possibly repeated, textual request headers into the
//! strongly-typed values a service signature declares, with
//! nilability/optionality policy, array and record decomposition, type
//! coercion, and post-cast constraint validation.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [libs/binding] → service dispatch
//!     ↑              ↓                ↓
//! Pure Data     Binding Rules     Handler
//! HeaderMap     Cast/Validate     Invocation
//! Value         Populate
//! ```
//!
//! ## What This Crate Contains
//! - **HeaderBindingSet**: immutable per-signature descriptor set with the
//!   single `populate` entry point
//! - **HeaderBindingSetBuilder**: construction-time freezing of descriptors
//! - **Caster**: string → typed scalar/array coercion per [`types::TypeTag`]
//! - **Constraintset**: post-cast value validation
//! - **OutputFeed**: per-request positional slots written by `populate`
//! - **BindingError**: the two-shape binding error surface
//!
//! ## What This Crate Does NOT Contain
//! - Header transport or parsing of raw request bytes (external)
//! - Request routing / signature selection (external)
//! - Client-facing HTTP error responses (callers translate
//!   [`BindingError`] into a 400-class response)
//!
//! ## Concurrency
//!
//! Descriptors are built once during signature analysis and are read-only
//! thereafter; a [`HeaderBindingSet`] is `Send + Sync` and safely shared by
//! any number of concurrent requests. The [`OutputFeed`] is exclusively
//! owned by a single in-flight invocation. Binding is synchronous and
//! allocation-light; there is no async runtime dependency.

pub mod binder;
pub mod builder;
pub mod cast;
pub mod constraint;
pub mod descriptor;
pub mod error;
pub mod feed;

// Re-export key types for convenience
pub use binder::HeaderBindingSet;
pub use builder::{HeaderBindingSetBuilder, HeaderParamBuilder, RecordDescriptorBuilder};
pub use cast::{cast_array, cast_scalar, CastError};
pub use constraint::{ConstraintError, Constraintset};
pub use descriptor::{FieldDescriptor, HeaderParam, ParamShape, RecordDescriptor};
pub use error::{BindingError, BindingResult, FailureCause};
pub use feed::{OutputFeed, Slot};
