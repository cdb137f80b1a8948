//! # Sigbind Types Library
//!
//! Pure data structures shared across the header binding system:
//! - Typed value model (`Value`, `TypeTag`, `RecordValue`) produced by binding
//! - Insertion-ordered header multimap (`HeaderMap`) consumed by binding
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/binding → service dispatch
//!     ↑             ↓
//! Pure Data    Binding Rules
//! Structures   Cast/Validate/Populate
//! ```
//!
//! This crate holds no binding logic: descriptors, casting, constraint
//! validation, and the populate orchestration all live in `libs/binding`.
//! Everything here is cheap to clone, `Send + Sync`, and free of I/O.

pub mod headers;
pub mod value;

pub use headers::{Header, HeaderMap};
pub use value::{RecordValue, TypeTag, Value};
