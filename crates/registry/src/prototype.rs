//! Prototype contract (mechanics only).
//!
//! This module provides the **prototype pattern** contract - producing new objects
//! by copying a registered exemplar instead of invoking a constructor with the full
//! parameter list every time.
//!
//! ## Design Philosophy
//!
//! The contract is intentionally **lightweight** and makes minimal assumptions:
//!
//! - **Domain-agnostic**: Works for any keyed, copyable value (invoices, templates, configs)
//! - **Explicit copies**: `deep_clone` is written field-by-field by the implementor;
//!   the contract never relies on reflection or blanket derive delegation
//! - **Self-keying**: An exemplar knows the key it registers under, so registration
//!   cannot file a prototype under the wrong key
//!
//! ## Why Deep Copies?
//!
//! A clone handed to a caller is independently owned. Mutating the clone must never
//! affect the stored exemplar and vice versa, which means no mutable sub-structure
//! (heap buffers, collections) may be shared between the two. That independence is
//! the property the pattern exists to provide.
//!
//! ## Usage Pattern
//!
//! ```ignore
//! #[derive(Debug, PartialEq)]
//! struct DocumentTemplate {
//!     kind: TemplateKind,
//!     body: String,
//! }
//!
//! impl Prototype for DocumentTemplate {
//!     type Key = TemplateKind;
//!
//!     fn key(&self) -> TemplateKind {
//!         self.kind
//!     }
//!
//!     fn deep_clone(&self) -> Self {
//!         Self {
//!             kind: self.kind,
//!             body: self.body.clone(),
//!         }
//!     }
//! }
//! ```

/// A keyed exemplar that can produce independently owned copies of itself.
pub trait Prototype {
    /// Key the exemplar registers under (a closed category set in most domains).
    type Key: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the key this exemplar registers under.
    fn key(&self) -> Self::Key;

    /// Produce a new instance with identical field values, sharing no mutable
    /// sub-structure with `self`.
    ///
    /// Implementations must be deterministic: copy every field explicitly and
    /// never mutate the source.
    fn deep_clone(&self) -> Self;
}
