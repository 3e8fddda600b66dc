//! Invoicing domain module.
//!
//! Invoice value records and the category-keyed prototype registry they are
//! cloned from, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod invoice;

pub use invoice::{Invoice, InvoiceCategory, InvoiceId, InvoicePrototypeRegistry};
