//! Prototype mechanics: cloneable exemplars and the registry that stores them.
//!
//! This crate contains the domain-agnostic half of the prototype pattern
//! (no IO, no storage, no domain knowledge).

pub mod prototype;
pub mod registry;

pub use prototype::Prototype;
pub use registry::{PrototypeRegistry, RegistryError};
