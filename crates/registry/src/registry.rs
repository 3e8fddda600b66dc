//! In-memory prototype registry.

use std::collections::HashMap;

use thiserror::Error;

use crate::prototype::Prototype;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Clone requested for a key no prototype was ever registered under.
    #[error("no prototype registered for category: {0}")]
    MissingPrototype(String),
}

/// Keyed prototype store.
///
/// - Exactly one stored exemplar per key; re-registration displaces the prior entry
/// - `get_prototype` lends out the stored instance itself
/// - `clone_prototype` hands out independently owned deep copies
///
/// Mutation goes through `&mut self`, so shared multi-threaded use requires the
/// caller to wrap the registry in a `Mutex`/`RwLock`; the registry itself holds
/// no lock.
#[derive(Debug)]
pub struct PrototypeRegistry<P: Prototype> {
    prototypes: HashMap<P::Key, P>,
}

impl<P: Prototype> PrototypeRegistry<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `prototype` under its own key, displacing any prior entry for it.
    ///
    /// The registry takes ownership of the exact value passed in; no copy is
    /// made at registration time. Returns the displaced prototype, if any.
    pub fn add_prototype(&mut self, prototype: P) -> Option<P> {
        let key = prototype.key();
        let displaced = self.prototypes.insert(key, prototype);
        tracing::debug!(
            "registered prototype for {} (displaced: {})",
            key,
            displaced.is_some()
        );
        displaced
    }

    /// Borrow the stored prototype for `key`, if one was registered.
    ///
    /// Identity-preserving: the returned reference points at the very instance
    /// handed to [`add_prototype`](Self::add_prototype), never at a copy.
    pub fn get_prototype(&self, key: P::Key) -> Option<&P> {
        self.prototypes.get(&key)
    }

    /// Deep-copy the stored prototype for `key`.
    ///
    /// Unlike [`get_prototype`](Self::get_prototype), absence is a failure here:
    /// the operation cannot proceed without an exemplar to copy.
    pub fn clone_prototype(&self, key: P::Key) -> Result<P, RegistryError> {
        match self.prototypes.get(&key) {
            Some(prototype) => {
                tracing::debug!("cloning prototype for {}", key);
                Ok(prototype.deep_clone())
            }
            None => Err(RegistryError::MissingPrototype(key.to_string())),
        }
    }

    /// Number of keys with a registered prototype.
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

impl<P: Prototype> Default for PrototypeRegistry<P> {
    fn default() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }
}
