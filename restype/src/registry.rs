//! Process-wide registry of compiled resource sets.
//!
//! The packaging step (or the consuming program's startup code) registers
//! one [`ResourceSet`] per compiled resource blob under its resource-set
//! identifier; generated accessors resolve through [`crate::ResourceManager`].

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use crate::culture::Culture;

/// A compiled resource set: the entries of one resource document for one
/// culture (or the neutral culture when `culture` is `None`).
#[derive(Debug, Clone)]
pub struct ResourceSet {
    base_name: String,
    culture: Option<Culture>,
    entries: HashMap<String, String>,
}

impl ResourceSet {
    pub fn new(base_name: impl Into<String>, culture: Option<Culture>) -> Self {
        Self {
            base_name: base_name.into(),
            culture,
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn culture(&self) -> Option<&Culture> {
        self.culture.as_ref()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct SetKey {
    base_name: String,
    culture: Option<String>,
}

static REGISTRY: OnceLock<RwLock<HashMap<SetKey, ResourceSet>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<SetKey, ResourceSet>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Registers a compiled resource set. Registering the same base name and
/// culture again replaces the earlier set.
pub fn register_set(set: ResourceSet) {
    let key = SetKey {
        base_name: set.base_name().to_string(),
        culture: set.culture().map(|c| c.tag().to_string()),
    };
    registry().write().unwrap().insert(key, set);
}

pub(crate) fn get_set(base_name: &str, culture: Option<&Culture>) -> Option<ResourceSet> {
    let key = SetKey {
        base_name: base_name.to_string(),
        culture: culture.map(|c| c.tag().to_string()),
    };
    registry().read().unwrap().get(&key).cloned()
}
