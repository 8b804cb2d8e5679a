use crate::culture::Culture;
use crate::errors::ResourceError;
use crate::registry;

/// Resolves entries against registered resource sets.
///
/// A manager is scoped by its base name: the resource-set identifier the
/// packaging step used when embedding the compiled set. Lookups prefer the
/// requested culture, then walk its parent chain, and end at the neutral
/// set.
#[derive(Debug, Clone)]
pub struct ResourceManager {
    base_name: String,
}

impl ResourceManager {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Looks up `name`, falling back through the culture's parents to the
    /// neutral set. Returns `None` when no set or entry matches.
    pub fn get_string(&self, name: &str, culture: Option<&Culture>) -> Option<String> {
        self.string(name, culture).ok()
    }

    /// Like [`ResourceManager::get_string`] but distinguishes a missing set
    /// from a missing entry.
    pub fn string(&self, name: &str, culture: Option<&Culture>) -> Result<String, ResourceError> {
        let mut saw_set = false;
        let mut current = culture.cloned();
        loop {
            let set = registry::get_set(&self.base_name, current.as_ref());
            if let Some(set) = set {
                saw_set = true;
                if let Some(value) = set.get(name) {
                    return Ok(value.to_string());
                }
            }
            match current {
                Some(c) => current = c.parent(),
                None => break,
            }
        }
        if saw_set {
            Err(ResourceError::MissingEntry {
                base_name: self.base_name.clone(),
                name: name.to_string(),
            })
        } else {
            Err(ResourceError::MissingSet {
                base_name: self.base_name.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ResourceSet, register_set};

    #[test]
    fn falls_back_through_the_culture_chain() {
        let mut neutral = ResourceSet::new("Mgr.resources.Fallback", None);
        neutral.insert("OnlyNeutral", "base");
        neutral.insert("Shared", "base");
        register_set(neutral);

        let mut french = ResourceSet::new("Mgr.resources.Fallback", Some(Culture::new("fr").unwrap()));
        french.insert("Shared", "fr");
        register_set(french);

        let manager = ResourceManager::new("Mgr.resources.Fallback");
        let swiss = Culture::new("fr-CH").unwrap();

        // fr-CH has no set of its own: Shared resolves from fr, OnlyNeutral
        // from the neutral set.
        assert_eq!(manager.get_string("Shared", Some(&swiss)).as_deref(), Some("fr"));
        assert_eq!(manager.get_string("OnlyNeutral", Some(&swiss)).as_deref(), Some("base"));
        assert_eq!(manager.get_string("Shared", None).as_deref(), Some("base"));
    }

    #[test]
    fn missing_set_and_missing_entry_are_distinct() {
        let manager = ResourceManager::new("Mgr.resources.Nothing");
        assert!(matches!(
            manager.string("Any", None),
            Err(ResourceError::MissingSet { .. })
        ));

        register_set(ResourceSet::new("Mgr.resources.Empty", None));
        let manager = ResourceManager::new("Mgr.resources.Empty");
        assert!(matches!(
            manager.string("Any", None),
            Err(ResourceError::MissingEntry { .. })
        ));
        assert_eq!(manager.get_string("Any", None), None);
    }
}
