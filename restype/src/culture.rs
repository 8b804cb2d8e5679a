use std::fmt;
use std::str::FromStr;

use crate::errors::CultureError;

/// A culture tag such as `en` or `fr-FR`.
///
/// Tags are dash-separated ASCII alphanumeric segments. Lookups walk toward
/// the neutral culture via [`Culture::parent`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture {
    tag: String,
}

impl Culture {
    /// Validates and wraps a culture tag.
    pub fn new(tag: impl Into<String>) -> Result<Self, CultureError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(CultureError::Empty);
        }
        let segments_ok = tag
            .split('-')
            .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()));
        if !segments_ok {
            return Err(CultureError::Invalid(tag));
        }
        Ok(Self { tag })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Parent culture, or `None` when the tag is already neutral
    /// (`fr-FR` -> `fr` -> none).
    pub fn parent(&self) -> Option<Culture> {
        let (head, _) = self.tag.rsplit_once('-')?;
        Some(Culture { tag: head.to_string() })
    }
}

impl FromStr for Culture {
    type Err = CultureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Culture::new(s)
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}
