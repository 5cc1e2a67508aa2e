//! The `LangTag` value type.
//!
//! An opaque, already-validated language tag in canonical form. The only
//! way to obtain one is through the grammar: crate code wraps the
//! canonical rendering of a successful parse, and external callers go
//! through [`FromStr`](core::str::FromStr).

use core::fmt;

use crate::langtags;

/// A validated BCP47 language tag, held as its canonical string.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LangTag {
    serialization: String,
}

impl LangTag {
    /// `serialization` must already be the canonical form produced by
    /// the grammar.
    pub(crate) fn new(serialization: String) -> Self {
        Self { serialization }
    }

    pub fn as_str(&self) -> &str {
        &self.serialization
    }

    pub fn into_string(self) -> String {
        self.serialization
    }
}

impl AsRef<str> for LangTag {
    fn as_ref(&self) -> &str {
        &self.serialization
    }
}

impl fmt::Display for LangTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialization)
    }
}

impl core::str::FromStr for LangTag {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match langtags::parse(s) {
            Some(parsed) => Ok(parsed.to_language_tag()),
            None => Err(anyhow::anyhow!("Ill-formed BCP47 language tag '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_accepts_and_preserves_valid_tags() {
        let tag: LangTag = "zh-Hans-CN".parse().unwrap();
        assert_eq!(tag.as_str(), "zh-Hans-CN");
        assert_eq!(tag.to_string(), "zh-Hans-CN");
        assert_eq!(tag.into_string(), "zh-Hans-CN");
    }

    #[test]
    fn from_str_rejects_garbage() {
        assert!("not a tag".parse::<LangTag>().is_err());
        assert!("".parse::<LangTag>().is_err());
    }
}
