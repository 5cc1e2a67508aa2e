//! Parsing and handling of BCP47 (RFC 5646) language tags.
//!
//! [`parse`] checks a candidate tag for syntactic well-formedness and
//! decomposes it into a [`ParsedTag`]; [`ParsedTag::to_language_tag`]
//! renders the canonical form back as an opaque [`LangTag`]. Accepted
//! tags round-trip byte-for-byte. No registry lookups, no case folding.

mod combinator;
pub mod langtag;
pub mod langtags;

pub use langtag::LangTag;
pub use langtags::{parse, NormalTag, ParsedTag};
