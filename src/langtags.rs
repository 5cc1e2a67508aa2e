//! BCP47 (RFC 5646) language tag grammar.
//!
//! [`parse`] splits a candidate tag on "-" and drives the grammar over
//! the resulting segment sequence; the whole sequence must be consumed.
//! Only syntactic well-formedness is checked here. Whether a subtag is
//! actually registered with IANA is a different question and out of
//! scope, as is any case normalization: tags round-trip byte-for-byte.

use core::fmt;
use std::iter::once;

use itertools::Itertools;
use log::debug;
use phf::phf_set;

use crate::combinator::{many, map, maybe, one_of, pop_if, repeat, some, symbol, PResult, Segments};
use crate::langtag::LangTag;

/// Irregular grandfathered tags (RFC 5646 2.2.8). Matched verbatim,
/// case-sensitively, against the whole tag.
const IRREGULAR: phf::Set<&'static str> = phf_set! {
    "en-GB-oed",
    "i-ami",
    "i-bnn",
    "i-default",
    "i-enochian",
    "i-hak",
    "i-klingon",
    "i-lux",
    "i-mingo",
    "i-navajo",
    "i-pwn",
    "i-tao",
    "i-tay",
    "i-tsu",
    "sgn-BE-FR",
    "sgn-BE-NL",
    "sgn-CH-DE",
};

/// Regular grandfathered tags: legacy forms that fit the generic syntax
/// but carry meanings only the enumeration preserves.
const REGULAR: phf::Set<&'static str> = phf_set! {
    "art-lojban",
    "cel-gaulish",
    "no-bok",
    "no-nyn",
    "zh-guoyu",
    "zh-hakka",
    "zh-min",
    "zh-min-nan",
    "zh-xiang",
};

/// A well-formed language tag, decomposed.
///
/// The three forms are mutually exclusive: the top-level grammar tries
/// grandfathered, then private-use, then the normal production, and the
/// first fully-consuming match wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedTag {
    /// An ordinary `language[-script][-region]...` tag.
    Normal(NormalTag),
    /// A wholly private tag: the subtags after the leading `x`.
    PrivateUse(Vec<String>),
    /// A grandfathered tag, kept as its verbatim segments.
    Grandfathered(Vec<String>),
}

/// The parts of a normal (non-grandfathered, non-private) tag, in the
/// order the grammar consumes them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalTag {
    /// Primary language subtag, with any extlang subtags "-"-joined in.
    pub language: String,
    /// Script subtag (4 letters), if present.
    pub script: Option<String>,
    /// Region subtag (2 letters or 3 digits), if present.
    pub region: Option<String>,
    /// Variant subtags, in parsed order.
    pub variants: Vec<String>,
    /// Extension sections, each "-"-joined from its singleton on.
    pub extensions: Vec<String>,
    /// Private-use subtags after the `x` marker; empty when the tag has
    /// no private-use section.
    pub private_use: Vec<String>,
}

fn alpha<'a>(segs: Segments<'a>, min: usize, max: usize) -> PResult<'a, &'a str> {
    repeat(segs, min, max, |c| c.is_ascii_alphabetic())
}

fn alphanum<'a>(segs: Segments<'a>, min: usize, max: usize) -> PResult<'a, &'a str> {
    repeat(segs, min, max, |c| c.is_ascii_alphanumeric())
}

/// `language`: 2-3 letters with an optional extlang tail, or 4 letters,
/// or 5-8 letters. Tried in that order.
fn language<'a>(segs: Segments<'a>) -> PResult<'a, String> {
    one_of(
        segs,
        &[
            &|s| {
                let (primary, rest) = alpha(s, 2, 3)?;
                let (ext, rest) = maybe(rest, extlang);
                let language = match ext {
                    Some(ext) => format!("{primary}-{ext}"),
                    None => primary.to_owned(),
                };
                Some((language, rest))
            },
            &|s| map(alpha(s, 4, 4), str::to_owned),
            &|s| map(alpha(s, 5, 8), str::to_owned),
        ],
    )
}

/// `extlang`: one to three 3-letter subtags, "-"-joined.
fn extlang<'a>(segs: Segments<'a>) -> PResult<'a, String> {
    let (first, rest) = alpha(segs, 3, 3)?;
    let (second, rest) = maybe(rest, |s| alpha(s, 3, 3));
    let (third, rest) = maybe(rest, |s| alpha(s, 3, 3));
    Some((once(first).chain(second).chain(third).join("-"), rest))
}

/// `script`: exactly 4 letters.
fn script<'a>(segs: Segments<'a>) -> PResult<'a, &'a str> {
    alpha(segs, 4, 4)
}

/// `region`: exactly 2 letters or exactly 3 digits.
fn region<'a>(segs: Segments<'a>) -> PResult<'a, &'a str> {
    one_of(
        segs,
        &[
            &|s| alpha(s, 2, 2),
            &|s| repeat(s, 3, 3, |c| c.is_ascii_digit()),
        ],
    )
}

/// `variant`: 4-8 alphanumeric characters. The RFC's "DIGIT 3alphanum"
/// subform is subsumed by the general bound.
fn variant<'a>(segs: Segments<'a>) -> PResult<'a, &'a str> {
    alphanum(segs, 4, 8)
}

/// An extension singleton: one alphanumeric character other than `x`
/// or `X`, which introduce the private-use section instead.
fn is_singleton(s: &str) -> bool {
    s.len() == 1 && s.chars().all(|c| c.is_ascii_alphanumeric()) && s != "x" && s != "X"
}

/// `extension`: a singleton plus one or more 2-8 alphanumeric subtags,
/// all "-"-joined into one string.
fn extension<'a>(segs: Segments<'a>) -> PResult<'a, String> {
    let (singleton, rest) = pop_if(segs, is_singleton)?;
    let (subtags, rest) = some(rest, |s| alphanum(s, 2, 8))?;
    Some((once(singleton).chain(subtags).join("-"), rest))
}

/// `privateuse`: the literal `x` plus one or more 1-8 alphanumeric
/// subtags. The marker itself is not kept.
fn private_use<'a>(segs: Segments<'a>) -> PResult<'a, Vec<String>> {
    let (_, rest) = symbol(segs, "x")?;
    let (subtags, rest) = some(rest, |s| alphanum(s, 1, 8))?;
    Some((subtags.into_iter().map(str::to_owned).collect(), rest))
}

/// `langtag`: the normal production, sections in fixed order. Extension
/// singletons must be pairwise distinct within one tag.
fn langtag<'a>(segs: Segments<'a>) -> PResult<'a, NormalTag> {
    let (language, rest) = language(segs)?;
    let (script, rest) = maybe(rest, script);
    let (region, rest) = maybe(rest, region);
    let (variants, rest) = many(rest, variant);
    let (extensions, rest) = many(rest, extension);
    if !extensions.iter().map(|e| &e[..1]).all_unique() {
        return None;
    }
    let (private_use, rest) = maybe(rest, private_use);
    let tag = NormalTag {
        language,
        script: script.map(str::to_owned),
        region: region.map(str::to_owned),
        variants: variants.into_iter().map(str::to_owned).collect(),
        extensions,
        private_use: private_use.unwrap_or_default(),
    };
    Some((tag, rest))
}

/// `grandfathered`: the irregular table, then the regular one. A match
/// is by full-sequence equality and consumes everything.
fn grandfathered<'a>(segs: Segments<'a>) -> PResult<'a, Vec<String>> {
    one_of(
        segs,
        &[&|s| fixed_tag(s, &IRREGULAR), &|s| fixed_tag(s, &REGULAR)],
    )
}

fn fixed_tag<'a>(segs: Segments<'a>, table: &phf::Set<&'static str>) -> PResult<'a, Vec<String>> {
    let joined = segs.iter().join("-");
    table.contains(joined.as_str()).then(|| {
        let verbatim = segs.iter().map(|s| s.to_string()).collect();
        (verbatim, &segs[segs.len()..])
    })
}

/// Parse a candidate BCP47 language tag.
///
/// Returns `None` for any ill-formed input; no diagnostics beyond that.
/// Accepted tags round-trip exactly: `parse(s)` followed by
/// [`ParsedTag::to_language_tag`] reproduces `s` byte-for-byte.
pub fn parse(tag: &str) -> Option<ParsedTag> {
    let segments: Vec<&str> = tag.split('-').collect();
    let (parsed, rest) = one_of(
        &segments,
        &[
            &|s| map(grandfathered(s), ParsedTag::Grandfathered),
            &|s| map(private_use(s), ParsedTag::PrivateUse),
            &|s| map(langtag(s), ParsedTag::Normal),
        ],
    )?;
    if !rest.is_empty() {
        debug!("'{tag}' rejected: trailing subtags {rest:?}");
        return None;
    }
    Some(parsed)
}

impl ParsedTag {
    /// Render the canonical form and wrap it as a [`LangTag`].
    pub fn to_language_tag(&self) -> LangTag {
        LangTag::new(self.to_string())
    }

    /// The language subtag of a normal tag, extlang included.
    pub fn language(&self) -> Option<&str> {
        match self {
            ParsedTag::Normal(tag) => Some(&tag.language),
            _ => None,
        }
    }

    pub fn script(&self) -> Option<&str> {
        match self {
            ParsedTag::Normal(tag) => tag.script.as_deref(),
            _ => None,
        }
    }

    pub fn region(&self) -> Option<&str> {
        match self {
            ParsedTag::Normal(tag) => tag.region.as_deref(),
            _ => None,
        }
    }

    pub fn variants(&self) -> &[String] {
        match self {
            ParsedTag::Normal(tag) => &tag.variants,
            _ => &[],
        }
    }

    pub fn extensions(&self) -> &[String] {
        match self {
            ParsedTag::Normal(tag) => &tag.extensions,
            _ => &[],
        }
    }

    /// Private-use subtags: the `x-` section of a normal tag, or the
    /// whole body of a [`ParsedTag::PrivateUse`] tag.
    pub fn private_use(&self) -> &[String] {
        match self {
            ParsedTag::Normal(tag) => &tag.private_use,
            ParsedTag::PrivateUse(subtags) => subtags,
            ParsedTag::Grandfathered(_) => &[],
        }
    }

    pub fn is_grandfathered(&self) -> bool {
        matches!(self, ParsedTag::Grandfathered(_))
    }
}

/// Canonical string form: the exact left inverse of [`parse`] for every
/// accepted input.
impl fmt::Display for ParsedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedTag::Normal(tag) => {
                let mut parts: Vec<&str> = vec![&tag.language];
                parts.extend(tag.script.as_deref());
                parts.extend(tag.region.as_deref());
                parts.extend(tag.variants.iter().map(String::as_str));
                parts.extend(tag.extensions.iter().map(String::as_str));
                if !tag.private_use.is_empty() {
                    parts.push("x");
                    parts.extend(tag.private_use.iter().map(String::as_str));
                }
                f.write_str(&parts.join("-"))
            }
            ParsedTag::PrivateUse(subtags) => {
                write!(f, "x-{}", subtags.iter().join("-"))
            }
            ParsedTag::Grandfathered(subtags) => f.write_str(&subtags.iter().join("-")),
        }
    }
}
