//! ISO 639 language tag normalization
//!
//! The BAS web services describe their language parameter as an
//! [RFC 5646](https://tools.ietf.org/html/rfc5646) tag, but in practice only
//! accept a 3-letter (ISO 639-2) primary subtag. [`LanguageTag`] maps whatever
//! callers are likely to supply — 2-letter codes, 3-letter codes in the wrong
//! case, English language names — onto that form, leaving any region suffix
//! untouched.
//!
//! # Example
//!
//! ```
//! use iso639::LanguageTag;
//!
//! # fn main() -> Result<(), iso639::TableError> {
//! let tagger = LanguageTag::new()?;
//! assert_eq!(tagger.tag("en-NZ"), "eng-NZ");
//! assert_eq!(tagger.tag("GERMAN"), "deu");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod tag;

pub use error::TableError;
pub use tag::LanguageTag;
