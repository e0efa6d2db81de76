//! Language tag normalization
//!
//! Built from two line-oriented `key=value` tables embedded at compile time:
//! 3-letter code → English name, and 2-letter → 3-letter code.

use std::collections::HashMap;

use crate::error::TableError;

const CODES: &str = include_str!("../data/iso-639-2.txt");
const TWO_TO_THREE: &str = include_str!("../data/iso-639-1-to-2.txt");

/// Normalizes language identifiers to a 3-letter primary subtag
///
/// Accepts 3-letter codes (any case), 2-letter codes (any case), and English
/// language names (any case), with an optional region suffix such as `-NZ`
/// that is passed through verbatim. Input that resolves to nothing is
/// returned unchanged — normalization is best effort and never fails.
///
/// The lookup tables are immutable after construction, so a single instance
/// can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct LanguageTag {
    /// 3-letter ISO 639-2 code → English name
    code_to_name: HashMap<String, String>,
    /// Lowercased English name → 3-letter code (inverse of `code_to_name`)
    name_to_code: HashMap<String, String>,
    /// 2-letter ISO 639-1 code → 3-letter code
    two_to_three: HashMap<String, String>,
}

impl LanguageTag {
    /// Build the tagger from the embedded reference tables
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if an embedded table is malformed. That means
    /// the build shipped bad data; treat it as fatal.
    pub fn new() -> Result<Self, TableError> {
        Self::from_tables(CODES, TWO_TO_THREE)
    }

    /// Build the tagger from caller-supplied table text
    ///
    /// `codes` maps 3-letter codes to English names (`code=Name` per line),
    /// `two_to_three` maps 2-letter to 3-letter codes (`two=three` per line).
    /// Blank lines and lines starting with `#` are skipped. The name lookup
    /// is derived by inverting `codes` in line order, so a case-insensitive
    /// name collision resolves to the entry that appears last.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MalformedEntry`] for a line that is not
    /// `key=value`, or [`TableError::Empty`] if a table has no entries.
    pub fn from_tables(codes: &str, two_to_three: &str) -> Result<Self, TableError> {
        let mut code_to_name = HashMap::new();
        let mut name_to_code = HashMap::new();
        for (code, name) in parse_entries(codes, "iso-639-2")? {
            name_to_code.insert(name.to_lowercase(), code.clone());
            code_to_name.insert(code, name);
        }

        let two_to_three = parse_entries(two_to_three, "iso-639-1-to-2")?
            .into_iter()
            .collect();

        Ok(Self {
            code_to_name,
            name_to_code,
            two_to_three,
        })
    }

    /// Normalize a language identifier to a tag with a 3-letter primary subtag
    ///
    /// Resolution order for the primary subtag: exact 3-letter code, 3-letter
    /// code in the wrong case, 2-letter code, English language name. Anything
    /// after the first `-` is treated as a region/script suffix and returned
    /// untouched. Empty input yields the empty string; unresolvable input is
    /// returned as supplied.
    ///
    /// ```
    /// # let tagger = iso639::LanguageTag::new().unwrap();
    /// assert_eq!(tagger.tag("ENGLISH-NZ"), "eng-NZ");
    /// assert_eq!(tagger.tag("Elvish"), "Elvish");
    /// ```
    #[must_use]
    pub fn tag(&self, language: &str) -> String {
        if language.is_empty() {
            return String::new();
        }
        let (code, suffix) = match language.find('-') {
            Some(hyphen) => language.split_at(hyphen),
            None => (language, ""),
        };
        let mut code = code.to_string();
        if !self.code_to_name.contains_key(&code) {
            let lower = code.to_lowercase();
            if self.code_to_name.contains_key(&lower) {
                code = lower.clone();
            }
            // The 2-letter lookup and the name lookup are alternatives; the
            // wrong-case retry above is independent of both.
            if let Some(three) = self.two_to_three.get(&lower) {
                code = three.clone();
            } else if let Some(three) = self.name_to_code.get(&lower) {
                code = three.clone();
            }
        }
        code + suffix
    }

    /// English name for a 3-letter code, if the table knows it
    #[must_use]
    pub fn language_name(&self, code: &str) -> Option<&str> {
        self.code_to_name.get(code).map(String::as_str)
    }

    /// 3-letter code for a 2-letter code, if the table knows it
    #[must_use]
    pub fn three_letter_code(&self, two: &str) -> Option<&str> {
        self.two_to_three.get(two).map(String::as_str)
    }
}

/// Parse `key=value` lines, skipping blanks and `#` comments
fn parse_entries(text: &str, name: &'static str) -> Result<Vec<(String, String)>, TableError> {
    let mut entries = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let entry = line.split_once('=').map(|(k, v)| (k.trim(), v.trim()));
        match entry {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => {
                entries.push((key.to_string(), value.to_string()));
            },
            _ => {
                return Err(TableError::MalformedEntry {
                    line: index + 1,
                    content: line.to_string(),
                });
            },
        }
    }
    if entries.is_empty() {
        return Err(TableError::Empty { name });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> LanguageTag {
        LanguageTag::new().expect("embedded tables should parse")
    }

    #[test]
    fn three_letter_codes_pass_through() {
        let tagger = tagger();
        assert_eq!(tagger.tag("eng"), "eng");
        assert_eq!(tagger.tag("ENG"), "eng");
        assert_eq!(tagger.tag("deu"), "deu");
    }

    #[test]
    fn two_letter_codes_resolve() {
        let tagger = tagger();
        assert_eq!(tagger.tag("en"), "eng");
        assert_eq!(tagger.tag("EN"), "eng");
        assert_eq!(tagger.tag("de"), "deu");
    }

    #[test]
    fn language_names_resolve() {
        let tagger = tagger();
        assert_eq!(tagger.tag("English"), "eng");
        assert_eq!(tagger.tag("ENGLISH"), "eng");
        assert_eq!(tagger.tag("german"), "deu");
        assert_eq!(tagger.tag("Multiple languages"), "mul");
    }

    #[test]
    fn region_suffix_is_preserved() {
        let tagger = tagger();
        assert_eq!(tagger.tag("eng-NZ"), "eng-NZ");
        assert_eq!(tagger.tag("ENG-NZ"), "eng-NZ");
        assert_eq!(tagger.tag("en-NZ"), "eng-NZ");
        assert_eq!(tagger.tag("EN-NZ"), "eng-NZ");
        assert_eq!(tagger.tag("English-NZ"), "eng-NZ");
        assert_eq!(tagger.tag("ENGLISH-NZ"), "eng-NZ");
    }

    #[test]
    fn unknown_languages_pass_through_unchanged() {
        let tagger = tagger();
        assert_eq!(tagger.tag("Elvish"), "Elvish");
        assert_eq!(tagger.tag("ENG-Hobbiton"), "eng-Hobbiton");
        assert_eq!(tagger.tag("xx"), "xx");
    }

    #[test]
    fn empty_input_yields_empty_tag() {
        assert_eq!(tagger().tag(""), "");
    }

    #[test]
    fn suffix_only_input_passes_through() {
        assert_eq!(tagger().tag("-NZ"), "-NZ");
    }

    #[test]
    fn every_table_code_is_a_fixed_point() {
        let tagger = tagger();
        for code in tagger.code_to_name.keys() {
            assert_eq!(&tagger.tag(code), code);
            assert_eq!(&tagger.tag(&code.to_uppercase()), code);
        }
    }

    #[test]
    fn every_two_letter_code_resolves_to_a_table_code() {
        let tagger = tagger();
        for (two, three) in &tagger.two_to_three {
            assert_eq!(&tagger.tag(two), three);
            assert!(
                tagger.code_to_name.contains_key(three),
                "{two} maps to {three}, which is missing from the code table"
            );
        }
    }

    #[test]
    fn table_accessors() {
        let tagger = tagger();
        assert_eq!(tagger.language_name("eng"), Some("English"));
        assert_eq!(tagger.language_name("zz"), None);
        assert_eq!(tagger.three_letter_code("en"), Some("eng"));
        assert_eq!(tagger.three_letter_code("eng"), None);
    }

    #[test]
    fn name_collisions_resolve_to_the_last_entry() {
        let tagger = LanguageTag::from_tables("aaa=Same\nbbb=SAME", "xx=aaa")
            .expect("tables should parse");
        assert_eq!(tagger.tag("same"), "bbb");
        assert_eq!(tagger.tag("SAME"), "bbb");
    }

    #[test]
    fn two_letter_lookup_shadows_name_lookup() {
        // "ab" is both a language name and a 2-letter code here; the
        // 2-letter table wins and the name table is never consulted.
        let tagger = LanguageTag::from_tables("foo=Ab\nbar=Other", "ab=bar")
            .expect("tables should parse");
        assert_eq!(tagger.tag("Ab"), "bar");
        assert_eq!(tagger.tag("AB"), "bar");
        assert_eq!(tagger.tag("Other"), "bar");
    }

    #[test]
    fn malformed_lines_are_rejected() {
        let result = LanguageTag::from_tables("eng=English\nnot a pair", "en=eng");
        assert!(matches!(
            result,
            Err(TableError::MalformedEntry { line: 2, .. })
        ));

        let result = LanguageTag::from_tables("=English", "en=eng");
        assert!(matches!(
            result,
            Err(TableError::MalformedEntry { line: 1, .. })
        ));
    }

    #[test]
    fn empty_tables_are_rejected() {
        let result = LanguageTag::from_tables("# only a comment\n\n", "en=eng");
        assert!(matches!(result, Err(TableError::Empty { .. })));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let tagger = LanguageTag::from_tables(
            "# header\n\neng=English\n  # indented comment\ndeu=German\n",
            "en=eng\nde=deu",
        )
        .expect("tables should parse");
        assert_eq!(tagger.tag("German"), "deu");
    }

    mod properties {
        use proptest::prelude::*;

        use super::super::LanguageTag;

        proptest! {
            #[test]
            fn tag_is_idempotent(input in "[ -~]{0,16}") {
                let tagger = LanguageTag::new().expect("embedded tables should parse");
                let once = tagger.tag(&input);
                prop_assert_eq!(tagger.tag(&once), once);
            }

            #[test]
            fn unresolvable_input_round_trips(input in "[0-9_!?]{1,8}") {
                // Digits and punctuation never appear in codes or names.
                let tagger = LanguageTag::new().expect("embedded tables should parse");
                prop_assert_eq!(tagger.tag(&input), input);
            }
        }
    }
}
