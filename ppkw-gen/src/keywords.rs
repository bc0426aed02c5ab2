//! Keyword list handling.
//!
//! A [`KeywordSet`] is the configuration value fed to the generator: an
//! ordered, duplicate-free list of identifier-like keywords. It can be built
//! from any iterator of strings (declaration order is preserved) or parsed
//! from a keyword-list file.

use crate::KeywordError;
use once_cell::sync::Lazy;
use regex::Regex;
use smartstring::alias::String;
use std::collections::HashSet;

/// Preprocessor directives and predefined macros recognised by default.
const PREPROCESSOR_KEYWORDS: &[&str] = &[
    "define",
    "elif",
    "else",
    "endif",
    "error",
    "if",
    "ifdef",
    "ifndef",
    "include",
    "line",
    "pragma",
    "undef",
    "defined",
    "message",
    "pack_matrix",
    "warning",
    "once",
    "default",
    "disable",
    "__LINE__",
    "__FILE__",
    "__DATE__",
    "__TIME__",
    "__FUNCTION__",
    "__VA_ARGS__",
    "__FUNC__",
];

static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)--.*$").unwrap());

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\r\n]").unwrap());

/// An ordered, duplicate-free list of keywords.
///
/// # Examples
/// ```rust
/// # use ppkw_gen::KeywordSet;
/// let set = KeywordSet::new(["ifdef", "if", "ifdef"]).unwrap();
/// assert_eq!(set.iter().collect::<Vec<_>>(), ["ifdef", "if"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Builds a set from `keywords`, keeping the first occurrence of each
    /// keyword in the order given.
    pub fn new<I, S>(keywords: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut out = Vec::new();
        for (index, keyword) in keywords.into_iter().enumerate() {
            let keyword = keyword.as_ref();
            validate(index, keyword)?;
            let keyword = String::from(keyword);
            if seen.insert(keyword.clone()) {
                out.push(keyword);
            }
        }
        Ok(Self { keywords: out })
    }

    /// Parses a keyword list.
    ///
    /// Entries are separated by commas or line breaks, `--` starts a comment
    /// running to the end of the line, surrounding whitespace is trimmed and
    /// blank entries are dropped. The result is sorted by byte value.
    pub fn parse(text: &str) -> Result<Self, KeywordError> {
        let text = COMMENT_RE.replace_all(text, "");
        let mut entries: Vec<&str> = SEPARATOR_RE
            .split(&text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        entries.sort_unstable();
        Self::new(entries)
    }

    /// The built-in preprocessor keyword list, sorted by byte value.
    pub fn preprocessor() -> Self {
        let mut keywords: Vec<String> = PREPROCESSOR_KEYWORDS.iter().map(|&k| k.into()).collect();
        keywords.sort();
        keywords.dedup();
        Self { keywords }
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Keywords in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.keywords.iter().map(|k| k.as_str())
    }
}

fn validate(index: usize, keyword: &str) -> Result<(), KeywordError> {
    if keyword.is_empty() {
        return Err(KeywordError::Empty { index });
    }
    if KEYWORD_RE.is_match(keyword) {
        return Ok(());
    }
    let offending = keyword
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        .unwrap_or_default();
    Err(KeywordError::Invalid {
        keyword: keyword.to_owned(),
        offending,
    })
}
