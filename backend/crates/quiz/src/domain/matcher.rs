//! Answer Matcher
//!
//! Lenient answer judging: both sides are normalized, folded through the
//! synonym table, and compared for equality. Quiz answers may list several
//! accepted alternatives.
//!
//! No partial matching and no edit distance. Equality after
//! normalization is the only rule.

use std::collections::HashMap;

/// Characters dropped by [`normalize`]
const STRIPPED_CHARS: &[char] = &[
    '·', '.', '-', '_', '/', '—', ',', '，', '。', '！', '？', '!', ':', '：', ';', '；', '\'',
    '"', '“', '”', '‘', '’', '(', ')', '（', '）', '【', '】', '[', ']',
];

/// Separators between accepted answers in a quiz answer string
const ALTERNATIVE_DELIMITERS: &[char] = &['/', '\\', '|', ',', '，', '、', ';', '；'];

/// Lowercase, then drop whitespace and [`STRIPPED_CHARS`].
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !STRIPPED_CHARS.contains(c))
        .collect()
}

/// Split a quiz answer into its trimmed, non-empty alternatives.
///
/// ```rust
/// use quiz::domain::matcher::parse_alternatives;
///
/// assert_eq!(parse_alternatives("苹果 / apple、 ;"), vec!["苹果", "apple"]);
/// ```
pub fn parse_alternatives(raw: &str) -> Vec<&str> {
    raw.split(ALTERNATIVE_DELIMITERS)
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .collect()
}

/// Raw token → canonical token mapping
///
/// Keys are stored normalized so lookups of [`normalize`]d text hit
/// regardless of how the table author wrote them.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, String>,
}

impl SynonymTable {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(raw, canonical)| (normalize(raw.as_ref()), canonical.into()))
            .filter(|(raw, _)| !raw.is_empty())
            .collect();
        Self { entries }
    }

    /// Canonical token for already-normalized text
    pub fn resolve(&self, normalized: &str) -> Option<&str> {
        self.entries.get(normalized).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Judges user answers against quiz answers
#[derive(Debug, Clone, Default)]
pub struct AnswerMatcher {
    synonyms: SynonymTable,
}

impl AnswerMatcher {
    pub fn new(synonyms: SynonymTable) -> Self {
        Self { synonyms }
    }

    /// Normalized text, replaced by its synonym when the table has one
    pub fn canonical(&self, text: &str) -> String {
        let normalized = normalize(text);
        match self.synonyms.resolve(&normalized) {
            Some(canonical) => canonical.to_string(),
            None => normalized,
        }
    }

    /// True iff the user's answer canonicalizes to the same form as one of
    /// the quiz's accepted alternatives.
    pub fn is_correct(&self, quiz_answer: &str, user_answer: &str) -> bool {
        let user = self.canonical(user_answer);
        if user.is_empty() {
            return false;
        }

        parse_alternatives(quiz_answer)
            .into_iter()
            .any(|candidate| self.canonical(candidate) == user)
    }
}
