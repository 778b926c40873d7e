//! The lexical record model and query normalization.

use serde::{Deserialize, Serialize};

/// Part of speech as reported by the completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Phrase,
}

impl PartOfSpeech {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "Noun" => Some(Self::Noun),
            "Verb" => Some(Self::Verb),
            "Adjective" => Some(Self::Adjective),
            "Adverb" => Some(Self::Adverb),
            "Preposition" => Some(Self::Preposition),
            "Phrase" => Some(Self::Phrase),
            _ => None,
        }
    }

    /// Resolve a possibly-unrecognized label, defaulting by query shape:
    /// multi-word queries read as phrases, everything else as a noun.
    pub fn resolve(label: &str, query_is_phrase: bool) -> Self {
        Self::parse(label).unwrap_or(if query_is_phrase {
            Self::Phrase
        } else {
            Self::Noun
        })
    }

    /// The label the store schema uses.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Noun => "Noun",
            Self::Verb => "V[I/T]",
            Self::Adjective => "Adj.",
            Self::Adverb => "Adv.",
            Self::Preposition => "Prep.",
            Self::Phrase => "Phr.",
        }
    }
}

/// One derived dictionary entry, keyed by `word`.
///
/// `ipa` keeps its interior whitespace so multi-word phrases carry their
/// token boundaries through the stress romanization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalRecord {
    pub word: String,
    pub pos: PartOfSpeech,
    pub definition_jp: String,
    pub example: String,
    pub ipa: String,
    pub stress: String,
    pub katakana: String,
    pub tags: Vec<String>,
}

/// A query containing whitespace or a hyphen is treated as a phrase.
pub fn is_phrase(query: &str) -> bool {
    query.trim().chars().any(|c| c.is_whitespace() || c == '-')
}

const IDIOM_HEAD: &str = "bring";
const IDIOM_TAIL: &str = "to the table";
const IDIOM_CITATION: &str = "bring something to the table";

/// Fold queries of the shape `bring <something> to the table` to the
/// citation form, so every variant lands on one store entry. Matching is
/// ASCII-case-insensitive and word-bounded; other queries pass through
/// trimmed.
pub fn canonicalize(query: &str) -> String {
    let trimmed = query.trim();
    let mut out = String::new();
    let mut pos = 0;
    while let Some((start, end)) = find_idiom(trimmed, pos) {
        out.push_str(&trimmed[pos..start]);
        out.push_str(IDIOM_CITATION);
        pos = end;
    }
    if pos == 0 {
        return trimmed.to_string();
    }
    out.push_str(&trimmed[pos..]);
    out
}

/// Find the next idiom occurrence at or after `from`: the head word, at
/// least one whitespace-bounded word, then the tail ending on a word
/// boundary. Returns the matched byte span.
fn find_idiom(s: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    let mut head_from = from;
    while let Some(head) = find_ascii_ci(s, IDIOM_HEAD, head_from) {
        head_from = head + 1;
        if head > 0 && is_word_byte(bytes[head - 1]) {
            continue;
        }
        let head_end = head + IDIOM_HEAD.len();
        let mut tail_from = head_end;
        while let Some(tail) = find_ascii_ci(s, IDIOM_TAIL, tail_from) {
            tail_from = tail + 1;
            let tail_end = tail + IDIOM_TAIL.len();
            if tail_end < bytes.len() && is_word_byte(bytes[tail_end]) {
                continue;
            }
            let gap = &s[head_end..tail];
            if gap.chars().count() >= 3
                && gap.starts_with(char::is_whitespace)
                && gap.ends_with(char::is_whitespace)
            {
                return Some((head, tail_end));
            }
        }
    }
    None
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn find_ascii_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() || from > h.len() - n.len() {
        return None;
    }
    (from..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_labels() {
        assert_eq!(PartOfSpeech::parse("Noun"), Some(PartOfSpeech::Noun));
        assert_eq!(PartOfSpeech::parse(" Verb "), Some(PartOfSpeech::Verb));
        assert_eq!(PartOfSpeech::parse("Interjection"), None);
        assert_eq!(PartOfSpeech::parse(""), None);
    }

    #[test]
    fn resolve_falls_back_by_query_shape() {
        assert_eq!(
            PartOfSpeech::resolve("Adjective", false),
            PartOfSpeech::Adjective
        );
        assert_eq!(PartOfSpeech::resolve("???", true), PartOfSpeech::Phrase);
        assert_eq!(PartOfSpeech::resolve("???", false), PartOfSpeech::Noun);
    }

    #[test]
    fn display_labels() {
        assert_eq!(PartOfSpeech::Verb.display_label(), "V[I/T]");
        assert_eq!(PartOfSpeech::Phrase.display_label(), "Phr.");
    }

    #[test]
    fn phrase_detection() {
        assert!(!is_phrase("hello"));
        assert!(!is_phrase("  spaced  "));
        assert!(is_phrase("give up"));
        assert!(is_phrase("well-being"));
    }

    #[test]
    fn idiom_folds_to_citation_form() {
        assert_eq!(
            canonicalize("Bring fresh ideas to the table"),
            "bring something to the table"
        );
        assert_eq!(
            canonicalize("She can bring a lot to the table today"),
            "She can bring something to the table today"
        );
    }

    #[test]
    fn idiom_requires_a_middle_word() {
        assert_eq!(canonicalize("bring to the table"), "bring to the table");
    }

    #[test]
    fn idiom_head_must_be_a_whole_word() {
        assert_eq!(
            canonicalize("brings value to the table"),
            "brings value to the table"
        );
    }

    #[test]
    fn non_matching_queries_pass_through_trimmed() {
        assert_eq!(canonicalize("  table  "), "table");
        assert_eq!(canonicalize("democracy"), "democracy");
    }
}
