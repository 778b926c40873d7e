//! Prompt construction and completion-output field parsing.

use crate::record::is_phrase;

/// The labeled fields a completion is asked to emit, one per line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawFields {
    pub pos: String,
    pub definition_jp: String,
    pub example: String,
    pub ipa: String,
    pub katakana: String,
    pub tags: String,
}

/// Build the lexicographer prompt for one query. Phrase-shaped queries get
/// an addendum steering the completion toward idiomatic senses.
pub fn build_prompt(query: &str) -> String {
    let base = format!(
        "You are a lexicographer and register expert. Provide the following for '{query}'.

1) Part of Speech (choose exactly one): Noun | Verb | Adjective | Adverb | Preposition | Phrase
2) Definition in Japanese (accurate, concise)
3) A simple example sentence in **English only**
4) IPA with syllable dots and stress marks (ˈ primary, ˌ secondary), *Cambridge style*. Example: ˌpɑːr.ləˈmen.tri
5) Katakana (Japanese reading)
6) Tags: choose ANY from this fixed set only:
   社会問題, 口語OK, 書き言葉・報道, フォーマル,
   専門用語, 法律用語, ビジネス, Football,
   医学, 科学・技術, IT, スポーツ,
   文化・芸術, 食べ物・料理, 歴史, 政治, 自然・環境
   - Choose up to 2 tags: ideally 1 register tag (口語OK / 書き言葉・報道 / フォーマル) and 1 domain tag.

Return output exactly in the format below (no extra punctuation, no brackets):

Part of Speech: <one of the six>
Definition (JP): <text>
Example Sentence: <English only>
IPA: <IPA with dots and ˈ/ˌ>
Katakana: <カタカナ>
Tags: <comma-separated (<=2) from the allowed set or empty>"
    );

    if is_phrase(query) {
        format!(
            "{base}

IMPORTANT:
- This looks like a MULTI-WORD EXPRESSION (idiom / set phrase / phrasal or fixed expression).
- Prefer idiomatic or set-phrase meanings over literal word-by-word translation.
- If a domain-specific idiom exists (e.g., football/business/news), output THAT sense and select an appropriate domain tag.
- Do NOT output literal meanings when idiomatic use is common."
        )
    } else {
        base
    }
}

/// Pull the six labeled fields out of the completion text. The first line
/// carrying each label wins; missing labels yield empty strings and other
/// lines are ignored.
pub fn parse_fields(text: &str) -> RawFields {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let pick = |label: &str| -> String {
        lines
            .iter()
            .find_map(|line| line.strip_prefix(label))
            .map(|rest| rest.trim().to_string())
            .unwrap_or_default()
    };

    RawFields {
        pos: pick("Part of Speech:"),
        definition_jp: pick("Definition (JP):"),
        example: pick("Example Sentence:"),
        ipa: pick("IPA:"),
        katakana: pick("Katakana:"),
        tags: pick("Tags:"),
    }
}
