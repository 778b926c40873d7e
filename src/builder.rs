//! Record build pipeline: query → completion → parsed lexical record.

use crate::llm::{CompletionBackend, LlmError};
use crate::prompt::{build_prompt, parse_fields};
use crate::record::{canonicalize, is_phrase, LexicalRecord, PartOfSpeech};
use crate::stress;
use crate::tags;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("completion failed: {0}")]
    Completion(#[from] LlmError),
}

/// Build a full lexical record for one query.
///
/// Field gaps degrade instead of failing: a missing IPA line yields an empty
/// stress rendering, and unusable tags fall back to the keyword heuristic.
pub fn build_record(
    backend: &dyn CompletionBackend,
    query: &str,
) -> Result<LexicalRecord, BuildError> {
    let word = canonicalize(query);
    let phrase = is_phrase(&word);
    let prompt = build_prompt(&word);
    let output = backend.complete(&prompt)?;
    let fields = parse_fields(&output);

    // Keep interior spaces: they are the word boundaries of a phrase.
    let ipa = fields
        .ipa
        .trim_matches(|c| matches!(c, '[' | ']' | '/' | ' '))
        .to_string();
    let stress = stress::romanize(&ipa);

    let mut tag_list = tags::sanitize_tags(&fields.tags);
    if tag_list.is_empty() {
        tag_list = tags::heuristic_tags(&word);
        tag_list.sort_unstable();
    }

    tracing::debug!(word = %word, stress = %stress, "record built");
    Ok(LexicalRecord {
        word,
        pos: PartOfSpeech::resolve(&fields.pos, phrase),
        definition_jp: fields.definition_jp,
        example: fields.example,
        ipa,
        stress,
        katakana: fields.katakana,
        tags: tag_list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend(&'static str);

    impl CompletionBackend for FixedBackend {
        fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingBackend;

    impl CompletionBackend for FailingBackend {
        fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Http("connection refused".to_string()))
        }
    }

    #[test]
    fn full_record_from_completion() {
        let backend = FixedBackend(
            "Part of Speech: Noun\n\
             Definition (JP): 良さ\n\
             Example Sentence: Goodness is rare.\n\
             IPA: /ˈɡʊd.nɪs/\n\
             Katakana: グッドネス\n\
             Tags: フォーマル",
        );
        let record = build_record(&backend, "goodness").unwrap();
        assert_eq!(record.word, "goodness");
        assert_eq!(record.pos, PartOfSpeech::Noun);
        assert_eq!(record.ipa, "ˈɡʊd.nɪs");
        assert_eq!(record.stress, "GUD-nis");
        assert_eq!(record.katakana, "グッドネス");
        assert_eq!(record.tags, vec!["フォーマル"]);
    }

    #[test]
    fn unusable_tags_fall_back_to_heuristic() {
        let backend = FixedBackend("Part of Speech: Noun\nTags: NotATag, AlsoWrong");
        let record = build_record(&backend, "lawsuit").unwrap();
        assert_eq!(record.tags, vec!["法律用語"]);
    }

    #[test]
    fn missing_ipa_means_empty_stress() {
        let backend = FixedBackend("Part of Speech: Noun\nDefinition (JP): 謎");
        let record = build_record(&backend, "enigma").unwrap();
        assert_eq!(record.ipa, "");
        assert_eq!(record.stress, "");
    }

    #[test]
    fn unknown_pos_resolves_by_query_shape() {
        let backend = FixedBackend("Part of Speech: Interjection");
        let record = build_record(&backend, "give up").unwrap();
        assert_eq!(record.pos, PartOfSpeech::Phrase);
        let record = build_record(&backend, "cat").unwrap();
        assert_eq!(record.pos, PartOfSpeech::Noun);
    }

    #[test]
    fn phrase_ipa_keeps_word_count() {
        let backend = FixedBackend("IPA: /ˈnɛt.wɚk ˈleɪ.tən.si/");
        let record = build_record(&backend, "network latency").unwrap();
        assert_eq!(record.stress.split(' ').count(), 2);
    }

    #[test]
    fn idiom_query_is_canonicalized() {
        let backend = FixedBackend("Part of Speech: Phrase");
        let record = build_record(&backend, "bring more to the table").unwrap();
        assert_eq!(record.word, "bring something to the table");
    }

    #[test]
    fn completion_errors_propagate() {
        let err = build_record(&FailingBackend, "cat").unwrap_err();
        assert!(matches!(err, BuildError::Completion(_)));
    }
}
