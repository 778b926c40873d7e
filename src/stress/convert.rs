use super::table::{CONSONANTS, VOWELS, VOWEL_RULES};

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

fn is_stress_mark(c: char) -> bool {
    matches!(c, 'ˈ' | 'ˌ')
}

/// Insert syllable dots into one phonetic token where the transcription
/// lacks them: before every stress mark not already preceded by a dot, and
/// after a consonant cluster that separates two vowel nuclei. Runs of dots
/// collapse to one, so the whole pass is idempotent.
fn insert_boundaries(token: &str) -> String {
    let mut marked = String::with_capacity(token.len() + 8);
    for c in token.chars() {
        if is_stress_mark(c) && !marked.ends_with('.') {
            marked.push('.');
        }
        marked.push(c);
    }

    let chars: Vec<char> = marked.chars().collect();
    let mut dotted = String::with_capacity(marked.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        match cluster_end(&chars, i) {
            Some(end) => {
                dotted.extend(&chars[i..end]);
                dotted.push('.');
                i = end;
            }
            None => {
                dotted.push(chars[i]);
                i += 1;
            }
        }
    }

    let mut collapsed = String::with_capacity(dotted.len());
    for c in dotted.chars() {
        if c == '.' && collapsed.ends_with('.') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}

/// Match a nucleus-plus-cluster run starting at `i` that is immediately
/// followed by another vowel: one or more vowel/length-mark characters, then
/// one or more characters that are neither vowel, stress mark, nor dot.
/// Returns the index one past the cluster, or `None` when no split applies.
///
/// The nucleus is matched longest-first; giving a trailing length mark back
/// to the cluster keeps inputs like `ɑːɪ` splitting between the nuclei.
fn cluster_end(chars: &[char], i: usize) -> Option<usize> {
    let mut nucleus = i;
    while nucleus < chars.len() && (is_vowel(chars[nucleus]) || chars[nucleus] == 'ː') {
        nucleus += 1;
    }
    while nucleus > i {
        let mut end = nucleus;
        while end < chars.len()
            && !is_vowel(chars[end])
            && !is_stress_mark(chars[end])
            && chars[end] != '.'
        {
            end += 1;
        }
        if end > nucleus && end < chars.len() && is_vowel(chars[end]) {
            return Some(end);
        }
        nucleus -= 1;
    }
    None
}

/// Map one bare syllable (stress marks already stripped) to a lowercase
/// Latin approximation. When substitution strips everything away, the
/// original syllable is returned untouched so the output is never empty.
fn substitute_phonemes(syllable: &str) -> String {
    let mut s = syllable.to_string();
    for &(pattern, replacement) in CONSONANTS {
        s = s.replace(pattern, replacement);
    }
    for &(pattern, replacement) in VOWEL_RULES {
        s = s.replace(pattern, replacement);
    }
    s = s.replace('ː', "");
    s = s.replace('ɡ', "g").replace('ɫ', "l");
    // Also rewrites the "j" the dʒ rule just produced, so dʒ lands on "y".
    s = s.replace('j', "y");
    let s = s.to_lowercase();
    let s = s.trim();
    if s.is_empty() {
        syllable.to_string()
    } else {
        s.to_string()
    }
}

/// Romanize a full IPA transcription, one token per word, encoding stress as
/// upper case.
///
/// Enclosing transcription delimiters (slashes, brackets, stray spaces) are
/// stripped from the ends only, each whitespace-separated token is
/// syllabified and substituted, and stressed syllables render upper case,
/// primary and secondary stress alike. Tokens that come out as a single
/// syllable are upper-cased whole. Word count and order survive into the
/// space-joined result. Empty input yields an empty string; this function
/// never fails.
pub fn romanize(ipa: &str) -> String {
    let core = ipa
        .trim()
        .trim_matches(|c| matches!(c, '/' | '[' | ']' | ' '));
    if core.is_empty() {
        return String::new();
    }

    let mut words = Vec::new();
    for token in core.split_whitespace() {
        let dotted = insert_boundaries(token);
        let mut syllables = Vec::new();
        for syllable in dotted.split('.').filter(|s| !s.is_empty()) {
            let stressed = syllable.starts_with(['ˈ', 'ˌ']);
            let bare = syllable.trim_start_matches(['ˈ', 'ˌ']);
            let roman = substitute_phonemes(bare);
            syllables.push(if stressed {
                roman.to_uppercase()
            } else {
                roman.to_lowercase()
            });
        }
        let mut word = syllables.join("-").replace(['ˈ', 'ˌ'], "");
        if syllables.len() == 1 {
            word = word.to_uppercase();
        }
        words.push(word);
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_syllable_renders_upper() {
        assert_eq!(romanize("kæt"), "KAT");
    }

    #[test]
    fn stressed_first_syllable() {
        assert_eq!(romanize("ˈɡʊd.nɪs"), "GUD-nis");
    }

    #[test]
    fn secondary_stress_renders_like_primary() {
        assert_eq!(romanize("ˌɡʊd.nɪs"), "GUD-nis");
    }

    #[test]
    fn delimiters_stripped_from_ends() {
        assert_eq!(romanize("/ˈɡʊd.nɪs/"), "GUD-nis");
        assert_eq!(romanize("[kæt]"), "KAT");
        assert_eq!(romanize("  / kæt / "), "KAT");
    }

    #[test]
    fn empty_and_blank_inputs_yield_empty() {
        assert_eq!(romanize(""), "");
        assert_eq!(romanize("   "), "");
        assert_eq!(romanize(" / [ ] / "), "");
    }

    #[test]
    fn multi_word_count_and_order_preserved() {
        let out = romanize("ˈnɛt.wɚk ˈleɪ.tən.si");
        let tokens: Vec<&str> = out.split(' ').collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], "LAY-tuhn-si");
    }

    #[test]
    fn stress_mark_without_dots_starts_a_syllable() {
        assert_eq!(romanize("heˈloʊ"), "he-LOH");
    }

    #[test]
    fn diphthong_matches_as_a_unit() {
        assert_eq!(substitute_phonemes("boʊt"), "boht");
        assert_eq!(romanize("boʊt"), "BOHT");
    }

    #[test]
    fn consonant_digraph_is_atomic() {
        assert_eq!(substitute_phonemes("tʃɪp"), "chip");
    }

    #[test]
    fn voiced_affricate_lands_on_y() {
        assert_eq!(substitute_phonemes("dʒʌst"), "yuhst");
        assert_eq!(romanize("dʒʌst"), "YUHST");
    }

    #[test]
    fn stripped_out_syllable_falls_back_to_input() {
        assert_eq!(substitute_phonemes("ː"), "ː");
    }

    #[test]
    fn unknown_symbols_pass_through() {
        assert_eq!(romanize("ˈnɛt"), "NƐT");
    }

    #[test]
    fn boundaries_inserted_before_stress_marks() {
        assert_eq!(insert_boundaries("ˈɡʊd.nɪs"), ".ˈɡʊd.nɪs");
    }

    #[test]
    fn clusters_between_nuclei_are_split() {
        assert_eq!(insert_boundaries("pɑːrləmentri"), "pɑːrl.əm.entr.i");
    }

    #[test]
    fn length_mark_may_join_the_cluster() {
        assert_eq!(insert_boundaries("ɑːɪ"), "ɑː.ɪ");
    }

    #[test]
    fn boundary_insertion_is_idempotent() {
        for token in [
            "ˈɡʊd.nɪs",
            "ˌpɑːr.ləˈmen.tri",
            "ˈpɑːrləˌmentri",
            "pɑːrləmentri",
            "kæt",
            "ɑːɪ",
            "əˈbaʊt",
            "heˈloʊ",
        ] {
            let once = insert_boundaries(token);
            assert_eq!(insert_boundaries(&once), once, "token: {token}");
        }
    }

    #[test]
    fn double_dots_collapse() {
        assert_eq!(insert_boundaries("ɡʊd..nɪs"), "ɡʊd.nɪs");
    }
}
