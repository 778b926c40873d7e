//! Fixed substitution tables for the romanizer.
//!
//! Both tables are ordered and applied top to bottom as literal substring
//! replacements. Compound sequences (diphthongs, digraphs, long vowels) must
//! stay listed before any rule that could rewrite one of their component
//! symbols out from under them.

/// IPA vowel symbols. A run of these (plus the length mark ː) forms a
/// syllable nucleus during boundary insertion.
pub(super) const VOWELS: &str = "aeiouɑɒɔæɪʊəɜ";

/// Consonant digraphs, applied before the vowel table.
pub(super) const CONSONANTS: &[(&str, &str)] = &[
    ("tʃ", "ch"),
    ("dʒ", "j"),
    ("ʃ", "sh"),
    ("ʒ", "zh"),
    ("θ", "th"),
    ("ð", "dh"),
    ("ŋ", "ng"),
];

/// Vowel clusters and single vowels, longest first.
pub(super) const VOWEL_RULES: &[(&str, &str)] = &[
    ("oʊ", "oh"),
    ("eɪ", "ay"),
    ("aɪ", "eye"),
    ("aʊ", "ow"),
    ("ɔɪ", "oy"),
    ("iː", "ee"),
    ("uː", "oo"),
    ("ɜː", "er"),
    ("ɑː", "ah"),
    ("ɔː", "aw"),
    ("ɪ", "i"),
    ("ʊ", "u"),
    ("ʌ", "uh"),
    ("ə", "uh"),
    ("æ", "a"),
    ("ɑ", "ah"),
    ("ɒ", "o"),
    ("ɔ", "aw"),
];
