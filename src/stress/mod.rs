//! IPA-to-stress romanization.
//!
//! Converts a phonetic transcription (IPA with ˈ/ˌ stress marks and optional
//! syllable dots) into a hyphen-joined, space-separated romanization whose
//! upper-case syllables mark the stressed ones, e.g. `ˈɡʊd.nɪs` → `GUD-nis`.

mod convert;
mod table;

pub use convert::romanize;
