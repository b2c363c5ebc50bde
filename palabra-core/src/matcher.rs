use palabra_types::{CharResult, CharStatus};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Forgiving normalization for Spanish vocabulary: case fold, canonical
/// decomposition with combining marks stripped, and an explicit `ñ` → `n`
/// fold. Whitespace is significant and never trimmed; `"nino "` does not
/// match `"niño"`.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c == 'ñ' { 'n' } else { c })
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

fn normalize_char(c: char) -> String {
    normalize(c.encode_utf8(&mut [0u8; 4]))
}

fn chars_match(input: char, target: char) -> bool {
    input.to_lowercase().eq(target.to_lowercase()) || normalize_char(input) == normalize_char(target)
}

/// Whether `input` is a correct completion of `target`. Matching is on
/// the full string, never a prefix, and empty input never matches.
pub fn is_match(input: &str, target: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    input.to_lowercase() == target.to_lowercase() || normalize(input) == normalize(target)
}

/// Per-character correctness of the typed prefix against the target
/// word, independent of whole-word completion. One entry per target
/// character; positions beyond the typed prefix are `Pending`.
pub fn char_feedback(input: &str, target: &str) -> Vec<CharResult> {
    let typed: Vec<char> = input.chars().collect();
    target
        .chars()
        .enumerate()
        .map(|(i, target_char)| {
            let status = match typed.get(i) {
                Some(&typed_char) => {
                    if chars_match(typed_char, target_char) {
                        CharStatus::Correct
                    } else {
                        CharStatus::Incorrect
                    }
                }
                None => CharStatus::Pending,
            };
            CharResult {
                letter: target_char.to_string(),
                status,
                position: i as i32,
            }
        })
        .collect()
}
