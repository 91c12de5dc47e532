//! Porter stemming algorithm implementation.
//!
//! M.F. Porter, "An algorithm for suffix stripping" (1980), with the
//! extensions NLTK applies in its default mode:
//!
//! - a small table of irregular forms (`dying` → `die`, `skies` → `sky`)
//! - four-letter `-ies`/`-ied` words keep their `e` (`ties` → `tie`)
//! - terminal `y` → `i` only after a consonant that is not the first letter
//! - step 2 rewrites `-bli`, `-fulli` and `-logi`, and tries `-alli` first
//! - a two-letter vowel-consonant stem counts as ending in cvc
//!
//! Within each step only the first listed suffix that matches is considered;
//! if its condition fails the step leaves the word unchanged. Words are
//! processed as characters, so non-ASCII input never splits a code point.
//!
//! # Examples
//!
//! ```
//! use relata::analysis::token_filter::stem::Stemmer;
//! use relata::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("dying"), "die");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("fulli", "ful"),
];

const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

/// Consonant flag for every character, computed in one left-to-right pass.
///
/// `y` is a consonant at the start of the word or after a vowel.
fn consonant_flags(word: &[char]) -> Vec<bool> {
    let mut flags: Vec<bool> = Vec::with_capacity(word.len());
    for (i, &ch) in word.iter().enumerate() {
        let consonant = match ch {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !flags[i - 1],
            _ => true,
        };
        flags.push(consonant);
    }
    flags
}

/// The measure m of a word in the form [C](VC)^m[V].
fn measure(word: &[char]) -> usize {
    consonant_flags(word)
        .windows(2)
        .filter(|pair| matches!(pair, [false, true]))
        .count()
}

fn contains_vowel(word: &[char]) -> bool {
    consonant_flags(word).iter().any(|&consonant| !consonant)
}

fn ends_with_double_consonant(word: &[char]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && consonant_flags(word).last() == Some(&true)
}

/// Consonant-vowel-consonant ending where the final consonant is not w, x
/// or y; a two-letter vowel-consonant word also qualifies.
fn ends_cvc(word: &[char]) -> bool {
    match consonant_flags(word).as_slice() {
        &[first, second] => !first && second,
        &[.., a, b, c] => a && !b && c && !matches!(word[word.len() - 1], 'w' | 'x' | 'y'),
        _ => false,
    }
}

fn ends_with(word: &[char], suffix: &str) -> bool {
    let k = suffix.chars().count();
    word.len() >= k && word[word.len() - k..].iter().copied().eq(suffix.chars())
}

fn replace_tail(word: &mut Vec<char>, suffix_len: usize, replacement: &str) {
    word.truncate(word.len() - suffix_len);
    word.extend(replacement.chars());
}

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Apply the first rule whose suffix matches, if the remaining stem has a
    /// measure of at least `min_measure`.
    fn apply_rules(word: &mut Vec<char>, rules: &[(&str, &str)], min_measure: usize) {
        let current: &[char] = word;
        let Some(&(suffix, replacement)) = rules
            .iter()
            .find(|(suffix, _)| ends_with(current, suffix))
        else {
            return;
        };

        let suffix_len = suffix.chars().count();
        if measure(&current[..current.len() - suffix_len]) >= min_measure {
            replace_tail(word, suffix_len, replacement);
        }
    }

    fn step1a(word: &mut Vec<char>) {
        if word.len() == 4 && ends_with(word, "ies") {
            word.pop();
        } else if ends_with(word, "sses") || ends_with(word, "ies") {
            word.truncate(word.len() - 2);
        } else if ends_with(word, "ss") {
            // unchanged
        } else if ends_with(word, "s") {
            word.pop();
        }
    }

    fn step1b(word: &mut Vec<char>) {
        if ends_with(word, "ied") {
            if word.len() == 4 {
                word.pop();
            } else {
                word.truncate(word.len() - 2);
            }
            return;
        }

        if ends_with(word, "eed") {
            if measure(&word[..word.len() - 3]) > 0 {
                word.pop();
            }
            return;
        }

        let suffix_len = if ends_with(word, "ed") && contains_vowel(&word[..word.len() - 2]) {
            2
        } else if ends_with(word, "ing") && contains_vowel(&word[..word.len() - 3]) {
            3
        } else {
            return;
        };
        word.truncate(word.len() - suffix_len);

        if ends_with(word, "at") || ends_with(word, "bl") || ends_with(word, "iz") {
            word.push('e');
        } else if ends_with_double_consonant(word) {
            if !matches!(word.last(), Some('l' | 's' | 'z')) {
                word.pop();
            }
        } else if measure(word) == 1 && ends_cvc(word) {
            word.push('e');
        }
    }

    fn step1c(word: &mut [char]) {
        let n = word.len();
        if n > 2 && word[n - 1] == 'y' && consonant_flags(&word[..n - 1])[n - 2] {
            word[n - 1] = 'i';
        }
    }

    fn step2(word: &mut Vec<char>) {
        if ends_with(word, "alli") && measure(&word[..word.len() - 4]) > 0 {
            replace_tail(word, 4, "al");
            return;
        }
        // The `l` stays with the stem, so short stems like "geo" qualify.
        if ends_with(word, "logi") {
            if measure(&word[..word.len() - 3]) > 0 {
                replace_tail(word, 4, "log");
            }
            return;
        }
        Self::apply_rules(word, STEP2_SUFFIXES, 1);
    }

    fn step4(word: &mut Vec<char>) {
        let current: &[char] = word;
        let Some(&suffix) = STEP4_SUFFIXES
            .iter()
            .find(|suffix| ends_with(current, suffix))
        else {
            return;
        };

        let stem = &current[..current.len() - suffix.chars().count()];
        if measure(stem) <= 1 {
            return;
        }
        if suffix == "ion" && !matches!(stem.last(), Some('s' | 't')) {
            return;
        }
        let stem_len = stem.len();
        word.truncate(stem_len);
    }

    fn step5(word: &mut Vec<char>) {
        if ends_with(word, "e") {
            let stem = &word[..word.len() - 1];
            let m = measure(stem);
            if m > 1 || (m == 1 && !ends_cvc(stem)) {
                word.pop();
            }
        }

        if ends_with(word, "ll") && measure(&word[..word.len() - 1]) > 1 {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        if let Some(&(_, stem)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == lowered) {
            return stem.to_string();
        }

        let mut word: Vec<char> = lowered.chars().collect();
        if word.len() <= 2 {
            return lowered;
        }

        Self::step1a(&mut word);
        Self::step1b(&mut word);
        Self::step1c(&mut word);
        Self::step2(&mut word);
        Self::apply_rules(&mut word, STEP3_SUFFIXES, 1);
        Self::step4(&mut word);
        Self::step5(&mut word);

        word.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
