//! Syllable counting
//!
//! Vowel-group heuristic: count maximal runs of vowels, drop a silent
//! trailing `e`, and credit a trailing consonant + `le` (`little`,
//! `table`). Any word containing a letter counts at least one syllable.

const VOWELS: &str = "aeiouy";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Count syllables in a single word
pub fn count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect();

    if letters.is_empty() {
        return 0;
    }

    let mut syllables = 0;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            syllables += 1;
        }
        prev_vowel = vowel;
    }

    let n = letters.len();

    // Silent trailing e: "cake", "home" -- but not "le" as in "little"
    if n >= 2 && letters[n - 1] == 'e' && !is_vowel(letters[n - 2]) && syllables > 1 {
        let consonant_le = n >= 3 && letters[n - 2] == 'l' && !is_vowel(letters[n - 3]);
        if !consonant_le {
            syllables -= 1;
        }
    }

    syllables.max(1)
}

/// Total syllables across a sequence of words
pub fn count_all<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| count(w.as_ref())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monosyllables() {
        assert_eq!(count("cat"), 1);
        assert_eq!(count("the"), 1);
        assert_eq!(count("stream"), 1);
        assert_eq!(count("I"), 1);
    }

    #[test]
    fn test_silent_e() {
        assert_eq!(count("cake"), 1);
        assert_eq!(count("home"), 1);
        assert_eq!(count("cookie"), 2);
    }

    #[test]
    fn test_consonant_le() {
        assert_eq!(count("little"), 2);
        assert_eq!(count("table"), 2);
    }

    #[test]
    fn test_polysyllables() {
        assert_eq!(count("banana"), 3);
        assert_eq!(count("overflowing"), 4);
        assert_eq!(count("dementia"), 3);
    }

    #[test]
    fn test_non_letters() {
        assert_eq!(count("123"), 0);
        assert_eq!(count(""), 0);
        assert_eq!(count("don't"), 1);
    }

    #[test]
    fn test_count_all() {
        assert_eq!(count_all(&["the", "little", "banana"]), 6);
    }
}
