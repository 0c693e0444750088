//! Coarse part-of-speech tagger
//!
//! Rule/lexicon tagger over normalized word tokens. Closed classes come
//! from static lexicons, frequent irregular open-class words from a small
//! lookup, and the rest falls through suffix rules to a noun default.
//! This stands in for a statistical tagger: the four rates the feature set
//! needs (noun, pronoun, adjective, verb) only require coarse tags.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Coarse part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
    Number,
    Other,
}

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "this",
    "that", "these", "those", "who", "whom", "whose", "which", "what", "somebody", "someone",
    "something", "anybody", "anyone", "anything", "everybody", "everyone", "everything", "nobody",
    "nothing", "one", "it's", "that's", "he's", "she's", "there's", "what's", "who's", "i'm",
    "you're", "we're", "they're", "i've", "you've", "we've", "they've", "i'll", "you'll", "he'll",
    "she'll", "we'll", "they'll", "i'd", "you'd", "he'd", "she'd", "we'd", "they'd",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "some", "any", "no", "every", "each", "either", "neither", "another",
    "such", "both", "all", "few", "many", "much", "more", "most", "several",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "without", "about", "against", "between",
    "into", "onto", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "out", "off", "over", "under", "near", "around", "among", "behind", "beside",
    "inside", "outside", "like",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while", "if",
    "unless", "until", "when", "whenever", "where", "wherever", "since", "as", "than", "whether",
];

const INTERJECTIONS: &[&str] = &[
    "uh", "um", "er", "ah", "oh", "hm", "hmm", "mhm", "huh", "eh", "yeah", "yep", "yes", "okay",
    "ok", "wow", "hey", "hi", "hello", "oops", "gosh", "gee",
];

const ADVERBS: &[&str] = &[
    "not", "very", "really", "just", "now", "then", "here", "there", "always", "never", "often",
    "sometimes", "usually", "again", "soon", "still", "already", "too", "also", "maybe",
    "perhaps", "quite", "rather", "almost", "away", "back", "together", "once", "twice", "even",
    "ever", "well", "how", "why", "n't", "anymore", "instead",
];

/// Frequent irregular verbs and auxiliaries that suffix rules would miss
const COMMON_VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may",
    "might", "must", "get", "gets", "got", "gotten", "go", "goes", "went", "gone", "say", "says",
    "said", "see", "sees", "saw", "seen", "know", "knows", "knew", "known", "think", "thinks",
    "thought", "want", "wants", "come", "comes", "came", "take", "takes", "took", "taken",
    "make", "makes", "made", "look", "looks", "put", "puts", "tell", "tells", "told", "give",
    "gives", "gave", "given", "find", "finds", "found", "let", "lets", "keep", "keeps", "kept",
    "stand", "stands", "stood", "fall", "falls", "fell", "fallen", "run", "runs", "ran",
    "sit", "sits", "sat", "eat", "eats", "ate", "eaten", "begin", "begins", "began", "begun",
    "don't", "doesn't", "didn't", "can't", "cannot", "won't", "couldn't", "wouldn't",
    "shouldn't", "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't", "hadn't", "ain't",
];

/// Frequent adjectives that no suffix rule covers
const COMMON_ADJECTIVES: &[&str] = &[
    "good", "bad", "big", "little", "old", "new", "young", "long", "short", "high", "low",
    "great", "small", "nice", "pretty", "happy", "sad", "hot", "cold", "right", "wrong", "full",
    "empty", "hard", "easy", "fast", "slow", "early", "late", "other", "same", "different",
    "important", "sure", "ready", "busy", "fine", "warm", "clean", "dirty", "dark", "light",
    "deep", "rich", "poor", "strong", "weak", "tired", "first", "last", "next", "only", "own",
];

static PRONOUN_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PRONOUNS.iter().copied().collect());
static DETERMINER_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DETERMINERS.iter().copied().collect());
static PREPOSITION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PREPOSITIONS.iter().copied().collect());
static CONJUNCTION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CONJUNCTIONS.iter().copied().collect());
static INTERJECTION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INTERJECTIONS.iter().copied().collect());
static ADVERB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ADVERBS.iter().copied().collect());
static VERB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_VERBS.iter().copied().collect());
static ADJECTIVE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_ADJECTIVES.iter().copied().collect());

/// Coarse POS tagger
#[derive(Debug, Clone, Default)]
pub struct PosTagger;

impl PosTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag a normalized (lowercase) word
    pub fn tag(&self, word: &str) -> PosTag {
        if word.is_empty() {
            return PosTag::Other;
        }
        if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return PosTag::Number;
        }

        // Closed classes first: they are unambiguous at this granularity
        if INTERJECTION_SET.contains(word) {
            return PosTag::Interjection;
        }
        if PRONOUN_SET.contains(word) {
            return PosTag::Pronoun;
        }
        if DETERMINER_SET.contains(word) {
            return PosTag::Determiner;
        }
        if PREPOSITION_SET.contains(word) {
            return PosTag::Preposition;
        }
        if CONJUNCTION_SET.contains(word) {
            return PosTag::Conjunction;
        }
        if ADVERB_SET.contains(word) {
            return PosTag::Adverb;
        }
        if VERB_SET.contains(word) {
            return PosTag::Verb;
        }
        if ADJECTIVE_SET.contains(word) {
            return PosTag::Adjective;
        }

        self.tag_by_suffix(word)
    }

    /// Tag a sequence of normalized words
    pub fn tag_all(&self, words: &[String]) -> Vec<PosTag> {
        words.iter().map(|w| self.tag(w)).collect()
    }

    fn tag_by_suffix(&self, word: &str) -> PosTag {
        // Short unknown words carry too little signal for suffix rules
        if word.len() >= 4 {
            for suffix in ["tion", "sion", "ment", "ness", "ship", "hood", "ism", "ity", "ance", "ence"] {
                if word.ends_with(suffix) {
                    return PosTag::Noun;
                }
            }
            for suffix in ["ous", "ful", "ive", "able", "ible", "ish", "less", "est"] {
                if word.ends_with(suffix) {
                    return PosTag::Adjective;
                }
            }
            if word.ends_with("ly") {
                return PosTag::Adverb;
            }
            for suffix in ["ing", "ed", "ize", "ise", "ify"] {
                if word.ends_with(suffix) {
                    return PosTag::Verb;
                }
            }
        }

        PosTag::Noun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_classes() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("she"), PosTag::Pronoun);
        assert_eq!(tagger.tag("the"), PosTag::Determiner);
        assert_eq!(tagger.tag("under"), PosTag::Preposition);
        assert_eq!(tagger.tag("because"), PosTag::Conjunction);
        assert_eq!(tagger.tag("um"), PosTag::Interjection);
    }

    #[test]
    fn test_common_verbs_and_adjectives() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("went"), PosTag::Verb);
        assert_eq!(tagger.tag("doesn't"), PosTag::Verb);
        assert_eq!(tagger.tag("little"), PosTag::Adjective);
    }

    #[test]
    fn test_suffix_rules() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("stealing"), PosTag::Verb);
        assert_eq!(tagger.tag("overflowed"), PosTag::Verb);
        assert_eq!(tagger.tag("quickly"), PosTag::Adverb);
        assert_eq!(tagger.tag("beautiful"), PosTag::Adjective);
        assert_eq!(tagger.tag("confusion"), PosTag::Noun);
    }

    #[test]
    fn test_noun_default() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("cookie"), PosTag::Noun);
        assert_eq!(tagger.tag("sink"), PosTag::Noun);
    }

    #[test]
    fn test_numbers() {
        let tagger = PosTagger::new();
        assert_eq!(tagger.tag("42"), PosTag::Number);
        assert_eq!(tagger.tag("3.5"), PosTag::Number);
    }
}
