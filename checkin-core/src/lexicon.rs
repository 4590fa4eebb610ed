//! Static lexicon: emotion keywords, negation words, intensity modifiers,
//! and idiomatic phrases.
//!
//! Everything here is read-only for the life of the process. Keyword
//! patterns are compiled once on first use.

use std::sync::LazyLock;

use regex::Regex;

use crate::emotion::Emotion;

pub const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't",
    "can't", "cannot", "couldn't", "shouldn't", "wouldn't", "won't",
];

/// Intensity modifiers in declared order. Lookup order decides precedence
/// when several match, so do not sort this table.
pub const INTENSITY_MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.5),
    ("extremely", 2.0),
    ("absolutely", 2.0),
    ("completely", 1.8),
    ("totally", 1.8),
    ("highly", 1.7),
    ("especially", 1.7),
    ("particularly", 1.6),
    ("deeply", 1.8),
    ("terribly", 1.9),
    ("incredibly", 1.9),
    ("super", 1.8),
    ("truly", 1.7),
    ("quite", 1.3),
    ("rather", 1.2),
    ("so", 1.5),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("a bit", 0.6),
    ("a little", 0.6),
    ("kind of", 0.7),
    ("kinda", 0.7),
    ("sort of", 0.7),
    ("barely", 0.4),
    ("hardly", 0.4),
    ("almost", 0.8),
    ("nearly", 0.8),
    ("partially", 0.7),
    ("fairly", 0.8),
    ("just", 0.9),
];

/// An idiom and the partial emotion weights it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionalPhrase {
    pub phrase: &'static str,
    pub weights: &'static [(Emotion, f64)],
}

const fn phrase(phrase: &'static str, weights: &'static [(Emotion, f64)]) -> EmotionalPhrase {
    EmotionalPhrase { phrase, weights }
}

use Emotion::{Anger, Anxiety, Disgust, Fear, Joy, Sadness, Surprise};

pub const EMOTIONAL_PHRASES: &[EmotionalPhrase] = &[
    phrase("over the moon", &[(Joy, 2.0)]),
    phrase("on cloud nine", &[(Joy, 2.0)]),
    phrase("down in the dumps", &[(Sadness, 1.8)]),
    phrase("feeling blue", &[(Sadness, 1.5)]),
    phrase("at the end of my rope", &[(Anxiety, 1.7), (Anger, 1.2)]),
    phrase("losing my mind", &[(Anxiety, 1.8), (Fear, 1.2)]),
    phrase("freaking out", &[(Anxiety, 1.7), (Fear, 1.5)]),
    phrase("fed up", &[(Anger, 1.6), (Disgust, 1.3)]),
    phrase("had it with", &[(Anger, 1.5), (Disgust, 1.2)]),
    phrase("sick and tired", &[(Anger, 1.4), (Disgust, 1.3)]),
    phrase("on edge", &[(Anxiety, 1.6)]),
    phrase("stressed out", &[(Anxiety, 1.7)]),
    phrase("heart is racing", &[(Anxiety, 1.6), (Fear, 1.3)]),
    phrase("butterflies in my stomach", &[(Anxiety, 1.2), (Fear, 0.8), (Joy, 0.7)]),
    phrase("hit the roof", &[(Anger, 1.9)]),
    phrase("lost my temper", &[(Anger, 1.8)]),
    phrase("blown away", &[(Surprise, 1.8)]),
    phrase("blown my mind", &[(Surprise, 1.9)]),
    phrase("beside myself", &[(Surprise, 1.5), (Anxiety, 1.2)]),
    phrase("mixed feelings", &[(Surprise, 0.9), (Anxiety, 0.8)]),
    phrase("on top of the world", &[(Joy, 1.9)]),
    phrase("in heaven", &[(Joy, 1.8)]),
    phrase("in a good mood", &[(Joy, 1.4)]),
    phrase("in a bad mood", &[(Anger, 1.2), (Sadness, 1.1)]),
    phrase("couldn't care less", &[(Disgust, 1.3)]),
    phrase("give a damn", &[(Anger, 1.1)]),
    phrase("breaking my heart", &[(Sadness, 1.9)]),
    phrase("heartbroken", &[(Sadness, 1.9)]),
    phrase("falling apart", &[(Sadness, 1.6), (Anxiety, 1.3)]),
    phrase("cracking up", &[(Anxiety, 1.4), (Sadness, 1.1)]),
    phrase("out of my mind", &[(Anxiety, 1.5), (Fear, 1.2)]),
    phrase("scared to death", &[(Fear, 2.0)]),
    phrase("nervous wreck", &[(Anxiety, 1.9), (Fear, 1.5)]),
    phrase("shaking in my boots", &[(Fear, 1.8)]),
    phrase("creeped out", &[(Fear, 1.4), (Disgust, 1.1)]),
    phrase("grossed out", &[(Disgust, 1.7)]),
    phrase("makes me sick", &[(Disgust, 1.6)]),
    phrase("can't stand", &[(Disgust, 1.5), (Anger, 1.2)]),
    phrase("can't believe", &[(Surprise, 1.5)]),
    phrase("mind blown", &[(Surprise, 1.8)]),
    phrase("taken aback", &[(Surprise, 1.4)]),
    phrase("caught off guard", &[(Surprise, 1.3)]),
    phrase("out of nowhere", &[(Surprise, 1.2)]),
    phrase("lonely", &[(Sadness, 1.4)]),
    phrase("all alone", &[(Sadness, 1.5)]),
    phrase("isolated", &[(Sadness, 1.3), (Fear, 0.7)]),
    phrase("abandoned", &[(Sadness, 1.6), (Anger, 0.9)]),
    phrase("rejected", &[(Sadness, 1.5), (Anger, 0.8)]),
];

const JOY_WORDS: &[&str] = &[
    "happy", "joy", "excited", "glad", "delighted", "pleased", "cheerful", "content", "thrilled",
    "wonderful", "love", "awesome", "great", "ecstatic", "elated", "jubilant", "overjoyed",
    "radiant", "upbeat", "blissful", "blessed", "bright", "charmed", "cheery", "enchanted",
    "enthusiastic", "euphoric", "fantastic", "fortunate", "gleeful", "gratified", "hopeful",
    "jovial", "lively", "lucky", "merry", "optimistic", "playful", "positive", "satisfied",
    "sunny", "thankful", "uplifted", "vibrant", "victorious", "yay", "hooray", "stoked",
];

const SADNESS_WORDS: &[&str] = &[
    "sad", "unhappy", "depressed", "down", "miserable", "gloomy", "hopeless", "grief", "sorrow",
    "disappointed", "hurt", "broken", "blue", "bummed", "crushed", "dejected", "despairing",
    "devastated", "discouraged", "disheartened", "dispirited", "distressed", "downcast", "grim",
    "heartache", "heartbroken", "heartsick", "melancholy", "mournful", "pessimistic",
    "regretful", "somber", "tearful", "troubled", "upset", "weary", "woeful", "defeated",
    "lonely", "isolated", "abandoned", "lost", "empty", "numb",
];

const ANGER_WORDS: &[&str] = &[
    "angry", "mad", "furious", "irritated", "annoyed", "frustrated", "outraged", "irate",
    "enraged", "hostile", "hate", "dislike", "agitated", "aggravated", "bitter", "boiling",
    "cross", "displeased", "exasperated", "fuming", "heated", "indignant", "inflamed",
    "insulted", "offended", "provoked", "resentful", "seething", "vexed", "pissed",
    "worked up", "livid", "heated", "bothered", "infuriated", "incensed", "raging",
];

const FEAR_WORDS: &[&str] = &[
    "afraid", "scared", "fearful", "anxious", "worried", "nervous", "terrified", "panic",
    "dread", "frightened", "apprehensive", "alarmed", "aghast", "cowed", "dreading", "fearsome",
    "frantic", "horrified", "intimidated", "nervous", "overwhelming", "panicky", "petrified",
    "phobic", "shaken", "spooked", "startled", "tense", "threatened", "timid", "trembling",
    "unnerved", "wary", "jumpy", "on edge", "freaked out", "uneasy", "distressed", "flustered",
];

const SURPRISE_WORDS: &[&str] = &[
    "surprised", "shocked", "astonished", "amazed", "startled", "unexpected", "stunned",
    "wonder", "speechless", "bewildered", "dumbfounded", "flabbergasted", "floored",
    "incredulous", "taken aback", "astounded", "awestruck", "blindsided", "dazed", "jolted",
    "rattled", "staggered", "struck", "stupefied", "thunderstruck", "unbelievable",
    "unexpected", "wowed", "mind blown", "blown away",
];

const DISGUST_WORDS: &[&str] = &[
    "disgusted", "repulsed", "revolted", "nauseated", "gross", "sickened", "distaste",
    "aversion", "dislike", "hate", "appalled", "detestable", "disapproving", "disdain",
    "loathing", "offended", "outraged", "repelled", "repugnant", "revolting", "yucky", "creepy",
    "foul", "hideous", "horrid", "nasty", "offensive", "repelling", "vile", "vulgar",
    "wretched", "eww", "yuck", "ugh", "gross out",
];

const ANXIETY_WORDS: &[&str] = &[
    "anxiety", "nervous", "tense", "uneasy", "restless", "stressed", "worried", "apprehensive",
    "panic", "jittery", "agitated", "antsy", "concerned", "disturbed", "edgy", "fidgety",
    "fretful", "irritable", "keyed up", "on edge", "perturbed", "rattled", "ruffled", "shaky",
    "strained", "troubled", "uncomfortable", "uptight", "wound up", "worried sick", "pressured",
    "overwhelmed", "distressed", "frazzled", "anxious", "stressed out", "freaking out",
];

/// Raw keyword lists per emotion, before de-duplication.
pub fn raw_keywords(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Joy => JOY_WORDS,
        Emotion::Sadness => SADNESS_WORDS,
        Emotion::Anger => ANGER_WORDS,
        Emotion::Fear => FEAR_WORDS,
        Emotion::Surprise => SURPRISE_WORDS,
        Emotion::Disgust => DISGUST_WORDS,
        Emotion::Anxiety => ANXIETY_WORDS,
    }
}

/// A trigger word (or short phrase) with its compiled word-boundary pattern.
#[derive(Debug, Clone)]
pub struct Keyword {
    pub text: &'static str,
    pub pattern: Regex,
}

/// Compiled keyword set for one emotion.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    pub emotion: Emotion,
    pub keywords: Vec<Keyword>,
}

static KEYWORD_SETS: LazyLock<Vec<KeywordSet>> = LazyLock::new(|| {
    Emotion::ALL
        .into_iter()
        .map(|emotion| {
            let mut keywords: Vec<Keyword> = Vec::new();
            for &text in raw_keywords(emotion) {
                if keywords.iter().any(|k| k.text == text) {
                    continue;
                }
                // ASCII word boundaries: accented letters next to a keyword
                // do not block the match.
                let source = format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(text));
                let pattern = Regex::new(&source).expect("escaped keyword pattern");
                keywords.push(Keyword { text, pattern });
            }
            KeywordSet { emotion, keywords }
        })
        .collect()
});

/// Compiled keyword sets, one per emotion, in declared emotion order.
pub fn keyword_sets() -> &'static [KeywordSet] {
    &KEYWORD_SETS
}

/// Strip every non-word character and lowercase.
///
/// Word characters are ASCII letters, digits, and `_`.
pub fn strip_non_word(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// True if `token`, stripped of non-word characters, is listed in
/// [`NEGATION_WORDS`] as written.
///
/// Stripping removes apostrophes, so contractions such as `don't` never
/// match; only `not`, `no`, `never` and `cannot` negate here.
pub fn is_negation_word(token: &str) -> bool {
    let stripped = strip_non_word(token);
    !stripped.is_empty() && NEGATION_WORDS.contains(&stripped.as_str())
}

/// True if `word` is a negator as written, apostrophe included.
///
/// Curly apostrophes are read as `'`.
pub fn is_negator(word: &str) -> bool {
    let word = word.to_lowercase().replace('\u{2019}', "'");
    NEGATION_WORDS.contains(&word.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_sets_deduplicate() {
        let fear = keyword_sets().iter().find(|s| s.emotion == Emotion::Fear).unwrap();
        let nervous = fear.keywords.iter().filter(|k| k.text == "nervous").count();
        assert_eq!(nervous, 1);
        assert!(fear.keywords.len() < FEAR_WORDS.len());
    }

    #[test]
    fn test_keyword_sets_follow_declared_order() {
        let order: Vec<Emotion> = keyword_sets().iter().map(|s| s.emotion).collect();
        assert_eq!(order, Emotion::ALL.to_vec());
    }

    #[test]
    fn test_keyword_pattern_respects_word_boundaries() {
        let joy = &keyword_sets()[0];
        let joy_kw = joy.keywords.iter().find(|k| k.text == "joy").unwrap();
        assert!(joy_kw.pattern.is_match("pure JOY today"));
        assert!(!joy_kw.pattern.is_match("enjoyable"));
    }

    #[test]
    fn test_stripped_negation_words() {
        assert!(is_negation_word("not"));
        assert!(is_negation_word("Never,"));
        assert!(is_negation_word("cannot."));
        assert!(!is_negation_word("now"));
        assert!(!is_negation_word("..."));
    }

    #[test]
    fn test_stripped_contractions_do_not_negate() {
        for word in ["don't", "Don't", "dont", "can’t", "won't", "isn't"] {
            assert!(!is_negation_word(word), "{word} should not negate");
        }
    }

    #[test]
    fn test_negator_keeps_apostrophe() {
        assert!(is_negator("Don't"));
        assert!(is_negator("can’t"));
        assert!(is_negator("never"));
        assert!(!is_negator("dont"));
    }

    #[test]
    fn test_keyword_boundary_is_ascii_only() {
        let joy = &keyword_sets()[0];
        let happy = joy.keywords.iter().find(|k| k.text == "happy").unwrap();
        assert!(happy.pattern.is_match("happyé"));
        assert!(happy.pattern.is_match("éhappy"));
        assert!(!happy.pattern.is_match("unhappy"));
    }

    #[test]
    fn test_modifier_weights_in_range() {
        for (m, w) in INTENSITY_MODIFIERS {
            assert!((0.4..=2.0).contains(w), "{m} has weight {w}");
        }
    }
}
