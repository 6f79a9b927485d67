use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel text shown in every sentence field until a fetch resolves.
pub const LOADING_SENTENCE_TEXT: &str = "Loading...";
/// Sentinel text for the single placeholder vocabulary entry.
pub const LOADING_WORD_TEXT: &str = "loading...";

/// One annotated line of a folktale: the same text in four renderings.
///
/// Identity is `(story_id, line_number)`. A sentence is immutable once
/// fetched and is only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub story_id: u32,
    pub line_number: u32,
    pub kanji: String,
    pub hiragana: String,
    pub romaji: String,
    pub english: String,
}

static PLACEHOLDER_SENTENCE: Lazy<Sentence> = Lazy::new(|| Sentence {
    story_id: 0,
    line_number: 0,
    kanji: LOADING_SENTENCE_TEXT.to_string(),
    hiragana: LOADING_SENTENCE_TEXT.to_string(),
    romaji: LOADING_SENTENCE_TEXT.to_string(),
    english: LOADING_SENTENCE_TEXT.to_string(),
});

static PLACEHOLDER_WORD: Lazy<Word> = Lazy::new(|| Word {
    line_number: 0,
    word_number: 0,
    kanji: LOADING_WORD_TEXT.to_string(),
    hiragana: LOADING_WORD_TEXT.to_string(),
    english: LOADING_WORD_TEXT.to_string(),
});

impl Sentence {
    /// The sentinel sentence displayed before any fetch resolves.
    pub fn placeholder() -> Self {
        PLACEHOLDER_SENTENCE.clone()
    }

    pub fn is_placeholder(&self) -> bool {
        self.story_id == 0 && self.line_number == 0 && self.kanji == LOADING_SENTENCE_TEXT
    }
}

/// One vocabulary gloss belonging to a sentence line, ordered among its
/// siblings by `word_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub line_number: u32,
    pub word_number: u32,
    pub kanji: String,
    pub hiragana: String,
    pub english: String,
}

impl Word {
    pub fn placeholder() -> Self {
        PLACEHOLDER_WORD.clone()
    }
}

/// Vocabulary entries grouped by the line they annotate. Word order within a
/// line follows `word_number`; line order is irrelevant.
pub type WordsByLine = BTreeMap<u32, Vec<Word>>;

/// Groups a flat word list by line number, sorting each line by word number.
pub fn group_words_by_line(mut words: Vec<Word>) -> WordsByLine {
    words.sort_by_key(|w| w.word_number);
    let mut by_line = WordsByLine::new();
    for word in words {
        by_line.entry(word.line_number).or_default().push(word);
    }
    by_line
}

/// Successful body of the one-sentence endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePayload {
    pub sentence: Sentence,
    pub words: Vec<Word>,
}

/// Upstream response envelope. Only the `success` kind carries data; every
/// other kind means "no update" for the widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "responseType")]
pub enum FetchOutcome<T> {
    #[serde(rename = "success")]
    Success(T),
    #[serde(other)]
    Failure,
}

impl<T> FetchOutcome<T> {
    pub fn success(self) -> Option<T> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            FetchOutcome::Failure => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(line: u32, number: u32, kanji: &str) -> Word {
        Word {
            line_number: line,
            word_number: number,
            kanji: kanji.to_string(),
            hiragana: String::new(),
            english: String::new(),
        }
    }

    #[test]
    fn grouping_keeps_word_order_within_a_line() {
        let grouped = group_words_by_line(vec![
            word(2, 1, "b"),
            word(1, 2, "second"),
            word(1, 1, "first"),
            word(2, 2, "c"),
        ]);
        let line_one: Vec<_> = grouped[&1].iter().map(|w| w.kanji.as_str()).collect();
        assert_eq!(line_one, ["first", "second"]);
        assert_eq!(grouped[&2].len(), 2);
    }

    #[test]
    fn placeholder_word_annotates_placeholder_line() {
        let grouped = group_words_by_line(vec![Word::placeholder()]);
        assert_eq!(grouped[&Sentence::placeholder().line_number].len(), 1);
    }

    #[test]
    fn success_envelope_deserializes() {
        let raw = serde_json::json!({
            "responseType": "success",
            "sentence": {
                "storyId": 7,
                "lineNumber": 3,
                "kanji": "昔々",
                "hiragana": "むかしむかし",
                "romaji": "mukashi mukashi",
                "english": "Once upon a time"
            },
            "words": [{
                "lineNumber": 3,
                "wordNumber": 1,
                "kanji": "昔",
                "hiragana": "むかし",
                "english": "long ago"
            }]
        });
        let outcome: FetchOutcome<SentencePayload> = serde_json::from_value(raw).unwrap();
        let payload = outcome.success().expect("success kind");
        assert_eq!(payload.sentence.story_id, 7);
        assert_eq!(payload.words[0].line_number, 3);
    }

    #[test]
    fn non_success_kind_is_failure() {
        let raw = serde_json::json!({ "responseType": "dbError" });
        let outcome: FetchOutcome<SentencePayload> = serde_json::from_value(raw).unwrap();
        assert_eq!(outcome, FetchOutcome::Failure);
    }
}
