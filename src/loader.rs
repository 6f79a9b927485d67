//! Sentence loading state machine.
//!
//! A loader owns the sentence/vocabulary pair for one widget instance. It
//! starts in a placeholder state, issues at most one request per
//! `(story_name, line_number)` change, and swaps both the sentence and its
//! words in a single step when a success response arrives. Failures of any
//! kind leave the prior state untouched.
//!
//! Responses are matched against a monotonically increasing request sequence:
//! only the newest issued ticket may apply, so a slow response from a
//! superseded request is discarded instead of clobbering fresher data.

use crate::client::StoriesClient;
use crate::model::{
    FetchOutcome, Sentence, SentencePayload, Word, WordsByLine, group_words_by_line,
};

/// Proof that a fetch was started; carries the request sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone)]
pub struct SentenceLoader {
    sentence: Sentence,
    words: WordsByLine,
    issued: u64,
}

impl Default for SentenceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceLoader {
    /// A loader holding the placeholder sentence and one placeholder word.
    pub fn new() -> Self {
        Self {
            sentence: Sentence::placeholder(),
            words: group_words_by_line(vec![Word::placeholder()]),
            issued: 0,
        }
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    pub fn words(&self) -> &WordsByLine {
        &self.words
    }

    /// Words annotating the currently displayed sentence, if any.
    pub fn current_words(&self) -> &[Word] {
        self.words
            .get(&self.sentence.line_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Registers a fetch for the given position. Returns `None` without
    /// issuing a ticket when the story name is empty or the line is 0; the
    /// loader then stays in its prior state indefinitely.
    pub fn request(&mut self, story_name: &str, line_number: u32) -> Option<RequestTicket> {
        if story_name.is_empty() || line_number == 0 {
            return None;
        }
        self.issued += 1;
        Some(RequestTicket(self.issued))
    }

    /// Applies a resolved response. Returns `true` when the loader state
    /// changed. Stale tickets (a newer request was issued since) and
    /// non-success outcomes are ignored.
    pub fn apply(&mut self, ticket: RequestTicket, outcome: FetchOutcome<SentencePayload>) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        match outcome {
            FetchOutcome::Success(payload) => {
                // Sentence and words move together; the widget never sees a
                // half-updated pair.
                self.sentence = payload.sentence;
                self.words = group_words_by_line(payload.words);
                true
            }
            FetchOutcome::Failure => false,
        }
    }

    /// Drives request → fetch → apply end to end. Transport errors behave
    /// like non-success responses: the prior state persists.
    pub async fn load(
        &mut self,
        client: &StoriesClient,
        story_name: &str,
        line_number: u32,
    ) -> bool {
        let Some(ticket) = self.request(story_name, line_number) else {
            return false;
        };
        match client.get_one_sentence(story_name, line_number).await {
            Ok(outcome) => self.apply(ticket, outcome),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LOADING_SENTENCE_TEXT;

    fn payload(story_id: u32, line: u32, english: &str) -> SentencePayload {
        SentencePayload {
            sentence: Sentence {
                story_id,
                line_number: line,
                kanji: format!("漢字{line}"),
                hiragana: format!("ひらがな{line}"),
                romaji: format!("romaji{line}"),
                english: english.to_string(),
            },
            words: vec![Word {
                line_number: line,
                word_number: 1,
                kanji: "桃".to_string(),
                hiragana: "もも".to_string(),
                english: "peach".to_string(),
            }],
        }
    }

    #[test]
    fn starts_with_placeholder_sentinel() {
        let loader = SentenceLoader::new();
        assert!(loader.sentence().is_placeholder());
        assert_eq!(loader.sentence().english, LOADING_SENTENCE_TEXT);
        assert_eq!(loader.current_words().len(), 1);
    }

    #[test]
    fn success_replaces_sentence_and_words_together() {
        let mut loader = SentenceLoader::new();
        let ticket = loader.request("momotaro--oni_island", 3).unwrap();
        let sent = payload(7, 3, "He went to the island.");
        assert!(loader.apply(ticket, FetchOutcome::Success(sent.clone())));
        assert_eq!(loader.sentence(), &sent.sentence);
        assert_eq!(loader.current_words(), sent.words.as_slice());
    }

    #[test]
    fn blank_inputs_issue_no_request() {
        let mut loader = SentenceLoader::new();
        assert!(loader.request("", 3).is_none());
        assert!(loader.request("momotaro", 0).is_none());
        assert!(loader.sentence().is_placeholder());
    }

    #[test]
    fn failure_keeps_last_good_state() {
        let mut loader = SentenceLoader::new();
        let first = loader.request("momotaro", 1).unwrap();
        let good = payload(7, 1, "Once upon a time.");
        assert!(loader.apply(first, FetchOutcome::Success(good.clone())));

        let second = loader.request("momotaro", 2).unwrap();
        assert!(!loader.apply(second, FetchOutcome::Failure));
        assert_eq!(loader.sentence(), &good.sentence);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut loader = SentenceLoader::new();
        let old = loader.request("momotaro", 1).unwrap();
        let new = loader.request("momotaro", 2).unwrap();

        let newest = payload(7, 2, "newest");
        assert!(loader.apply(new, FetchOutcome::Success(newest.clone())));
        // The slow response for the superseded request resolves afterwards.
        assert!(!loader.apply(old, FetchOutcome::Success(payload(7, 1, "stale"))));
        assert_eq!(loader.sentence(), &newest.sentence);
    }

    #[test]
    fn mismatched_line_renders_no_words() {
        let mut loader = SentenceLoader::new();
        let ticket = loader.request("momotaro", 5).unwrap();
        let mut sent = payload(7, 5, "line five");
        // Words annotate a different line than the displayed sentence.
        sent.words[0].line_number = 9;
        assert!(loader.apply(ticket, FetchOutcome::Success(sent)));
        assert!(loader.current_words().is_empty());
    }
}
