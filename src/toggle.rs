//! Visibility state machine for the vocabulary list beneath a sentence.

use crate::model::{Word, WordsByLine};

/// Duration of the expand/collapse transition, in milliseconds.
pub const COLLAPSE_TIMEOUT_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// The affordance offered to the viewer, when there is anything to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Show,
    Hide,
}

impl Affordance {
    pub fn label(&self) -> &'static str {
        match self {
            Affordance::Show => "▼　Show vocabulary list",
            Affordance::Hide => "▲　Hide vocabulary list",
        }
    }
}

/// Two-state toggle: hidden (initial) ⇄ shown, for the life of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VocabularyToggle {
    state: Visibility,
}

impl VocabularyToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self) {
        self.state = Visibility::Shown;
    }

    pub fn hide(&mut self) {
        self.state = Visibility::Hidden;
    }

    pub fn is_shown(&self) -> bool {
        self.state == Visibility::Shown
    }

    /// The control to render for the sentence on `line_number`. `None` when
    /// no words annotate that line: with nothing to reveal, the affordance
    /// itself is absent rather than disabled.
    pub fn affordance(&self, words: &WordsByLine, line_number: u32) -> Option<Affordance> {
        let rows = words.get(&line_number)?;
        if rows.is_empty() {
            return None;
        }
        Some(match self.state {
            Visibility::Hidden => Affordance::Show,
            Visibility::Shown => Affordance::Hide,
        })
    }

    /// Word rows currently visible beneath the sentence on `line_number`.
    pub fn visible_rows<'a>(&self, words: &'a WordsByLine, line_number: u32) -> &'a [Word] {
        if !self.is_shown() {
            return &[];
        }
        words
            .get(&line_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::group_words_by_line;

    fn words_for(line: u32) -> WordsByLine {
        group_words_by_line(vec![Word {
            line_number: line,
            word_number: 1,
            kanji: "鬼".to_string(),
            hiragana: "おに".to_string(),
            english: "ogre".to_string(),
        }])
    }

    #[test]
    fn show_then_hide_returns_to_initial_state() {
        let initial = VocabularyToggle::new();
        let mut toggle = initial;
        toggle.show();
        assert!(toggle.is_shown());
        toggle.hide();
        assert_eq!(toggle, initial);
    }

    #[test]
    fn affordance_tracks_state() {
        let words = words_for(2);
        let mut toggle = VocabularyToggle::new();
        assert_eq!(toggle.affordance(&words, 2), Some(Affordance::Show));
        toggle.show();
        assert_eq!(toggle.affordance(&words, 2), Some(Affordance::Hide));
    }

    #[test]
    fn no_words_for_line_means_no_affordance() {
        let words = words_for(2);
        let mut toggle = VocabularyToggle::new();
        assert_eq!(toggle.affordance(&words, 5), None);
        toggle.show();
        assert_eq!(toggle.affordance(&words, 5), None);
        assert!(toggle.visible_rows(&words, 5).is_empty());
    }

    #[test]
    fn rows_render_only_when_shown() {
        let words = words_for(2);
        let mut toggle = VocabularyToggle::new();
        assert!(toggle.visible_rows(&words, 2).is_empty());
        toggle.show();
        assert_eq!(toggle.visible_rows(&words, 2).len(), 1);
    }
}
