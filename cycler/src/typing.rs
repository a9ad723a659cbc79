use std::{sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CyclerError;

pub const DEFAULT_TYPE_SPEED_MS: u64 = 100;
pub const DEFAULT_PAUSE_MS: u64 = 1000;

// PhraseList
//
// the ordered, cyclic list of phrases that a cycler walks through.  it is validated once at
// construction and never changes afterwards, so we hold it behind an Arc and let clones share
// the same slice (dioxus props get cloned on every render)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Arc<[String]>,
}

impl PhraseList {
    pub fn new<I, S>(phrases: I) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();

        if phrases.is_empty() {
            return Err(CyclerError::invalid("phrase list is empty"));
        }

        if let Some(pos) = phrases.iter().position(|p| p.is_empty()) {
            return Err(CyclerError::invalid(format!("phrase {pos} is empty")));
        }

        Ok(PhraseList {
            phrases: phrases.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    // wraps like the cycle itself does
    pub fn get(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phrases.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

// Timing
//
// deleting deliberately runs at twice the typing speed, i.e. half the interval
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub type_speed: Duration,
    pub pause: Duration,
}

impl Timing {
    pub fn from_millis(type_speed_ms: u64, pause_ms: u64) -> Self {
        Timing {
            type_speed: Duration::from_millis(type_speed_ms),
            pause: Duration::from_millis(pause_ms),
        }
    }

    pub fn delete_speed(&self) -> Duration {
        self.type_speed / 2
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::from_millis(DEFAULT_TYPE_SPEED_MS, DEFAULT_PAUSE_MS)
    }
}

// the serialized form, used by the config file and anything else that wants to describe a
// cycler as plain data
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TypingConfig {
    pub phrases: Vec<String>,

    #[serde(default = "default_type_speed_ms")]
    pub type_speed_ms: u64,

    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

fn default_type_speed_ms() -> u64 {
    DEFAULT_TYPE_SPEED_MS
}

fn default_pause_ms() -> u64 {
    DEFAULT_PAUSE_MS
}

impl TypingConfig {
    pub fn timing(&self) -> Timing {
        Timing::from_millis(self.type_speed_ms, self.pause_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Mode {
    Typing,
    Paused,
    Deleting,
}

// an owned snapshot of the cycler, for anything that wants to hold on to it past the next tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CyclerState {
    pub index: usize,
    pub text: String,
    pub mode: Mode,
}

// TypingCycler
//
// types the current phrase one character at a time, pauses, deletes it one character at a
// time, then moves on to the next phrase, forever.
//
// rather than storing the displayed text, we store how many characters of the current phrase
// are shown; the text is always sliced out of the phrase, so it can never drift from being a
// prefix of it.  characters are chars, so a prefix never splits a code point
#[derive(Clone, Debug)]
pub struct TypingCycler {
    phrases: PhraseList,
    timing: Timing,
    index: usize,
    shown: usize,
    mode: Mode,
}

impl TypingCycler {
    pub fn new(phrases: PhraseList, timing: Timing) -> Result<Self, CyclerError> {
        if timing.type_speed.is_zero() {
            return Err(CyclerError::invalid("type speed must be positive"));
        }

        Ok(TypingCycler {
            phrases,
            timing,
            index: 0,
            shown: 0,
            mode: Mode::Typing,
        })
    }

    pub fn from_config(config: &TypingConfig) -> Result<Self, CyclerError> {
        let phrases = PhraseList::new(config.phrases.iter().cloned())?;
        TypingCycler::new(phrases, config.timing())
    }

    // advance by exactly one step and return how long to wait before the next one
    pub fn tick(&mut self) -> Duration {
        match self.mode {
            Mode::Typing => {
                let full = self.current_phrase().chars().count();

                if self.shown < full {
                    self.shown += 1;
                }

                if self.shown == full {
                    self.set_mode(Mode::Paused);
                }
            }
            Mode::Paused => self.set_mode(Mode::Deleting),
            Mode::Deleting => {
                self.shown = self.shown.saturating_sub(1);

                if self.shown == 0 {
                    self.index = self.phrases.next_index(self.index);
                    self.set_mode(Mode::Typing);
                }
            }
        }

        self.delay()
    }

    // how long the current mode waits before the next tick
    pub fn delay(&self) -> Duration {
        match self.mode {
            Mode::Typing => self.timing.type_speed,
            Mode::Paused => self.timing.pause,
            Mode::Deleting => self.timing.delete_speed(),
        }
    }

    pub fn displayed_text(&self) -> &str {
        let phrase = self.current_phrase();

        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn current_phrase(&self) -> &str {
        self.phrases.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn state(&self) -> CyclerState {
        CyclerState {
            index: self.index,
            text: self.displayed_text().to_owned(),
            mode: self.mode,
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        debug!(index = self.index, from = ?self.mode, to = ?mode, "typing cycler transition");
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cycler(phrases: &[&str], type_ms: u64, pause_ms: u64) -> TypingCycler {
        let phrases = PhraseList::new(phrases.iter().copied()).expect("valid phrases");
        TypingCycler::new(phrases, Timing::from_millis(type_ms, pause_ms)).expect("valid timing")
    }

    // drives a cycler along a simulated clock, ticking whenever the pending delay runs out
    struct SimClock {
        cycler: TypingCycler,
        due: Duration,
    }

    impl SimClock {
        fn new(cycler: TypingCycler) -> Self {
            let due = cycler.delay();
            SimClock { cycler, due }
        }

        fn advance_to(&mut self, millis: u64) -> &str {
            let now = Duration::from_millis(millis);

            while self.due <= now {
                let delay = self.cycler.tick();
                self.due += delay;
            }

            self.cycler.displayed_text()
        }
    }

    // typing n chars takes n ticks, the pause one more, deleting n more
    fn full_cycle(cycler: &mut TypingCycler) {
        let n = cycler.current_phrase().chars().count();
        for _ in 0..(2 * n + 1) {
            cycler.tick();
        }
    }

    #[test]
    fn starts_typing_first_phrase() {
        let c = cycler(&["Designer", "Developer"], 100, 1000);

        assert_eq!(c.index(), 0);
        assert_eq!(c.displayed_text(), "");
        assert_eq!(c.mode(), Mode::Typing);
        assert_eq!(c.delay(), Duration::from_millis(100));
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        let err = PhraseList::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, CyclerError::InvalidConfiguration(_)));

        let config = TypingConfig {
            phrases: vec![],
            type_speed_ms: 100,
            pause_ms: 1000,
        };
        assert!(matches!(
            TypingCycler::from_config(&config),
            Err(CyclerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn empty_phrase_is_rejected() {
        let err = PhraseList::new(["Artist", ""]).unwrap_err();
        assert_eq!(
            err,
            CyclerError::InvalidConfiguration("phrase 1 is empty".to_owned())
        );
    }

    #[test]
    fn zero_type_speed_is_rejected() {
        let phrases = PhraseList::new(["a"]).unwrap();
        let err = TypingCycler::new(phrases, Timing::from_millis(0, 10)).unwrap_err();
        assert!(matches!(err, CyclerError::InvalidConfiguration(_)));
    }

    #[test]
    fn zero_pause_is_allowed() {
        let mut c = cycler(&["ab"], 10, 0);
        c.tick();
        c.tick();
        assert_eq!(c.mode(), Mode::Paused);
        assert_eq!(c.delay(), Duration::ZERO);
    }

    #[test]
    fn timeline_for_single_two_char_phrase() {
        let mut clock = SimClock::new(cycler(&["AB"], 10, 20));

        assert_eq!(clock.advance_to(0), "");
        assert_eq!(clock.advance_to(10), "A");
        assert_eq!(clock.advance_to(20), "AB");
        assert_eq!(clock.cycler.mode(), Mode::Paused);

        assert_eq!(clock.advance_to(39), "AB");
        assert_eq!(clock.cycler.mode(), Mode::Paused);

        assert_eq!(clock.advance_to(40), "AB");
        assert_eq!(clock.cycler.mode(), Mode::Deleting);
        assert_eq!(clock.cycler.delay(), Duration::from_millis(5));

        assert_eq!(clock.advance_to(45), "A");
        assert_eq!(clock.advance_to(50), "");
        assert_eq!(clock.cycler.mode(), Mode::Typing);
        assert_eq!(clock.cycler.index(), 0);

        assert_eq!(clock.advance_to(59), "");
        assert_eq!(clock.advance_to(60), "A");
    }

    #[test]
    fn delete_interval_is_half_the_type_interval() {
        let timing = Timing::from_millis(100, 1000);
        assert_eq!(timing.delete_speed(), Duration::from_millis(50));

        let odd = Timing::from_millis(15, 0);
        assert_eq!(odd.delete_speed(), Duration::from_micros(7500));
    }

    #[test]
    fn pause_happens_only_after_typing() {
        let mut c = cycler(&["xy", "z"], 10, 20);
        let mut modes = vec![c.mode()];
        for _ in 0..12 {
            c.tick();
            modes.push(c.mode());
        }

        // a pause must always be preceded by typing, never by deleting
        for pair in modes.windows(2) {
            if pair[1] == Mode::Paused && pair[0] != Mode::Paused {
                assert_eq!(pair[0], Mode::Typing);
            }
        }
    }

    #[test]
    fn two_phrases_alternate_and_wrap() {
        let mut c = cycler(&["X", "Y"], 10, 20);

        full_cycle(&mut c);
        assert_eq!(c.index(), 1);
        c.tick();
        assert_eq!(c.displayed_text(), "Y");

        let mut c = cycler(&["X", "Y"], 10, 20);
        full_cycle(&mut c);
        full_cycle(&mut c);
        assert_eq!(c.index(), 0);
        c.tick();
        assert_eq!(c.displayed_text(), "X");
    }

    #[test]
    fn single_phrase_keeps_cycling() {
        let mut c = cycler(&["hi"], 10, 20);

        for _ in 0..3 {
            full_cycle(&mut c);
            assert_eq!(c.index(), 0);
            assert_eq!(c.displayed_text(), "");
            assert_eq!(c.mode(), Mode::Typing);
        }

        c.tick();
        assert_eq!(c.displayed_text(), "h");
    }

    #[test]
    fn multibyte_phrases_slice_on_char_boundaries() {
        let mut c = cycler(&["héllo", "日本"], 10, 0);

        c.tick();
        c.tick();
        assert_eq!(c.displayed_text(), "hé");

        // finish the first phrase and move onto the second
        for _ in 0..9 {
            c.tick();
        }
        assert_eq!(c.index(), 1);
        c.tick();
        assert_eq!(c.displayed_text(), "日");
    }

    #[test]
    fn state_snapshot_matches_accessors() {
        let mut c = cycler(&["abc"], 10, 20);
        c.tick();
        c.tick();

        assert_eq!(
            c.state(),
            CyclerState {
                index: 0,
                text: "ab".to_owned(),
                mode: Mode::Typing,
            }
        );
    }

    #[test]
    fn phrase_list_wraps() {
        let list = PhraseList::new(["a", "b", "c"]).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.next_index(2), 0);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    proptest! {
        #[test]
        fn full_cycle_advances_index_by_one(
            phrases in prop::collection::vec("[a-zA-Z é日]{1,12}", 1..6),
        ) {
            let list = PhraseList::new(phrases.clone()).unwrap();
            let mut c = TypingCycler::new(list, Timing::default()).unwrap();

            for cycle in 1..=phrases.len() + 1 {
                full_cycle(&mut c);
                prop_assert_eq!(c.index(), cycle % phrases.len());
                prop_assert_eq!(c.displayed_text(), "");
                prop_assert_eq!(c.mode(), Mode::Typing);
            }
        }

        #[test]
        fn text_is_always_a_prefix_and_moves_one_char(
            phrases in prop::collection::vec("[a-zA-Z é日]{1,12}", 1..6),
            ticks in 0usize..400,
        ) {
            let list = PhraseList::new(phrases.clone()).unwrap();
            let mut c = TypingCycler::new(list, Timing::default()).unwrap();
            let mut prev = 0usize;

            for _ in 0..ticks {
                c.tick();

                let text = c.displayed_text();
                let len = text.chars().count();

                prop_assert!(phrases[c.index()].starts_with(text));
                prop_assert!(len.abs_diff(prev) <= 1);

                prev = len;
            }
        }
    }
}
