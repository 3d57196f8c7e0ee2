//! State machine for the text-scramble intro effect.
//!
//! The intro cycles every letter slot through a fixed alphabet (all slots
//! show the same character on a given tick), briefly flashes two secret
//! words at scripted points in the cycle, and finally settles on the reveal
//! word one letter at a time:
//!
//! `Scrambling → (secret-word flash)* → Stopped → Revealing(slot i) → Done`
//!
//! The machine itself is clock-free; the component layer drives `tick` from
//! an 80 ms interval, stops it at 2500 ms and schedules the staggered reveal
//! from [`Scrambler::reveal_schedule`]. Keeping time out of here makes the
//! sequencing deterministic under test.

use std::fmt;

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";

/// Cycle advance period.
pub const TICK_MS: u32 = 80;
/// Total scramble phase duration before the reveal starts.
pub const RUN_MS: u32 = 2_500;
/// How long a secret word stays on screen before cycling resumes.
pub const FLASH_MS: u32 = 150;
/// Delay between consecutive slot reveals.
pub const REVEAL_STEP_MS: u32 = 200;

/// Cycle indexes at which the first and second secret words flash.
const FLASH_INDEXES: [usize; 2] = [15, 35];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambleConfig {
    pub reveal_word: &'static str,
    pub secret_words: [&'static str; 2],
}

/// Rejected configurations. The original markup silently produced undefined
/// slot content on length mismatches; here they fail at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    SlotCount { reveal_word: &'static str, slots: usize },
    SecretWordLength { word: &'static str, slots: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SlotCount { reveal_word, slots } => write!(
                f,
                "reveal word {:?} needs {} letter slots, markup has {}",
                reveal_word,
                reveal_word.chars().count(),
                slots
            ),
            ConfigError::SecretWordLength { word, slots } => write!(
                f,
                "secret word {:?} must be exactly {} characters to fill the letter slots",
                word, slots
            ),
        }
    }
}

/// What the letter slots should show after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Every slot shows this alphabet character.
    Cycle(char),
    /// The word is spread across the slots, one character each, for
    /// [`FLASH_MS`] before cycling resumes.
    Flash(&'static str),
}

#[derive(Debug)]
pub struct Scrambler {
    config: ScrambleConfig,
    alphabet: Vec<char>,
    index: usize,
    flashes_shown: usize,
    running: bool,
}

impl Scrambler {
    /// Validates that the reveal word and both secret words fill the letter
    /// slots exactly, then starts in the scrambling state.
    pub fn new(config: ScrambleConfig, slots: usize) -> Result<Self, ConfigError> {
        if config.reveal_word.chars().count() != slots {
            return Err(ConfigError::SlotCount {
                reveal_word: config.reveal_word,
                slots,
            });
        }
        for word in config.secret_words {
            if word.chars().count() != slots {
                return Err(ConfigError::SecretWordLength { word, slots });
            }
        }
        Ok(Self {
            config,
            alphabet: ALPHABET.chars().collect(),
            index: 0,
            flashes_shown: 0,
            running: true,
        })
    }

    pub fn slot_count(&self) -> usize {
        self.config.reveal_word.chars().count()
    }

    /// Advances one cycle step and reports what the slots should show.
    /// Returns `None` once stopped. Each secret word flashes exactly once,
    /// when the cycle first passes its scripted index.
    pub fn tick(&mut self) -> Option<Frame> {
        if !self.running {
            return None;
        }
        let frame = if self.index == FLASH_INDEXES[0] && self.flashes_shown == 0 {
            self.flashes_shown = 1;
            Frame::Flash(self.config.secret_words[0])
        } else if self.index == FLASH_INDEXES[1] && self.flashes_shown == 1 {
            self.flashes_shown = 2;
            Frame::Flash(self.config.secret_words[1])
        } else {
            Frame::Cycle(self.alphabet[self.index])
        };
        self.index = (self.index + 1) % self.alphabet.len();
        Some(frame)
    }

    /// Character the cycle currently points at; a flash reverts to this.
    pub fn current_char(&self) -> char {
        self.alphabet[self.index]
    }

    /// Ends the scramble phase; subsequent ticks produce nothing.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reveal_char(&self, slot: usize) -> Option<char> {
        self.config.reveal_word.chars().nth(slot)
    }

    /// `(slot, delay)` pairs for the staggered reveal: slot `i` settles
    /// after `i * REVEAL_STEP_MS`.
    pub fn reveal_schedule(&self) -> impl Iterator<Item = (usize, u32)> {
        (0..self.slot_count()).map(|slot| (slot, slot as u32 * REVEAL_STEP_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: ScrambleConfig = ScrambleConfig {
        reveal_word: "CYBORG",
        secret_words: ["FUTURE", "SYSTEM"],
    };

    fn scrambler() -> Scrambler {
        Scrambler::new(CONFIG, 6).unwrap()
    }

    #[test]
    fn rejects_wrong_slot_count() {
        let err = Scrambler::new(CONFIG, 5).unwrap_err();
        assert_eq!(
            err,
            ConfigError::SlotCount {
                reveal_word: "CYBORG",
                slots: 5
            }
        );
        assert!(err.to_string().contains("CYBORG"));
    }

    #[test]
    fn rejects_secret_word_that_does_not_fill_the_slots() {
        let config = ScrambleConfig {
            reveal_word: "CYBORG",
            secret_words: ["FUTURE", "MACHINES"],
        };
        assert_eq!(
            Scrambler::new(config, 6).unwrap_err(),
            ConfigError::SecretWordLength {
                word: "MACHINES",
                slots: 6
            }
        );
    }

    #[test]
    fn cycles_through_the_alphabet_in_order() {
        let mut machine = scrambler();
        assert_eq!(machine.tick(), Some(Frame::Cycle('A')));
        assert_eq!(machine.tick(), Some(Frame::Cycle('B')));
        assert_eq!(machine.current_char(), 'C');
    }

    #[test]
    fn wraps_modulo_alphabet_length() {
        let mut machine = scrambler();
        let len = ALPHABET.chars().count();
        for _ in 0..len {
            machine.tick();
        }
        // Back at the start of the alphabet after one full lap.
        assert_eq!(machine.tick(), Some(Frame::Cycle('A')));
    }

    #[test]
    fn each_secret_word_flashes_exactly_once() {
        let mut machine = scrambler();
        let frames: Vec<Frame> = (0..100).map(|_| machine.tick().unwrap()).collect();
        let flashes: Vec<(usize, Frame)> = frames
            .into_iter()
            .enumerate()
            .filter(|(_, frame)| matches!(frame, Frame::Flash(_)))
            .collect();
        assert_eq!(
            flashes,
            vec![(15, Frame::Flash("FUTURE")), (35, Frame::Flash("SYSTEM"))]
        );
    }

    #[test]
    fn flash_reverts_to_the_next_cycle_character() {
        let mut machine = scrambler();
        for _ in 0..15 {
            machine.tick();
        }
        assert_eq!(machine.tick(), Some(Frame::Flash("FUTURE")));
        // The revert timer restores whatever the cycle points at by then.
        assert_eq!(machine.current_char(), 'Q');
    }

    #[test]
    fn stopped_machine_produces_no_frames() {
        let mut machine = scrambler();
        machine.tick();
        machine.stop();
        assert_eq!(machine.tick(), None);
        assert_eq!(machine.tick(), None);
    }

    #[test]
    fn reveal_covers_every_slot_with_its_stagger() {
        let machine = scrambler();
        let schedule: Vec<(usize, u32)> = machine.reveal_schedule().collect();
        assert_eq!(
            schedule,
            vec![(0, 0), (1, 200), (2, 400), (3, 600), (4, 800), (5, 1000)]
        );
        let word: String = (0..machine.slot_count())
            .map(|slot| machine.reveal_char(slot).unwrap())
            .collect();
        assert_eq!(word, "CYBORG");
        assert_eq!(machine.reveal_char(6), None);
    }
}
