//! Playback synchronization
//!
//! Maps a playback instant onto a [`Timeline`]: which line is active, and how
//! far through the active line the karaoke highlight has progressed. Every
//! function here is a pure computation over its arguments, so the caller can
//! re-run it on each tick without carrying a cursor across seeks.

use super::parser::{TimedLine, Timeline};

/// Playback position adjusted by the user's signed offset.
pub fn effective_time(position_secs: f64, offset_ms: i64) -> f64 {
    position_secs + offset_ms as f64 / 1000.0
}

/// Highlight state of a single word in the active line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordState {
    Sung,
    Future,
}

impl Timeline {
    /// Index of the last line whose start time is at or before `effective_time`.
    ///
    /// Returns `None` for an empty timeline or a time before the first line.
    /// Always a full scan, so a backward seek lands on the right (lower) index.
    pub fn active_index(&self, effective_time: f64) -> Option<usize> {
        self.lines()
            .iter()
            .rposition(|l| l.start_time <= effective_time)
    }
}

impl TimedLine {
    /// Fraction of this line's duration that has elapsed. Zero-length lines stay at 0.
    pub fn progress(&self, effective_time: f64) -> f64 {
        if self.duration > 0.0 {
            (effective_time - self.start_time) / self.duration
        } else {
            0.0
        }
    }

    /// Inclusive index of the last sung word: `floor(progress * word_count)`.
    ///
    /// Not clamped. Below zero nothing is sung; at or past the last index
    /// everything is.
    pub fn sung_cutoff(&self, effective_time: f64) -> i64 {
        (self.progress(effective_time) * self.words.len() as f64).floor() as i64
    }

    /// Per-word highlight state. Word `i` is sung when `i <= sung_cutoff`.
    pub fn word_states(&self, effective_time: f64) -> Vec<WordState> {
        let cutoff = self.sung_cutoff(effective_time);
        (0..self.words.len())
            .map(|i| {
                if (i as i64) <= cutoff {
                    WordState::Sung
                } else {
                    WordState::Future
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Timeline {
        Timeline::parse("[00:00.0]a\n[00:02.0]b\n[00:04.0]c")
    }

    fn karaoke_line() -> TimedLine {
        TimedLine {
            start_time: 10.0,
            text: "a b c d".to_string(),
            duration: 4.0,
            words: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        }
    }

    #[test]
    fn test_effective_time_applies_offset() {
        assert!((effective_time(10.0, 0) - 10.0).abs() < 1e-9);
        assert!((effective_time(10.0, 250) - 10.25).abs() < 1e-9);
        assert!((effective_time(10.0, -1500) - 8.5).abs() < 1e-9);
    }

    #[test]
    fn test_active_index() {
        let t = abc();
        assert_eq!(t.active_index(1.5), Some(0));
        assert_eq!(t.active_index(3.9), Some(1));
        assert_eq!(t.active_index(-1.0), None);
        assert_eq!(t.active_index(100.0), Some(2));
        assert_eq!(t.active_index(2.0), Some(1));
    }

    #[test]
    fn test_active_index_empty_timeline() {
        let t = Timeline::parse("");
        assert_eq!(t.active_index(0.0), None);
        assert_eq!(t.active_index(1e9), None);
    }

    #[test]
    fn test_active_index_before_first_line() {
        let t = Timeline::parse("[00:05.0]late start");
        assert_eq!(t.active_index(4.99), None);
        assert_eq!(t.active_index(5.0), Some(0));
    }

    #[test]
    fn test_active_index_follows_backward_seek() {
        let t = abc();
        let seq = [0.5, 2.5, 4.5, 1.0, 3.0, -0.5, 4.0];
        let got: Vec<Option<usize>> = seq.iter().map(|&s| t.active_index(s)).collect();
        assert_eq!(got, vec![Some(0), Some(1), Some(2), Some(0), Some(1), None, Some(2)]);
    }

    #[test]
    fn test_active_index_with_shared_timestamp_picks_last() {
        let t = Timeline::parse("[00:01.0]x\n[00:01.0]y\n[00:03.0]z");
        assert_eq!(t.active_index(1.0), Some(1));
    }

    #[test]
    fn test_sung_cutoff_boundaries() {
        let line = karaoke_line();
        assert_eq!(line.sung_cutoff(10.0), 0);
        assert_eq!(line.sung_cutoff(12.0), 2);
        assert_eq!(line.sung_cutoff(14.0), 4);
        assert_eq!(line.sung_cutoff(9.0), -1);
        assert_eq!(line.sung_cutoff(18.0), 8);
    }

    #[test]
    fn test_zero_duration_guard() {
        let mut line = karaoke_line();
        line.duration = 0.0;
        for t in [-100.0, 0.0, 10.0, 10.5, 1e12] {
            assert_eq!(line.sung_cutoff(t), 0);
        }
    }

    #[test]
    fn test_no_words_cutoff_is_zero() {
        let line = TimedLine {
            start_time: 0.0,
            text: String::new(),
            duration: 3.0,
            words: Vec::new(),
        };
        assert_eq!(line.sung_cutoff(1.5), 0);
        assert!(line.word_states(1.5).is_empty());
    }

    #[test]
    fn test_word_states() {
        let line = karaoke_line();
        use WordState::*;
        assert_eq!(line.word_states(9.0), vec![Future, Future, Future, Future]);
        assert_eq!(line.word_states(10.0), vec![Sung, Future, Future, Future]);
        assert_eq!(line.word_states(12.0), vec![Sung, Sung, Sung, Future]);
        assert_eq!(line.word_states(14.0), vec![Sung, Sung, Sung, Sung]);
    }

    #[test]
    fn test_full_pipeline_with_offset() {
        let t = Timeline::parse("[00:10.00]one two three four\n[00:14.00]next");
        let now = effective_time(11.0, 1000);
        let idx = t.active_index(now).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(t.lines()[idx].sung_cutoff(now), 2);
    }
}
