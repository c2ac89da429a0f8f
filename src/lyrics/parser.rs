//! Tagged lyrics parser
//!
//! Turns line-timestamped lyrics into a [`Timeline`]:
//! [mm:ss.xx] Lyrics line here
//!
//! Example:
//! [00:12.34] Hello world
//! [00:15.00] Another line
//!
//! Parsing is best-effort. Lines that don't carry a usable tag are dropped
//! and never abort the rest of the file.

/// How long the final line stays active, in seconds.
pub const TAIL_DURATION: f64 = 5.0;

/// A single line of lyrics with synchronization metadata
#[derive(Debug, Clone, PartialEq)]
pub struct TimedLine {
    /// Seconds from track start when this line becomes active
    pub start_time: f64,
    /// The lyrics text (empty for an instrumental gap)
    pub text: String,
    /// Seconds until the next line starts, or [`TAIL_DURATION`] for the last one
    pub duration: f64,
    /// Whitespace-delimited tokens of `text`
    pub words: Vec<String>,
}

impl TimedLine {
    pub fn new(start_time: f64, text: &str) -> Self {
        let text = text.trim();
        Self {
            start_time,
            text: text.to_string(),
            duration: 0.0,
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }
}

/// Lyrics ordered by start time, immutable once parsed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    lines: Vec<TimedLine>,
}

impl Timeline {
    /// Parse tagged lyrics text. Never fails; garbage yields an empty timeline.
    pub fn parse(content: &str) -> Self {
        let lines = content.lines().filter_map(Self::parse_line).collect();
        Self::from_lines(lines)
    }

    /// Build a timeline from unordered lines, sorting them and computing durations.
    pub fn from_lines(mut lines: Vec<TimedLine>) -> Self {
        // Stable: equal timestamps keep their input order.
        lines.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        let starts: Vec<f64> = lines.iter().map(|l| l.start_time).collect();
        for (line, next_start) in lines.iter_mut().zip(starts.iter().skip(1)) {
            line.duration = (next_start - line.start_time).max(0.0);
        }
        if let Some(last) = lines.last_mut() {
            last.duration = TAIL_DURATION;
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[TimedLine] {
        &self.lines
    }

    pub fn get(&self, idx: usize) -> Option<&TimedLine> {
        self.lines.get(idx)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Parse one candidate line like `[01:02.50]Hello`.
    ///
    /// Leading whitespace is skipped. Only the first `]` splits tag from text,
    /// and the leading `[` is optional.
    fn parse_line(line: &str) -> Option<TimedLine> {
        let (tag, text) = line.trim_start().split_once(']')?;
        let tag = tag.strip_prefix('[').unwrap_or(tag);

        let mut parts = tag.split(':');
        let (min, sec) = match (parts.next(), parts.next(), parts.next()) {
            (Some(min), Some(sec), None) => (min, sec),
            _ => return None,
        };

        let start_time = (Self::parse_number(min) * 60.0 + Self::parse_number(sec)).max(0.0);
        Some(TimedLine::new(start_time, text))
    }

    /// Unparseable or non-finite numbers count as zero.
    fn parse_number(s: &str) -> f64 {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}
