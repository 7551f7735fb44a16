//! LRC lyric parsing
//!
//! Each line may carry a `[MM:SS]`, `[MM:SS.ff]` or `[MM:SS.fff]` timestamp
//! anywhere in it. Lines without one are kept with the unsynced sentinel time.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One lyric line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LrcLine {
    /// Seconds from the start of the track, or `UNSYNCED_TIME`
    pub time: f64,
    /// Display text, trimmed and never empty
    pub text: String,
}

impl LrcLine {
    /// Time of a line that carries no timestamp
    pub const UNSYNCED_TIME: f64 = -1.0;

    pub fn new(time: f64, text: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
        }
    }

    pub fn unsynced(text: impl Into<String>) -> Self {
        Self::new(Self::UNSYNCED_TIME, text)
    }

    /// Seconds from the start, `None` for unsynced lines
    pub fn timestamp(&self) -> Option<f64> {
        if self.is_synced() {
            Some(self.time)
        } else {
            None
        }
    }

    pub fn is_synced(&self) -> bool {
        self.time != Self::UNSYNCED_TIME
    }
}

fn timestamp_regex() -> &'static Regex {
    static TIMESTAMP: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other Unicode digits
    TIMESTAMP.get_or_init(|| {
        Regex::new(r"\[([0-9]{2}):([0-9]{2})(?:\.([0-9]{2,3}))?\]")
            .unwrap_or_else(|e| panic!("timestamp pattern is valid: {e}"))
    })
}

/// Parse LRC text into display lines
///
/// Only the first timestamp of a line is used and removed; further stacked
/// timestamps stay in the text. Timed lines whose remaining text is blank are
/// dropped. Blank lines are dropped.
pub fn parse_lrc(text: Option<&str>) -> Vec<LrcLine> {
    let Some(text) = text else {
        return Vec::new();
    };
    let regex = timestamp_regex();

    text.split('\n')
        .filter_map(|line| match regex.captures(line) {
            Some(caps) => {
                let minutes: f64 = caps[1].parse().ok()?;
                let seconds: f64 = caps[2].parse().ok()?;
                let fraction = match caps.get(3) {
                    Some(m) => {
                        let divisor = if m.as_str().len() == 3 { 1000.0 } else { 100.0 };
                        m.as_str().parse::<f64>().ok()? / divisor
                    }
                    None => 0.0,
                };
                let whole = caps.get(0)?;
                let rest = format!("{}{}", &line[..whole.start()], &line[whole.end()..]);
                let rest = rest.trim();
                if rest.is_empty() {
                    None
                } else {
                    Some(LrcLine::new(minutes * 60.0 + seconds + fraction, rest))
                }
            }
            None => {
                let trimmed = line.trim();
                (!trimmed.is_empty()).then(|| LrcLine::unsynced(trimmed))
            }
        })
        .collect()
}

/// True when at least one line carries a timestamp
pub fn is_synced(lines: &[LrcLine]) -> bool {
    lines.iter().any(LrcLine::is_synced)
}
