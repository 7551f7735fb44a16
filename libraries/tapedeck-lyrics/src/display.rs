//! Lyric timeline shown next to the deck
//!
//! Synced lyrics highlight the line under the playhead. Unsynced lyrics are
//! shown as a static list in source order.

use crate::lrc::{is_synced, parse_lrc, LrcLine};
use serde::{Deserialize, Serialize};

/// Lines ready for display plus whether they follow the playhead
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsView {
    pub is_synced: bool,
    /// For unsynced views `time` holds the line index, not a timestamp
    pub lines: Vec<LrcLine>,
}

impl LyricsView {
    /// Build the view for a track's raw lyric text
    ///
    /// When no line carries a timestamp, the view is rebuilt from the
    /// non-blank source lines so the text is shown exactly as written
    /// (including anything that looked like an LRC tag).
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.is_empty()) else {
            return Self::default();
        };

        let parsed = parse_lrc(Some(raw));
        if is_synced(&parsed) {
            return Self {
                is_synced: true,
                lines: parsed,
            };
        }

        let lines = raw
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(index, line)| LrcLine::new(index as f64, line.trim_end_matches('\r')))
            .collect();

        Self {
            is_synced: false,
            lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Index of the line to highlight at `position_secs`
    ///
    /// The last line whose time is at or before the position. Lines without
    /// a timestamp are never highlighted. `None` before the first timed line
    /// and for unsynced views.
    pub fn active_index(&self, position_secs: f64) -> Option<usize> {
        if !self.is_synced {
            return None;
        }
        self.lines
            .iter()
            .rposition(|line| line.is_synced() && position_secs >= line.time)
    }

    /// Text of the highlighted line
    pub fn active_line(&self, position_secs: f64) -> Option<&LrcLine> {
        self.active_index(position_secs).map(|i| &self.lines[i])
    }
}

/// Format seconds as `m:ss`
///
/// Non-finite and negative input shows as `0:00`. Minutes are not wrapped
/// into hours.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
