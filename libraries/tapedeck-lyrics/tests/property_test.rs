//! Property-based tests for LRC parsing and the lyric timeline

use proptest::prelude::*;
use tapedeck_lyrics::{format_clock, is_synced, parse_lrc, LrcLine, LyricsView};

// ===== Helpers =====

fn timed_line() -> impl Strategy<Value = (u32, u32, u32, String)> {
    (0u32..100, 0u32..60, 0u32..100, "[A-Za-z][A-Za-z ,']{0,30}")
}

fn lrc_text(lines: &[(u32, u32, u32, String)]) -> String {
    lines
        .iter()
        .map(|(m, s, cs, text)| format!("[{m:02}:{s:02}.{cs:02}]{text}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ===== Property Tests =====

proptest! {
    /// Property: parsing never panics and never yields blank text
    #[test]
    fn lines_are_never_blank(text in "\\PC*") {
        for line in parse_lrc(Some(&text)) {
            prop_assert!(!line.text.trim().is_empty());
            prop_assert_eq!(line.text.trim(), line.text.as_str());
        }
    }

    /// Property: every well-formed timed line comes back with its time
    #[test]
    fn timed_lines_round_trip(lines in prop::collection::vec(timed_line(), 1..30)) {
        let parsed = parse_lrc(Some(&lrc_text(&lines)));
        prop_assert_eq!(parsed.len(), lines.len());
        prop_assert!(is_synced(&parsed));

        for (line, (m, s, cs, text)) in parsed.iter().zip(&lines) {
            let expected = f64::from(*m) * 60.0 + f64::from(*s) + f64::from(*cs) / 100.0;
            prop_assert!((line.time - expected).abs() < 1e-9);
            prop_assert_eq!(&line.text, text.trim());
        }
    }

    /// Property: text without brackets is never synced
    #[test]
    fn bracket_free_text_is_unsynced(text in "[^\\[\\]]*") {
        let lines = parse_lrc(Some(&text));
        prop_assert!(!is_synced(&lines));
        prop_assert!(lines.iter().all(|l| l.time == LrcLine::UNSYNCED_TIME));
    }

    /// Property: the active line never moves backwards as playback advances
    #[test]
    fn active_index_is_monotonic(
        lines in prop::collection::vec(timed_line(), 1..30),
        positions in prop::collection::vec(0.0f64..6000.0, 1..50)
    ) {
        // LRC files are written in time order
        let mut lines = lines;
        lines.sort_by_key(|(m, s, cs, _)| (*m, *s, *cs));
        let view = LyricsView::from_raw(Some(&lrc_text(&lines)));

        let mut positions = positions;
        positions.sort_by(f64::total_cmp);
        let mut previous: Option<usize> = None;
        for position in positions {
            let current = view.active_index(position);
            if let (Some(prev), Some(cur)) = (previous, current) {
                prop_assert!(cur >= prev);
            }
            if let Some(cur) = current {
                prop_assert!(view.lines[cur].time <= position);
            }
            previous = current.or(previous);
        }
    }

    /// Property: clock output is always m:ss
    #[test]
    fn clock_shape(seconds in any::<f64>()) {
        let clock = format_clock(seconds);
        let (minutes, secs) = clock.split_once(':').unwrap();
        prop_assert!(minutes.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(secs.len(), 2);
        prop_assert!(secs.parse::<u32>().unwrap() < 60);
    }
}
