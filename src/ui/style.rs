//! Central UI style constants and helpers.
pub const COLOR_FITNESS: u32 = 0x2ECC71; // Green
pub const COLOR_MUSIC: u32 = 0x9B59B6; // Purple
pub const COLOR_HELP: u32 = 0x5865F2; // Blurple
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_MUSCLE: &str = "💪";
pub const EMOJI_NOTES: &str = "🎶";
pub const EMOJI_RUN: &str = "🏃";

pub fn minutes_line(activity_type: &str, total: i64) -> String {
    format!("{activity_type}: {total} minutes")
}

/// Cuts `text` to at most `max` characters, ending with `…` when anything was dropped.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

/// Numbered list, one entry per line, starting at 1. Each entry is clipped to
/// `entry_max` characters and entries stop once the next one would push the
/// list past `budget`.
/// Returns the list and how many entries it holds.
pub fn numbered_within(items: &[String], entry_max: usize, budget: usize) -> (String, usize) {
    let mut out = String::new();
    let mut used = 0;
    let mut shown = 0;
    for (i, item) in items.iter().enumerate() {
        let line = format!("{}. {}", i + 1, clip(item, entry_max));
        let cost = line.chars().count() + usize::from(shown > 0);
        if used + cost > budget {
            break;
        }
        if shown > 0 {
            out.push('\n');
        }
        out.push_str(&line);
        used += cost;
        shown += 1;
    }
    (out, shown)
}
