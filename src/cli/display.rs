// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the cribsheet CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `CRIBSHEET_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals), then
//! defaults to dark.
//!
//! Highlighted spans, bucket badges, score percentages. Respects `NO_COLOR`
//! and non-TTY detection for pipelines: without color, highlights fall back to
//! `[brackets]` so the match is still visible in plain text.
//!
//! Rows have a left border only. Question banks are mostly CJK, and counting
//! display columns for a right border would need width tables.
//!
//! # Theme detection order
//!
//! 1. `CRIBSHEET_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::io::{self, Write};
use std::sync::OnceLock;

use cribsheet::{AccuracyBucket, MatchSpan, MatchTier};

/// Width of the horizontal rules.
pub const RULE_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("CRIBSHEET_THEME")
        .ok()
        .as_deref()
        .and_then(parse_theme)
    {
        return theme;
    }

    // COLORFGBG is "fg;bg"; background 7 and up (except 8) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Write a content line: │ content
pub fn row(out: &mut impl Write, content: &str) -> io::Result<()> {
    writeln!(out, "{}│{} {}", border(), reset(), content)
}

/// Write section header: ┌─ LABEL ──────────
pub fn section_top(out: &mut impl Write, label: &str) -> io::Result<()> {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = RULE_WIDTH.saturating_sub(visible_len(&label_part));
    writeln!(
        out,
        "{}┌{}{}{}{}{}",
        border(),
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        reset()
    )
}

/// Write section footer: └──────────────────
pub fn section_bot(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}└{}{}", border(), "─".repeat(RULE_WIDTH), reset())
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Render `text` with the characters at `span` highlighted.
///
/// Colored: bold underlined yellow. Plain: each contiguous run in brackets.
pub fn highlight(text: &str, span: &MatchSpan) -> String {
    highlight_with(text, span, use_colors())
}

fn highlight_with(text: &str, span: &MatchSpan, colored: bool) -> String {
    let (open, close) = if colored {
        (format!("{}{}{}", BOLD, UNDERLINE, BRIGHT_YELLOW()), RESET.to_string())
    } else {
        ("[".to_string(), "]".to_string())
    };

    let mut out = String::with_capacity(text.len() + span.len() * 2);
    let mut in_run = false;
    for (index, c) in text.chars().enumerate() {
        let hit = span.contains(index);
        if hit && !in_run {
            out.push_str(&open);
        } else if !hit && in_run {
            out.push_str(&close);
        }
        in_run = hit;
        out.push(c);
    }
    if in_run {
        out.push_str(&close);
    }
    out
}

/// Color-coded accuracy bucket badge
pub fn bucket_badge(bucket: AccuracyBucket) -> String {
    let label = format!("[{}]", bucket.as_str().to_uppercase());
    if !use_colors() {
        return label;
    }
    let color = match bucket {
        AccuracyBucket::High => GREEN(),
        AccuracyBucket::Medium => YELLOW(),
        AccuracyBucket::Low => RED(),
    };
    format!("{}{}{}", color, label, RESET)
}

/// Score as a right-aligned percentage, colored by bucket
pub fn score_percent(score: f64, bucket: AccuracyBucket) -> String {
    let text = format!("{:>5.1}%", score * 100.0);
    match bucket {
        AccuracyBucket::High => themed(GREEN, &[BOLD], &text),
        AccuracyBucket::Medium => themed(YELLOW, &[], &text),
        AccuracyBucket::Low => themed(GRAY, &[], &text),
    }
}

/// Color-coded scorer tier label
pub fn tier_label(tier: &MatchTier) -> String {
    let label = tier.label();
    if !use_colors() {
        return label.to_string();
    }
    let color = match tier {
        MatchTier::Exact => GREEN(),
        MatchTier::Contains | MatchTier::Contained => BLUE(),
        MatchTier::Similarity { .. } => MAGENTA(),
        MatchTier::EditOnly { .. } => YELLOW(),
        MatchTier::NoMatch => GRAY(),
    };
    format!("{}{}{}", color, label, RESET)
}

/// Dimmed field name for the left column
pub fn field_name(name: &str) -> String {
    themed(GRAY, &[], &format!("{:<9}", name))
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
