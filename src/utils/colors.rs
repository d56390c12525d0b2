/// ANSI color helper utilities for terminal output.
use crate::errors::{AppError, AppResult};
use ansi_term::{Colour, Style};
use regex::Regex;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const YELLOW: &str = "\x1b[33m";

/// Color assigned by the backend when an event is created without one.
pub const DEFAULT_EVENT_COLOR: &str = "#3182CE";

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$")
            .expect("hex color regex")
    })
}

/// Parse "#RRGGBB" into its components.
pub fn parse_hex_color(s: &str) -> AppResult<(u8, u8, u8)> {
    let caps = hex_re()
        .captures(s.trim())
        .ok_or_else(|| AppError::InvalidColor(s.to_string()))?;

    let channel = |i: usize| {
        u8::from_str_radix(&caps[i], 16).map_err(|_| AppError::InvalidColor(s.to_string()))
    };

    Ok((channel(1)?, channel(2)?, channel(3)?))
}

/// Style for an event block: the event color as background.
/// Unparseable colors fall back to the backend default.
pub fn event_style(hex: &str) -> Style {
    let (r, g, b) = parse_hex_color(hex).unwrap_or_else(|e| {
        log::warn!("{e}, using {DEFAULT_EVENT_COLOR}");
        (0x31, 0x82, 0xCE)
    });

    // pick a readable foreground for the background luminance
    let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    let fg = if luma > 150.0 {
        Colour::Black
    } else {
        Colour::White
    };

    fg.on(Colour::RGB(r, g, b))
}

pub fn paint_event(hex: &str, text: &str) -> String {
    event_style(hex).paint(text).to_string()
}

/// Grey out a truncated marker, highlight today.
pub fn colorize_flag(value: &str, highlight: bool) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else if highlight {
        format!("{YELLOW}{value}{RESET}")
    } else {
        value.to_string()
    }
}
