//! Console output formatting: pile rows and terminal color.
//!
//! Color is cosmetic only. The session keeps the currently selected
//! color and routes all of its output through [`paint`]; the `colored`
//! crate drops the escape codes on non-terminal streams.

use colored::{Color, Colorize};
use nim_engine::game::PILE_COUNT;

/// Format the pile row the way the console displays it: two leading
/// spaces, counts separated by two spaces.
pub fn format_piles(piles: [u8; PILE_COUNT]) -> String {
    format!("  {}  {}  {}", piles[0], piles[1], piles[2])
}

/// Apply the session's current color, if one is set.
pub fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(c) => text.color(c).to_string(),
        None => text.to_string(),
    }
}

/// Resolve a palette name (already lowercased) to a terminal color.
///
/// The palette keeps the historical console names: `brown` is dark
/// yellow, `grey` is the dim white, and the `light*`/`yellow`/`white`
/// entries map onto the bright variants.
pub fn color_from_name(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "cyan" => Color::Cyan,
        "red" => Color::Red,
        "magenta" => Color::Magenta,
        "brown" => Color::Yellow,
        "grey" => Color::White,
        "darkgrey" => Color::BrightBlack,
        "lightblue" => Color::BrightBlue,
        "lightgreen" => Color::BrightGreen,
        "lightcyan" => Color::BrightCyan,
        "lightred" => Color::BrightRed,
        "lightmagenta" => Color::BrightMagenta,
        "yellow" => Color::BrightYellow,
        "white" => Color::BrightWhite,
        _ => return None,
    };
    Some(color)
}
