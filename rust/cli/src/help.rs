//! Help screen formatting and static game documentation.
//!
//! Command descriptions are wrapped to a fixed column width and
//! right-aligned against an 80-column console, with the syntax string
//! on the left. The layout matches the in-game `help` screen users see.

/// Width the help screen is laid out against.
pub const CONSOLE_WIDTH: usize = 80;
/// Width description text is wrapped (and padded) to.
pub const DESCRIPTION_WIDTH: usize = 50;

/// Rules text printed by the `how2play` command.
pub const HOW2PLAY: &str = "\
  NIM is played with three piles of chips. Two parties take turns; on
  each turn you remove any number of chips (at least one) from exactly
  one pile. Whoever takes the very last chip wins the game.

  On your turn, type 'take <number> from <pile>' (or just the number of
  chips followed by the pile, e.g. '4 2'). Piles are numbered 1 to 3,
  left to right, and 'show' prints them at any time. Type 'help' for
  the full command list, 'restart' to start over, and 'exit' when you
  have had enough.";

/// Greedily wrap `text` into lines of at most `width` characters,
/// padding each line with trailing spaces to exactly `width`.
pub fn word_wrap_fill(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.len() + 1 + word.len() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            line.push_str(&" ".repeat(width.saturating_sub(line.len())));
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        line.push_str(&" ".repeat(width.saturating_sub(line.len())));
        lines.push(line);
    }
    lines
}

/// Render one help entry: the syntax string, then the wrapped
/// description right-aligned in the remaining console width. Long
/// syntax strings push the description onto their own lines.
pub fn render_entry(syntax: &str, description: &str) -> String {
    let mut out = format!("  {}", syntax);
    let mut offset = (syntax.len() + 2) % CONSOLE_WIDTH;
    if offset >= CONSOLE_WIDTH - DESCRIPTION_WIDTH - 1 {
        out.push('\n');
        offset = 0;
    }
    for line in word_wrap_fill(description, DESCRIPTION_WIDTH) {
        out.push_str(&format!(
            "{:>width$}\n",
            line,
            width = CONSOLE_WIDTH - 1 - offset
        ));
        offset = 0;
    }
    out.push('\n');
    out
}
