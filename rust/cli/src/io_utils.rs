//! Line input for the interactive console.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Used by the interactive prompts. Trims surrounding whitespace and
/// returns `None` on EOF or read errors, which the session treats as a
/// request to quit.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use nim_cli::io_utils::read_input_line;
///
/// let mut input = Cursor::new(b"take 3 from 1\n");
/// assert_eq!(read_input_line(&mut input), Some("take 3 from 1".to_string()));
/// assert_eq!(read_input_line(&mut input), None);
/// ```
pub fn read_input_line(input: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
