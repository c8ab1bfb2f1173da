//! Exit code constants for the CLI application.
//!
//! Every normal termination path (winning, quitting, EOF) exits with
//! `SUCCESS`; only usage errors and stream failures exit nonzero.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code (bad arguments, I/O failure).
pub const ERROR: i32 = 2;
