//! Exit code constants for the chainconf CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing configuration file)
//! - 2: Configuration error (malformed or structurally invalid document)
//! - 3: I/O failure (reading or persisting the document)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a required configuration file is absent.
pub const USER_ERROR: i32 = 1;

/// Configuration error: the document violates the grammar.
pub const CONFIG_ERROR: i32 = 2;

/// I/O failure while reading or writing the document.
pub const IO_FAILURE: i32 = 3;
