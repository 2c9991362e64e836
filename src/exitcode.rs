//! Process exit codes

/// The external tool reported success
pub const OK: u8 = 0;

/// The external tool reported an error
pub const FAILURE: u8 = 1;

/// Command line usage error
pub const USAGE: u8 = 2;

/// Internal software error
pub const SOFTWARE: u8 = 70;
