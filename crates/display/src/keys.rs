//! Key codes recognised by the display loop.

/// Escape, the only key that ends the loop.
pub const ESCAPE: i32 = 27;

/// Enter. Not a command; useful for tests and logs.
pub const ENTER: i32 = 13;

/// Only the lowest 8 bits of a key code are compared.
pub const KEY_MASK: i32 = 0xFF;

/// Whether `code` should terminate the display loop.
pub fn is_exit_key(code: i32) -> bool {
    code & KEY_MASK == ESCAPE
}
