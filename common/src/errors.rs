use std::fmt::Display;

use near_sdk::env;

/// Converts a failed operation into a failed receipt.
///
/// Panicking aborts the receipt and discards every state write it made, so an entry point that
/// ends in `or_abort()` either applies fully or not at all.
pub trait OrAbort<T> {
    fn or_abort(self) -> T;
}

impl<T, E: Display> OrAbort<T> for Result<T, E> {
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => env::panic_str(&err.to_string()),
        }
    }
}
