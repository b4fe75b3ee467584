//! Shorthands for sending contract calls.

/// Sends the transaction built by a contract call.
#[macro_export]
macro_rules! send {
    ($e:expr) => {
        $e.send().await
    };
}

/// Sends a transaction and waits until it is mined.
#[macro_export]
macro_rules! watch {
    ($e:expr) => {
        $crate::send!($e)?.watch().await
    };
}

/// Sends a transaction and returns its receipt.
#[macro_export]
macro_rules! receipt {
    ($e:expr) => {
        $crate::send!($e)?.get_receipt().await
    };
}
