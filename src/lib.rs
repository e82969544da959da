/// A single named monetary balance with exact decimal arithmetic.
pub mod account;

/// The fixed account registry and the concurrent money transfer protocol.
pub mod bank;

/// HTTP front plus bootstrap helpers for the binary.
///
/// NOTE: This could live in its own crate, but keeping it in the library lets
/// the integration tests drive the exact router the binary serves.
pub mod server;
