/// Store access module
///
/// The external image store is a REST endpoint holding the
/// authoritative record list. Everything here goes through the
/// client in client.rs; the rest of the app never touches HTTP.

pub mod client;

pub use client::{ImageStore, StoreError};
