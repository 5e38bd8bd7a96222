/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The collection mirror, search filter, and pagination (collection.rs)

pub mod collection;
pub mod data;
