//! Core cache components

pub mod dedup;
pub mod entry;
pub mod invalidation;
pub mod key;
pub mod manager;
pub mod store;
pub mod warmer;
