//! Command implementations.

pub mod inspect;
