//! Core value types for CarQuote

pub mod car;
pub mod money;
pub mod percentage;
