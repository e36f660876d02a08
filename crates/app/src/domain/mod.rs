//! Shopfront Domain Concerns

pub mod accounts;
pub mod cart;
