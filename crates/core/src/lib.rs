//! Domain types shared by the store layer and the HTTP layer.

pub mod error;
pub mod login;
pub mod types;
