//! Domain building blocks for the shows service.
//!
//! Pure types, errors and validation rules shared by the store and the HTTP
//! layer. Nothing in this crate performs I/O.

pub mod error;
pub mod show;
pub mod types;
