//! Data access for the store, one repository per table.

mod show_repo;

pub use show_repo::ShowRepo;
