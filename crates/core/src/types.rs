/// Primary key type for every stored record.
pub type DbId = i64;
