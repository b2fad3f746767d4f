pub mod database;

pub use database::KvDatabase;
