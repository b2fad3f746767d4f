pub mod executor;
pub mod help;
pub mod list;

pub use executor::CommandExecutor;
