pub mod error;
pub mod types;

pub use error::{KvError, Result, TxnAction};
pub use types::{Key, Value};
