/// Keys and values are both plain strings
pub type Key = String;
pub type Value = String;
