pub mod fixtures;
pub mod secret_key;
