// Session credential storage

pub mod token_cache;

pub use token_cache::{FileTokenCache, MemoryTokenCache, TokenCache};
