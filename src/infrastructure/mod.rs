// src/infrastructure/mod.rs

pub mod token_cell;
pub mod token_store;

pub use token_cell::TokenCell;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
