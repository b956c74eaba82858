//! Dictionary word lists

mod loader;

pub use loader::{load_from_file, words_from_str};
