//! Dictionary loading
//!
//! Dictionaries are plain text with one word per line. No filtering happens here
//! beyond trimming; the index decides which entries are usable.

use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Split dictionary text into words, trimming each line and dropping blank ones
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::words_from_str;
///
/// let words = words_from_str("tenet\n  teeth \n\nCaps\r\n");
/// assert_eq!(words, ["tenet", "teeth", "Caps"]);
/// ```
#[must_use]
pub fn words_from_str(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
