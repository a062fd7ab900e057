//! Assorted utility functions and structures.

use crate::error::Error;
use std::{
    fs::File,
    io::Read,
    sync::{Arc, Mutex},
};

/// Shared thread type able to be passed between threads, used for the
/// handful of types (`GameBoyConfig`) that need to be observed by more
/// than one component owner at once.
pub type SharedThread<T> = Arc<Mutex<T>>;

/// Reads the contents of the file at the given path into a vector of
/// bytes, typed with the core's own error so callers never have to
/// match against `std::io::Error` directly.
pub fn read_file(path: &str) -> Result<Vec<u8>, Error> {
    let mut file = File::open(path)
        .map_err(|_| Error::CustomError(format!("Failed to open file: {}", path)))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|_| Error::CustomError(format!("Failed to read from file: {}", path)))?;
    Ok(data)
}

/// Capitalizes the first character in the provided string.
pub fn capitalize(string: &str) -> String {
    let mut chars = string.chars();
    match chars.next() {
        None => String::new(),
        Some(chr) => chr.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn test_capitalize_empty_string() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_multiple_characters() {
        assert_eq!(capitalize("hello, world!"), "Hello, world!");
    }
}
