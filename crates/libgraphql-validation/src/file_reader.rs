use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads a GraphQL source file (schema or executable document) into a
/// `String`.
///
/// A leading byte-order mark is dropped so that reported columns on the
/// first line match what editors show.
pub fn read_content(file_path: impl AsRef<Path>) -> Result<String, ReadContentError> {
    let file_path = file_path.as_ref();
    let io_error = |err: std::io::Error| ReadContentError::Io {
        file_path: file_path.to_path_buf(),
        kind: err.kind(),
    };

    if !std::fs::metadata(file_path).map_err(io_error)?.is_file() {
        return Err(ReadContentError::NotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(io_error)?;
    let mut content = String::from_utf8(bytes)
        .map_err(|err| ReadContentError::InvalidUtf8 {
            file_path: file_path.to_path_buf(),
            valid_up_to: err.utf8_error().valid_up_to(),
        })?;

    if content.starts_with(BYTE_ORDER_MARK) {
        content.drain(..BYTE_ORDER_MARK.len_utf8());
    }
    Ok(content)
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ReadContentError {
    #[error("{file_path:?} is not valid UTF-8 (first bad byte at offset {valid_up_to})")]
    InvalidUtf8 {
        file_path: PathBuf,
        valid_up_to: usize,
    },

    #[error("Failed to read {file_path:?}: {kind}")]
    Io {
        file_path: PathBuf,
        kind: std::io::ErrorKind,
    },

    #[error("Not a file: {0:?}")]
    NotAFile(PathBuf),
}
