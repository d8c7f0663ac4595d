//! Reading text from a file, stdin, or bytes.

use crate::error::Error;
use core::fmt::{self, Display, Formatter};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// `Input` to read from a file, stdin, or bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
    Bytes(Box<[u8]>),
}

impl Input {
    /// Construct an `Input` from a file path or stdin (designated by "-").
    pub fn new<P: AsRef<Path>>(p: P) -> Self {
        let path = p.as_ref();
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Create an `Input` from byte data.
    pub fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> Self {
        Self::Bytes(bytes.as_ref().into())
    }

    /// Reads the whole input, validating that it is UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the source can't be read, or `Error::Utf8` if its
    /// contents are not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use title_fix::Input;
    ///
    /// let input = Input::from_bytes("the art of war");
    /// assert_eq!(input.read_to_string()?, "the art of war");
    ///
    /// let invalid = Input::from_bytes([b'o', b'k', 0xFF]);
    /// assert!(invalid.read_to_string().is_err());
    /// # Ok::<(), title_fix::Error>(())
    /// ```
    pub fn read_to_string(&self) -> Result<String, Error> {
        let bytes = match self {
            Self::Stdin => {
                let mut buffer = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut buffer)
                    .map_err(|source| Error::Io {
                        path: "-".to_string(),
                        message: "failed to read stdin".into(),
                        source,
                    })?;
                buffer
            }
            Self::File(path) => fs::read(path).map_err(|source| {
                let message = match source.kind() {
                    io::ErrorKind::NotFound => "no such file".to_string(),
                    io::ErrorKind::PermissionDenied => "permission denied".to_string(),
                    _ => "failed to read file".to_string(),
                };

                Error::Io {
                    path: path.display().to_string(),
                    message,
                    source,
                }
            })?,
            Self::Bytes(bytes) => bytes.to_vec(),
        };

        match simdutf8::compat::from_utf8(&bytes) {
            Ok(_) => String::from_utf8(bytes).map_err(|e| Error::Utf8 {
                byte: e.utf8_error().valid_up_to(),
                message: e.to_string(),
            }),
            Err(e) => Err(Error::Utf8 {
                byte: e.valid_up_to(),
                message: e.to_string(),
            }),
        }
    }

    /// Returns the file name of the input or `"-"` for stdin.
    pub fn source(&self) -> String {
        match self {
            Self::Stdin => "-".to_string(),
            Self::File(path) => path.file_name().map_or_else(
                || format!("No filename: {}", path.display()),
                |name| {
                    name.to_str().map_or_else(
                        || format!("Non-UTF-8 filename: {name:?}"),
                        ToString::to_string,
                    )
                },
            ),
            Self::Bytes(_) => "<bytes>".to_string(),
        }
    }

    /// Get the size of the input in bytes, if available.
    /// Returns `None` for stdin and when a filesize can't be determined.
    pub fn size(&self) -> Option<u64> {
        match self {
            Self::Stdin => None,
            Self::File(path) => fs::metadata(path).map(|metadata| metadata.len()).ok(),
            Self::Bytes(bytes) => u64::try_from(bytes.len()).ok(),
        }
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "Stdin"),
            Self::File(path) => write!(f, "File({})", path.display()),
            Self::Bytes(_) => write!(f, "Bytes"),
        }
    }
}
