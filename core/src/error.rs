use core::fmt;

/// Error type for packing and emitting operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    IoError(embedded_io::ErrorKind),
    /// Name cannot be used as a C identifier
    InvalidIdentifier,
    /// Channel fields overlap, repeat, or do not fit a 16-bit word
    InvalidLayout,
    /// Pixel data does not match the declared width and height
    InvalidDimensions,
    InvalidLineWidth,
    /// Number of values pushed differs from the declared array size
    CountMismatch { declared: u64, written: u64 },
    FormatError,
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub(crate) fn from_io_error(error: impl embedded_io::Error) -> Self {
        Error::IoError(error.kind())
    }
}

impl embedded_io::Error for Error {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Error::IoError(kind) => *kind,
            Error::InvalidIdentifier
            | Error::InvalidLayout
            | Error::InvalidDimensions
            | Error::InvalidLineWidth => embedded_io::ErrorKind::InvalidInput,
            Error::CountMismatch { .. } => embedded_io::ErrorKind::InvalidData,
            Error::FormatError => embedded_io::ErrorKind::Other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(kind) => write!(f, "write failed: {kind:?}"),
            Error::InvalidIdentifier => f.write_str("name is not a valid C identifier"),
            Error::InvalidLayout => f.write_str("invalid color layout"),
            Error::InvalidDimensions => f.write_str("pixel count does not match image dimensions"),
            Error::InvalidLineWidth => f.write_str("values per line must be at least 1"),
            Error::CountMismatch { declared, written } => {
                write!(f, "declared {declared} values but wrote {written}")
            }
            Error::FormatError => f.write_str("formatting failed"),
        }
    }
}

impl core::error::Error for Error {}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Error::FormatError
    }
}
