/// Broad class of a [`CursorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument passed to the cursor was rejected
    InvalidArgument,
    /// The operation is not allowed in the current cursor state
    IllegalState,
}

/// Errors returned by cursor operations.
///
/// Both kinds are contract violations by the caller: retrying the same call
/// on the same cursor fails the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Separator is not ASCII or is one of `?`, `#`, `=`
    InvalidSeparator,
    /// Edit attempted before any parameter was selected
    NoParameterSelected,
}

impl CursorError {
    /// Broad class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSeparator => ErrorKind::InvalidArgument,
            Self::NoParameterSelected => ErrorKind::IllegalState,
        }
    }
}

impl core::fmt::Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidSeparator => "Invalid parameter separator",
            Self::NoParameterSelected => "No parameter selected",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CursorError {}

/// Result type for cursor operations
pub type Result<T> = core::result::Result<T, CursorError>;
