pub type Result<T> = std::result::Result<T, Error>;

/// Alias matching the vocabulary used across the zone/item/coordinator contract.
pub type ZoneError = Error;

#[derive(Debug, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Attempt to insert a pseudo-class/pseudo-type RR, or a malformed name.
    Invalid,
    /// Allocation failure during insert or answer construction.
    OutOfMemory,
    /// The zone would exceed `ZONE_MAX`.
    CapacityExceeded,
    /// `ProbeCoordinator::attach` failed; the caller removes the item.
    TransactionFailure,
    SerdeYaml,
    Io,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    pub fn from_kind(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message),
            None => self.kind.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ErrorKind::*;

        match self {
            Invalid => write!(f, "invalid resource record"),
            OutOfMemory => write!(f, "out of memory"),
            CapacityExceeded => write!(f, "zone capacity exceeded"),
            TransactionFailure => write!(f, "probe transaction failure"),
            SerdeYaml => write!(f, "serde yaml error"),
            Io => write!(f, "io error"),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(value: serde_yaml::Error) -> Self {
        Self {
            kind: ErrorKind::SerdeYaml,
            message: Some(value.to_string()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: Some(value.to_string()),
        }
    }
}
