use society_types::VisitorId;
use thiserror::Error;

/// Conditions surfaced to the gate operator. None of them are fatal.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("no code supplied")]
    EmptyInput,

    #[error("invalid QR code or ID {0:?}: no visitor found")]
    NotFound(String),

    #[error("invalid gate state: {0}")]
    InvalidState(String),

    #[error("unable to access camera: {0}")]
    DeviceUnavailable(String),

    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),
}

impl GateError {
    /// Whether the operator message for this condition stays until acted upon
    /// instead of dismissing itself.
    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::DeviceUnavailable(_))
    }
}

/// Problems with the pre-authorization data loaded into a directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("visitor id must not be blank")]
    BlankId,

    #[error("duplicate visitor id {0}")]
    DuplicateId(VisitorId),

    #[error("access code {code:?} is shared by upcoming visitors {first} and {second}")]
    DuplicateAccessCode {
        code: String,
        first: VisitorId,
        second: VisitorId,
    },

    #[error("unknown visitor {0}")]
    UnknownVisitor(VisitorId),
}
