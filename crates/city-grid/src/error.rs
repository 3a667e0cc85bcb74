use thiserror::Error;

/// Errors raised while parsing user edit intents.
///
/// Applying a parsed intent never fails; cells that cannot take the tool are
/// skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("unknown edit tool {0:?}")]
    UnknownTool(String),

    #[error("malformed park tool {0:?}, expected park:W:D")]
    MalformedPark(String),

    #[error("park footprint {width}x{depth} must cover between 1 and {max} cells")]
    InvalidParkSize { width: u32, depth: u32, max: u32 },
}

pub type EditResult<T> = Result<T, EditError>;
