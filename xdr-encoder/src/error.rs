use std::{io, sync::Arc};

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum XdrError {
    /// The sink failed while accepting bytes.
    ///
    /// `accepted` is the number of bytes the failing call got into the sink before the failure.
    #[error("sink write failed after {accepted} bytes: {source}")]
    Sink { accepted: usize, source: Arc<io::Error> },

    /// A payload too long for the 32-bit length prefix.
    #[error("payload of {0} bytes does not fit a 32-bit length prefix")]
    TooLong(usize),
}

impl XdrError {
    pub(crate) fn sink(accepted: usize, err: io::Error) -> Self {
        XdrError::Sink {
            accepted,
            source: Arc::new(err),
        }
    }

    /// Bytes accepted by the sink during the call that returned this error.
    pub fn accepted(&self) -> usize {
        match self {
            XdrError::Sink { accepted, .. } => *accepted,
            XdrError::TooLong(_) => 0,
        }
    }

    /// The underlying sink error, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            XdrError::Sink { source, .. } => Some(source),
            XdrError::TooLong(_) => None,
        }
    }

    pub(crate) fn with_accepted(&self, accepted: usize) -> Self {
        match self {
            XdrError::Sink { source, .. } => XdrError::Sink {
                accepted,
                source: source.clone(),
            },
            other => other.clone(),
        }
    }
}

/// Two sink errors are equal when they share the same underlying failure.
impl PartialEq for XdrError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (XdrError::Sink { source: a, .. }, XdrError::Sink { source: b, .. }) => Arc::ptr_eq(a, b),
            (XdrError::TooLong(a), XdrError::TooLong(b)) => a == b,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, XdrError>;
