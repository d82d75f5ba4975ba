use std::fmt;

use crate::payload::{FieldMap, FormMeta};

pub type FormId = u64;

/// Successful dispatch. Deliberately empty: the response is opaque by design,
/// so transport completion is the only thing success can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOk;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct DispatchError {
    pub kind: FailureKind,
    pub message: String,
}

impl DispatchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Everything the engine needs to build and send one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub form_id: FormId,
    pub endpoint: String,
    pub meta: FormMeta,
    pub source: String,
    pub page: String,
    pub fields: FieldMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    DispatchCompleted {
        form_id: FormId,
        result: Result<DispatchOk, DispatchError>,
    },
}
