//! Landing engine: submission serialization and webhook dispatch.
mod dispatch;
mod engine;
mod payload;
mod types;

pub use dispatch::{DispatchSettings, Dispatcher, ReqwestDispatcher};
pub use engine::{EngineClock, EngineConfig, EngineHandle};
pub use payload::{FieldMap, FieldValue, FormMeta, SubmissionPayload};
pub use types::{
    DispatchError, DispatchOk, EngineEvent, FailureKind, FormId, SubmissionRequest,
};
