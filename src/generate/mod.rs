//! Generation orchestration: prompt template, status reporting and the
//! session state machine.

pub mod prompt;
pub mod session;
pub mod status;

pub use prompt::build_prompt;
pub use session::{
    EMPTY_PROMPT_MESSAGE, GenerationReport, GenerationSession, SUCCESS_MESSAGE,
    UNCONFIGURED_PROVIDER_MESSAGE,
};
pub use status::{GenerationState, RecordingStatusSink, StatusSink, StatusUpdate};
