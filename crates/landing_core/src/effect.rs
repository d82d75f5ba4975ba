use crate::descriptor::FormId;
use crate::msg::FieldSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Serialize and POST the snapshot to the form's endpoint, fire-and-forget.
    DispatchSubmission {
        form_id: FormId,
        fields: FieldSnapshot,
    },
    /// Deliver `Msg::TransitionElapsed { token }` after `delay_ms`.
    ScheduleTransition { token: u64, delay_ms: u64 },
    MoveFocus { element_id: String },
    /// Blocking user-facing notice; the submit failure path only.
    ShowAlert { message: String },
    ScrollTo { target_id: String, smooth: bool },
    /// Clear the value of a platform-owned field.
    ClearFieldValue { element_id: String },
}
