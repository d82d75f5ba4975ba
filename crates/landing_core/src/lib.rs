//! Landing core: pure state machine and view-model helpers.
mod descriptor;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use descriptor::{
    FormDescriptor, FormId, MenuDescriptor, ModalTrigger, PageDescriptor, RevealDescriptor,
    SelectorDescriptor, SelectorGroup, SelectorOption,
};
pub use effect::Effect;
pub use msg::{DispatchOutcome, FieldSnapshot, Msg};
pub use state::{FormPhase, PageState};
pub use update::update;
pub use view_model::{
    AccordionRowView, FormRowView, MenuView, ModalView, PageViewModel, RevealRowView, SelectorView,
};
