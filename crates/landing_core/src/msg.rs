use crate::descriptor::{FormId, ModalTrigger, SelectorGroup};

/// Ordered `(name, value)` pairs read from a form's named controls at submit
/// time. Owned by the platform layer; the core only passes it through.
pub type FieldSnapshot = Vec<(String, String)>;

/// Outcome of a dispatched submission as seen by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User activated the hamburger trigger.
    MenuToggled,
    /// User activated a drawer link.
    MenuLinkActivated { index: usize },
    /// User clicked the drawer backdrop.
    MenuBackdropClicked,
    /// Escape key pressed anywhere on the page.
    EscapePressed,
    /// User activated an image preview trigger.
    ModalOpened { trigger: ModalTrigger },
    ModalCloseClicked,
    ModalBackdropClicked,
    /// User toggled an accordion panel (click or Enter/Space).
    AccordionToggled { panel: usize },
    /// User chose a selector option.
    OptionChosen { group: SelectorGroup, key: String },
    /// User activated the back-to-selection control of a visible form.
    BackToSelection { form_id: FormId },
    /// A scheduled cross-fade delay elapsed.
    TransitionElapsed { token: u64 },
    /// A reveal checkbox changed state.
    RevealToggled { checkbox_id: String, checked: bool },
    /// User activated an in-page anchor link.
    AnchorActivated { target_id: String },
    /// User submitted a form; default navigation is already suppressed.
    FormSubmitted {
        form_id: FormId,
        fields: FieldSnapshot,
    },
    /// Engine finished (or failed) the outbound dispatch for a form.
    DispatchCompleted {
        form_id: FormId,
        outcome: DispatchOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
