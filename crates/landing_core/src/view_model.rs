use crate::descriptor::FormId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuView {
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalView {
    pub shown: bool,
    pub image_src: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionRowView {
    pub index: usize,
    /// Projects both the `active` class and `aria-expanded` on the question.
    pub open: bool,
}

/// Visibility of a selector group's choices panel. `mounted` is the display
/// toggle, `shown` the faded-in class; both false while a form owns the slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorView {
    pub mounted: bool,
    pub shown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRowView {
    pub form_id: FormId,
    pub element_id: String,
    pub mounted: bool,
    pub shown: bool,
    pub submit_enabled: bool,
    pub submit_label: String,
    /// False once the form region renders only the success notice.
    pub inputs_present: bool,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealRowView {
    pub checkbox_id: String,
    pub wrap_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageViewModel {
    pub menu: MenuView,
    pub modal: ModalView,
    pub body_scroll_locked: bool,
    pub accordion: Vec<AccordionRowView>,
    pub program_selector: SelectorView,
    pub inquiry_buttons: SelectorView,
    pub forms: Vec<FormRowView>,
    pub simple_form_title: Option<String>,
    pub reveals: Vec<RevealRowView>,
    pub dirty: bool,
}
