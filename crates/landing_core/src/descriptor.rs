pub type FormId = u64;

/// Static configuration for one logical form on the page.
///
/// Descriptors are built once at initialization and stay immutable for the
/// page lifetime. Each component receives exactly the targets it acts on
/// instead of querying a shared document at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDescriptor {
    pub form_id: FormId,
    /// Element id of the form, e.g. `form-karbon-performance`.
    pub element_id: String,
    /// Human-readable name reported in the submission payload.
    pub name: String,
    /// Webhook endpoint receiving the serialized submission.
    pub endpoint: String,
    pub submit_label: String,
    pub busy_label: String,
    pub success_notice: String,
    pub failure_alert: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorGroup {
    Program,
    Inquiry,
}

/// One clickable option in a selector group, keyed by the value the page
/// encodes on the option element (`data-program` / `data-inquiry`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub key: String,
    pub target: FormId,
    /// Title applied to the shared simple form when this option is chosen.
    pub title_override: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorDescriptor {
    pub program_options: Vec<SelectorOption>,
    pub inquiry_options: Vec<SelectorOption>,
    pub fade_out_ms: u64,
    pub mount_delay_ms: u64,
}

impl Default for SelectorDescriptor {
    fn default() -> Self {
        Self {
            program_options: Vec::new(),
            inquiry_options: Vec::new(),
            fade_out_ms: 300,
            mount_delay_ms: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuDescriptor {
    /// Element id of the hamburger trigger control.
    pub trigger_id: String,
    /// Element ids of the drawer links in document order.
    pub link_ids: Vec<String>,
}

/// Image reference carried by a preview trigger (`data-image` / `data-alt`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalTrigger {
    pub image_src: String,
    pub image_alt: String,
}

/// A checkbox revealing a companion free-text wrap while checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealDescriptor {
    pub checkbox_id: String,
    pub wrap_id: String,
    /// Companion field cleared when the checkbox is unchecked.
    pub companion_field_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageDescriptor {
    /// Fixed site identifier reported in every submission payload.
    pub source: String,
    /// Current document path reported in every submission payload.
    pub page_path: String,
    pub forms: Vec<FormDescriptor>,
    pub selector: SelectorDescriptor,
    pub accordion_panels: usize,
    pub menu: MenuDescriptor,
    pub reveals: Vec<RevealDescriptor>,
    /// Valid in-page anchor targets, in document order.
    pub anchor_targets: Vec<String>,
    pub prefers_reduced_motion: bool,
}

impl PageDescriptor {
    pub fn form(&self, form_id: FormId) -> Option<&FormDescriptor> {
        self.forms.iter().find(|form| form.form_id == form_id)
    }
}
