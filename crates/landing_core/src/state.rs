use std::collections::BTreeMap;

use crate::descriptor::{FormId, ModalTrigger, PageDescriptor, SelectorGroup};
use crate::view_model::{
    AccordionRowView, FormRowView, MenuView, ModalView, PageViewModel, RevealRowView, SelectorView,
};

/// Submission lifecycle of one form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    InFlight,
    /// Terminal for this page view; the form stays inert.
    Succeeded,
}

/// Cross-fade progression of one selector group. At every instant at most one
/// panel of the group (choices or a form) is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum GroupPhase {
    #[default]
    Choices,
    FadingOut {
        target: FormId,
        token: u64,
    },
    Mounting {
        target: FormId,
        token: u64,
    },
    FormShown {
        target: FormId,
    },
    FormFadingOut {
        target: FormId,
        token: u64,
    },
    ChoicesMounting {
        token: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    descriptor: PageDescriptor,
    menu_open: bool,
    modal: Option<ModalTrigger>,
    accordion_open: Option<usize>,
    program: GroupPhase,
    inquiry: GroupPhase,
    forms: BTreeMap<FormId, FormPhase>,
    reveals: BTreeMap<String, bool>,
    simple_form_title: Option<String>,
    transition_seq: u64,
    dirty: bool,
}

impl PageState {
    pub fn new(descriptor: PageDescriptor) -> Self {
        let forms = descriptor
            .forms
            .iter()
            .map(|form| (form.form_id, FormPhase::default()))
            .collect();
        // Reveals start unchecked; the wrap renders hidden until toggled.
        let reveals = descriptor
            .reveals
            .iter()
            .map(|reveal| (reveal.checkbox_id.clone(), false))
            .collect();
        Self {
            descriptor,
            forms,
            reveals,
            ..Self::default()
        }
    }

    pub fn descriptor(&self) -> &PageDescriptor {
        &self.descriptor
    }

    pub fn menu_is_open(&self) -> bool {
        self.menu_open
    }

    pub fn modal(&self) -> Option<&ModalTrigger> {
        self.modal.as_ref()
    }

    pub fn accordion_open(&self) -> Option<usize> {
        self.accordion_open
    }

    pub fn form_phase(&self, form_id: FormId) -> Option<FormPhase> {
        self.forms.get(&form_id).copied()
    }

    pub fn view(&self) -> PageViewModel {
        let accordion = (0..self.descriptor.accordion_panels)
            .map(|index| AccordionRowView {
                index,
                open: self.accordion_open == Some(index),
            })
            .collect();

        let forms = self
            .descriptor
            .forms
            .iter()
            .map(|form| {
                let phase = self.forms.get(&form.form_id).copied().unwrap_or_default();
                let (mounted, shown) = self.form_mount(form.form_id);
                FormRowView {
                    form_id: form.form_id,
                    element_id: form.element_id.clone(),
                    mounted,
                    shown,
                    submit_enabled: phase == FormPhase::Editing,
                    submit_label: if phase == FormPhase::InFlight {
                        form.busy_label.clone()
                    } else {
                        form.submit_label.clone()
                    },
                    inputs_present: phase != FormPhase::Succeeded,
                    notice: (phase == FormPhase::Succeeded)
                        .then(|| form.success_notice.clone()),
                }
            })
            .collect();

        let reveals = self
            .descriptor
            .reveals
            .iter()
            .map(|reveal| RevealRowView {
                checkbox_id: reveal.checkbox_id.clone(),
                wrap_hidden: !self.reveals.get(&reveal.checkbox_id).copied().unwrap_or(false),
            })
            .collect();

        PageViewModel {
            menu: MenuView {
                open: self.menu_open,
            },
            modal: match &self.modal {
                Some(trigger) => ModalView {
                    shown: true,
                    image_src: trigger.image_src.clone(),
                    image_alt: trigger.image_alt.clone(),
                },
                // Closing clears the image, matching the page behavior.
                None => ModalView::default(),
            },
            body_scroll_locked: self.menu_open || self.modal.is_some(),
            accordion,
            program_selector: selector_view(&self.program),
            inquiry_buttons: selector_view(&self.inquiry),
            forms,
            simple_form_title: self.simple_form_title.clone(),
            reveals,
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag; the shell re-renders on true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn form_mount(&self, form_id: FormId) -> (bool, bool) {
        for phase in [&self.program, &self.inquiry] {
            match phase {
                GroupPhase::Mounting { target, .. } if *target == form_id => return (true, false),
                GroupPhase::FormShown { target } if *target == form_id => return (true, true),
                GroupPhase::FormFadingOut { target, .. } if *target == form_id => {
                    return (true, false)
                }
                _ => {}
            }
        }
        (false, false)
    }

    pub(crate) fn set_menu_open(&mut self, open: bool) {
        if self.menu_open != open {
            self.menu_open = open;
            self.dirty = true;
        }
    }

    pub(crate) fn set_modal(&mut self, modal: Option<ModalTrigger>) {
        if self.modal != modal {
            self.modal = modal;
            self.dirty = true;
        }
    }

    pub(crate) fn toggle_accordion(&mut self, panel: usize) {
        if panel >= self.descriptor.accordion_panels {
            return;
        }
        self.accordion_open = if self.accordion_open == Some(panel) {
            None
        } else {
            Some(panel)
        };
        self.dirty = true;
    }

    pub(crate) fn group_phase(&self, group: SelectorGroup) -> GroupPhase {
        match group {
            SelectorGroup::Program => self.program,
            SelectorGroup::Inquiry => self.inquiry,
        }
    }

    pub(crate) fn set_group_phase(&mut self, group: SelectorGroup, phase: GroupPhase) {
        match group {
            SelectorGroup::Program => self.program = phase,
            SelectorGroup::Inquiry => self.inquiry = phase,
        }
        self.dirty = true;
    }

    pub(crate) fn next_token(&mut self) -> u64 {
        self.transition_seq += 1;
        self.transition_seq
    }

    pub(crate) fn set_form_phase(&mut self, form_id: FormId, phase: FormPhase) {
        if let Some(slot) = self.forms.get_mut(&form_id) {
            if *slot != phase {
                *slot = phase;
                self.dirty = true;
            }
        }
    }

    pub(crate) fn set_reveal(&mut self, checkbox_id: &str, checked: bool) {
        if let Some(slot) = self.reveals.get_mut(checkbox_id) {
            if *slot != checked {
                *slot = checked;
                self.dirty = true;
            }
        }
    }

    pub(crate) fn set_simple_form_title(&mut self, title: String) {
        if self.simple_form_title.as_deref() != Some(title.as_str()) {
            self.simple_form_title = Some(title);
            self.dirty = true;
        }
    }
}

fn selector_view(phase: &GroupPhase) -> SelectorView {
    match phase {
        GroupPhase::Choices => SelectorView {
            mounted: true,
            shown: true,
        },
        GroupPhase::FadingOut { .. } | GroupPhase::ChoicesMounting { .. } => SelectorView {
            mounted: true,
            shown: false,
        },
        GroupPhase::Mounting { .. }
        | GroupPhase::FormShown { .. }
        | GroupPhase::FormFadingOut { .. } => SelectorView {
            mounted: false,
            shown: false,
        },
    }
}
