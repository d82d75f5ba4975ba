use crate::state::{FormPhase, GroupPhase, PageState};
use crate::{DispatchOutcome, Effect, FieldSnapshot, FormId, Msg, SelectorGroup};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::MenuToggled => {
            if state.menu_is_open() {
                close_menu(&mut state)
            } else {
                open_menu(&mut state)
            }
        }
        Msg::MenuLinkActivated { .. } | Msg::MenuBackdropClicked => {
            if state.menu_is_open() {
                close_menu(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::EscapePressed => {
            // The page wires independent Escape listeners; modal and menu
            // both close when open.
            let mut effects = Vec::new();
            if state.modal().is_some() {
                state.set_modal(None);
            }
            if state.menu_is_open() {
                effects.extend(close_menu(&mut state));
            }
            effects
        }
        Msg::ModalOpened { trigger } => {
            state.set_modal(Some(trigger));
            Vec::new()
        }
        Msg::ModalCloseClicked | Msg::ModalBackdropClicked => {
            state.set_modal(None);
            Vec::new()
        }
        Msg::AccordionToggled { panel } => {
            state.toggle_accordion(panel);
            Vec::new()
        }
        Msg::OptionChosen { group, key } => choose_option(&mut state, group, &key),
        Msg::BackToSelection { form_id } => back_to_selection(&mut state, form_id),
        Msg::TransitionElapsed { token } => advance_transition(&mut state, token),
        Msg::RevealToggled {
            checkbox_id,
            checked,
        } => toggle_reveal(&mut state, &checkbox_id, checked),
        Msg::AnchorActivated { target_id } => activate_anchor(&state, target_id),
        Msg::FormSubmitted { form_id, fields } => submit_form(&mut state, form_id, fields),
        Msg::DispatchCompleted { form_id, outcome } => {
            complete_dispatch(&mut state, form_id, outcome)
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn open_menu(state: &mut PageState) -> Vec<Effect> {
    state.set_menu_open(true);
    // Focus moves into the drawer's first link.
    match state.descriptor().menu.link_ids.first() {
        Some(link) => vec![Effect::MoveFocus {
            element_id: link.clone(),
        }],
        None => Vec::new(),
    }
}

fn close_menu(state: &mut PageState) -> Vec<Effect> {
    state.set_menu_open(false);
    // Focus returns to the trigger control.
    vec![Effect::MoveFocus {
        element_id: state.descriptor().menu.trigger_id.clone(),
    }]
}

fn choose_option(state: &mut PageState, group: SelectorGroup, key: &str) -> Vec<Effect> {
    // The choices are hidden while a transition or form owns the slot, so a
    // click can only arrive in the Choices phase.
    if !matches!(state.group_phase(group), GroupPhase::Choices) {
        return Vec::new();
    }
    let options = match group {
        SelectorGroup::Program => &state.descriptor().selector.program_options,
        SelectorGroup::Inquiry => &state.descriptor().selector.inquiry_options,
    };
    let Some(option) = options.iter().find(|option| option.key == key).cloned() else {
        return Vec::new();
    };
    if let Some(title) = option.title_override.clone() {
        state.set_simple_form_title(title);
    }
    let token = state.next_token();
    state.set_group_phase(
        group,
        GroupPhase::FadingOut {
            target: option.target,
            token,
        },
    );
    vec![Effect::ScheduleTransition {
        token,
        delay_ms: state.descriptor().selector.fade_out_ms,
    }]
}

fn back_to_selection(state: &mut PageState, form_id: FormId) -> Vec<Effect> {
    for group in [SelectorGroup::Program, SelectorGroup::Inquiry] {
        if matches!(state.group_phase(group), GroupPhase::FormShown { target } if target == form_id)
        {
            let token = state.next_token();
            state.set_group_phase(
                group,
                GroupPhase::FormFadingOut {
                    target: form_id,
                    token,
                },
            );
            return vec![Effect::ScheduleTransition {
                token,
                delay_ms: state.descriptor().selector.fade_out_ms,
            }];
        }
    }
    Vec::new()
}

fn advance_transition(state: &mut PageState, token: u64) -> Vec<Effect> {
    for group in [SelectorGroup::Program, SelectorGroup::Inquiry] {
        match state.group_phase(group) {
            GroupPhase::FadingOut { target, token: t } if t == token => {
                let next = state.next_token();
                state.set_group_phase(group, GroupPhase::Mounting { target, token: next });
                return vec![Effect::ScheduleTransition {
                    token: next,
                    delay_ms: state.descriptor().selector.mount_delay_ms,
                }];
            }
            GroupPhase::Mounting { target, token: t } if t == token => {
                state.set_group_phase(group, GroupPhase::FormShown { target });
                return Vec::new();
            }
            GroupPhase::FormFadingOut { token: t, .. } if t == token => {
                let next = state.next_token();
                state.set_group_phase(group, GroupPhase::ChoicesMounting { token: next });
                return vec![Effect::ScheduleTransition {
                    token: next,
                    delay_ms: state.descriptor().selector.mount_delay_ms,
                }];
            }
            GroupPhase::ChoicesMounting { token: t } if t == token => {
                state.set_group_phase(group, GroupPhase::Choices);
                return Vec::new();
            }
            _ => {}
        }
    }
    // Superseded token; a newer transition owns the group.
    Vec::new()
}

fn toggle_reveal(state: &mut PageState, checkbox_id: &str, checked: bool) -> Vec<Effect> {
    let Some(reveal) = state
        .descriptor()
        .reveals
        .iter()
        .find(|reveal| reveal.checkbox_id == checkbox_id)
        .cloned()
    else {
        return Vec::new();
    };
    state.set_reveal(checkbox_id, checked);
    if checked {
        Vec::new()
    } else {
        // Hiding the wrap also clears the companion field.
        vec![Effect::ClearFieldValue {
            element_id: reveal.companion_field_id,
        }]
    }
}

fn activate_anchor(state: &PageState, target_id: String) -> Vec<Effect> {
    if !state
        .descriptor()
        .anchor_targets
        .iter()
        .any(|target| *target == target_id)
    {
        return Vec::new();
    }
    let smooth = !state.descriptor().prefers_reduced_motion;
    vec![
        Effect::ScrollTo {
            target_id: target_id.clone(),
            smooth,
        },
        Effect::MoveFocus {
            element_id: target_id,
        },
    ]
}

fn submit_form(state: &mut PageState, form_id: FormId, fields: FieldSnapshot) -> Vec<Effect> {
    match state.form_phase(form_id) {
        Some(FormPhase::Editing) => {
            state.set_form_phase(form_id, FormPhase::InFlight);
            vec![Effect::DispatchSubmission { form_id, fields }]
        }
        // In flight the control is disabled; after success the form is inert.
        Some(FormPhase::InFlight) | Some(FormPhase::Succeeded) | None => Vec::new(),
    }
}

fn complete_dispatch(
    state: &mut PageState,
    form_id: FormId,
    outcome: DispatchOutcome,
) -> Vec<Effect> {
    if state.form_phase(form_id) != Some(FormPhase::InFlight) {
        return Vec::new();
    }
    match outcome {
        DispatchOutcome::Success => {
            state.set_form_phase(form_id, FormPhase::Succeeded);
            Vec::new()
        }
        DispatchOutcome::Failed => {
            // Roll back so the user can retry; field values are untouched.
            state.set_form_phase(form_id, FormPhase::Editing);
            let message = state
                .descriptor()
                .form(form_id)
                .map(|form| form.failure_alert.clone())
                .unwrap_or_default();
            vec![Effect::ShowAlert { message }]
        }
    }
}
