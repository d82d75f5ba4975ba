use landing_core::{update, Effect, Msg, PageDescriptor, PageState, RevealDescriptor};

fn page() -> PageDescriptor {
    PageDescriptor {
        reveals: vec![RevealDescriptor {
            checkbox_id: "interest-other".to_string(),
            wrap_id: "interest-other-wrap".to_string(),
            companion_field_id: "interest-other-text".to_string(),
        }],
        anchor_targets: vec!["skraning".to_string(), "faq".to_string()],
        prefers_reduced_motion: false,
        ..PageDescriptor::default()
    }
}

#[test]
fn wrap_starts_hidden() {
    let state = PageState::new(page());
    let view = state.view();

    assert!(view.reveals[0].wrap_hidden);
}

#[test]
fn checking_reveals_the_wrap() {
    let state = PageState::new(page());

    let (next, effects) = update(
        state,
        Msg::RevealToggled {
            checkbox_id: "interest-other".to_string(),
            checked: true,
        },
    );

    assert!(!next.view().reveals[0].wrap_hidden);
    assert!(effects.is_empty());
}

#[test]
fn unchecking_hides_and_clears_the_companion_field() {
    let state = PageState::new(page());
    let (state, _effects) = update(
        state,
        Msg::RevealToggled {
            checkbox_id: "interest-other".to_string(),
            checked: true,
        },
    );

    let (next, effects) = update(
        state,
        Msg::RevealToggled {
            checkbox_id: "interest-other".to_string(),
            checked: false,
        },
    );

    assert!(next.view().reveals[0].wrap_hidden);
    assert_eq!(
        effects,
        vec![Effect::ClearFieldValue {
            element_id: "interest-other-text".to_string(),
        }]
    );
}

#[test]
fn unknown_checkbox_is_ignored() {
    let state = PageState::new(page());

    let (next, effects) = update(
        state.clone(),
        Msg::RevealToggled {
            checkbox_id: "missing".to_string(),
            checked: true,
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn anchor_scrolls_smoothly_and_moves_focus() {
    let state = PageState::new(page());

    let (next, effects) = update(
        state.clone(),
        Msg::AnchorActivated {
            target_id: "skraning".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![
            Effect::ScrollTo {
                target_id: "skraning".to_string(),
                smooth: true,
            },
            Effect::MoveFocus {
                element_id: "skraning".to_string(),
            },
        ]
    );
    // Scrolling is not page state; nothing re-renders.
    assert_eq!(state, next);
}

#[test]
fn reduced_motion_disables_smooth_scrolling() {
    let descriptor = PageDescriptor {
        prefers_reduced_motion: true,
        ..page()
    };
    let state = PageState::new(descriptor);

    let (_next, effects) = update(
        state,
        Msg::AnchorActivated {
            target_id: "faq".to_string(),
        },
    );

    assert!(matches!(
        effects[0],
        Effect::ScrollTo { smooth: false, .. }
    ));
}

#[test]
fn unknown_anchor_target_is_ignored() {
    let state = PageState::new(page());

    let (next, effects) = update(
        state.clone(),
        Msg::AnchorActivated {
            target_id: "missing".to_string(),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
