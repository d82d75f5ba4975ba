use landing_core::{update, MenuDescriptor, ModalTrigger, Msg, PageDescriptor, PageState};

fn page() -> PageDescriptor {
    PageDescriptor {
        menu: MenuDescriptor {
            trigger_id: "hamburger-btn".to_string(),
            link_ids: vec!["mobile-nav-home".to_string()],
        },
        ..PageDescriptor::default()
    }
}

fn trigger() -> ModalTrigger {
    ModalTrigger {
        image_src: "images/result-before-after.jpg".to_string(),
        image_alt: "Fyrir og eftir".to_string(),
    }
}

#[test]
fn open_copies_image_and_locks_scroll() {
    let state = PageState::new(page());

    let (mut next, effects) = update(state, Msg::ModalOpened { trigger: trigger() });
    let view = next.view();

    assert!(view.modal.shown);
    assert_eq!(view.modal.image_src, "images/result-before-after.jpg");
    assert_eq!(view.modal.image_alt, "Fyrir og eftir");
    assert!(view.body_scroll_locked);
    assert!(effects.is_empty());
    assert!(next.consume_dirty());
}

#[test]
fn close_clears_image_and_unlocks_scroll() {
    let state = PageState::new(page());
    let (state, _) = update(state, Msg::ModalOpened { trigger: trigger() });

    let (next, _effects) = update(state, Msg::ModalCloseClicked);
    let view = next.view();

    assert!(!view.modal.shown);
    assert_eq!(view.modal.image_src, "");
    assert_eq!(view.modal.image_alt, "");
    assert!(!view.body_scroll_locked);
}

#[test]
fn backdrop_click_dismisses() {
    let state = PageState::new(page());
    let (state, _) = update(state, Msg::ModalOpened { trigger: trigger() });

    let (next, _effects) = update(state, Msg::ModalBackdropClicked);

    assert!(!next.view().modal.shown);
}

#[test]
fn escape_dismisses() {
    let state = PageState::new(page());
    let (state, _) = update(state, Msg::ModalOpened { trigger: trigger() });

    let (next, effects) = update(state, Msg::EscapePressed);

    assert!(!next.view().modal.shown);
    assert!(effects.is_empty());
}

#[test]
fn dismissing_hidden_modal_is_noop() {
    let state = PageState::new(page());

    let (mut next, effects) = update(state.clone(), Msg::ModalCloseClicked);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn escape_closes_modal_and_menu_together() {
    let state = PageState::new(page());
    let (state, _) = update(state, Msg::MenuToggled);
    let (state, _) = update(state, Msg::ModalOpened { trigger: trigger() });

    let (next, effects) = update(state, Msg::EscapePressed);
    let view = next.view();

    assert!(!view.modal.shown);
    assert!(!view.menu.open);
    assert!(!view.body_scroll_locked);
    // Only the menu close moves focus.
    assert_eq!(effects.len(), 1);
}
