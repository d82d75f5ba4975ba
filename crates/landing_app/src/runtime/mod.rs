pub mod effects;
pub mod logging;
pub mod render;
pub mod shell;

use std::time::{Duration, Instant};

use landing_core::{
    FormDescriptor, FormId, MenuDescriptor, ModalTrigger, Msg, PageDescriptor, RevealDescriptor,
    SelectorDescriptor, SelectorGroup, SelectorOption,
};
use landing_engine::DispatchSettings;
use page_logging::page_info;

use shell::PageShell;

const PERFORMANCE_FORM: FormId = 1;
const PREMIUM_FORM: FormId = 2;
const SIMPLE_FORM: FormId = 3;
const INQUIRY_FORM: FormId = 4;

/// The sign-up page wiring, built in code at startup exactly as the page
/// hardcodes its element identifiers.
fn demo_page() -> PageDescriptor {
    let form = |form_id, element_id: &str, name: &str, hook: &str| FormDescriptor {
        form_id,
        element_id: element_id.to_string(),
        name: name.to_string(),
        endpoint: format!("https://hooks.zapier.com/hooks/catch/19237461/{hook}/"),
        submit_label: "Senda skráningu".to_string(),
        busy_label: "Sendi...".to_string(),
        success_notice: "Takk fyrir skráninguna! Við höfum samband fljótlega.".to_string(),
        failure_alert: "Villa kom upp við sendingu. Vinsamlegast reyndu aftur.".to_string(),
    };

    PageDescriptor {
        source: "karbon.is".to_string(),
        page_path: "/".to_string(),
        forms: vec![
            form(
                PERFORMANCE_FORM,
                "form-karbon-performance",
                "Karbon Performance - Skráning",
                "performance",
            ),
            form(
                PREMIUM_FORM,
                "form-karbon-premium",
                "Karbon Premium - Skráning",
                "premium",
            ),
            form(SIMPLE_FORM, "form-simple", "Skráning", "skraning"),
            form(INQUIRY_FORM, "form-inquiry", "Fyrirspurn", "fyrirspurn"),
        ],
        selector: SelectorDescriptor {
            program_options: vec![
                SelectorOption {
                    key: "karbon-performance".to_string(),
                    target: PERFORMANCE_FORM,
                    title_override: None,
                },
                SelectorOption {
                    key: "karbon-premium".to_string(),
                    target: PREMIUM_FORM,
                    title_override: None,
                },
                SelectorOption {
                    key: "fjarþjálfun".to_string(),
                    target: SIMPLE_FORM,
                    title_override: Some("Fjarþjálfun - Skráning".to_string()),
                },
                SelectorOption {
                    key: "næringarráðgjöf".to_string(),
                    target: SIMPLE_FORM,
                    title_override: Some("Næringarráðgjöf - Skráning".to_string()),
                },
                SelectorOption {
                    key: "fyrirtækjanámskeið".to_string(),
                    target: INQUIRY_FORM,
                    title_override: None,
                },
            ],
            inquiry_options: vec![SelectorOption {
                key: "fyrirtækjanámskeið".to_string(),
                target: INQUIRY_FORM,
                title_override: None,
            }],
            ..SelectorDescriptor::default()
        },
        accordion_panels: 6,
        menu: MenuDescriptor {
            trigger_id: "hamburger-btn".to_string(),
            link_ids: vec![
                "mobile-nav-home".to_string(),
                "mobile-nav-programs".to_string(),
                "mobile-nav-faq".to_string(),
                "mobile-nav-skraning".to_string(),
            ],
        },
        reveals: vec![RevealDescriptor {
            checkbox_id: "interest-other-ht".to_string(),
            wrap_id: "interest-other-wrap-ht".to_string(),
            companion_field_id: "interest-other-text-ht".to_string(),
        }],
        anchor_targets: vec![
            "skraning".to_string(),
            "faq".to_string(),
            "um-okkur".to_string(),
        ],
        prefers_reduced_motion: false,
    }
}

/// Drives a scripted interaction session against the demo page.
pub fn run_demo() {
    let settings = DispatchSettings {
        request_timeout: Duration::from_secs(8),
        ..DispatchSettings::default()
    };
    let mut shell = PageShell::new(demo_page(), settings);

    shell.dispatch(Msg::AnchorActivated {
        target_id: "skraning".to_string(),
    });
    shell.dispatch(Msg::MenuToggled);
    shell.dispatch(Msg::EscapePressed);
    shell.dispatch(Msg::AccordionToggled { panel: 0 });
    shell.dispatch(Msg::AccordionToggled { panel: 1 });
    shell.dispatch(Msg::ModalOpened {
        trigger: ModalTrigger {
            image_src: "images/arangur-1.jpg".to_string(),
            image_alt: "Árangur þátttakanda".to_string(),
        },
    });
    shell.dispatch(Msg::ModalBackdropClicked);

    shell.dispatch(Msg::OptionChosen {
        group: SelectorGroup::Program,
        key: "fjarþjálfun".to_string(),
    });
    // Let both cross-fade steps land.
    while shell.pump(Duration::from_millis(600)) {}

    shell.dispatch(Msg::RevealToggled {
        checkbox_id: "interest-other-ht".to_string(),
        checked: true,
    });
    shell.dispatch(Msg::FormSubmitted {
        form_id: SIMPLE_FORM,
        fields: vec![
            ("name".to_string(), "Jón Jónsson".to_string()),
            ("email".to_string(), "jon@example.com".to_string()),
            ("interest".to_string(), "Mataræði".to_string()),
            ("interest".to_string(), "Þjálfun".to_string()),
        ],
    });

    // Wait for the dispatch to settle, one way or the other.
    let deadline = Instant::now() + Duration::from_secs(10);
    while in_flight(&shell) && Instant::now() < deadline {
        shell.pump(Duration::from_millis(200));
    }

    page_info!("demo session complete");
}

fn in_flight(shell: &PageShell) -> bool {
    shell
        .view()
        .forms
        .iter()
        .any(|row| row.form_id == SIMPLE_FORM && row.inputs_present && !row.submit_enabled)
}
