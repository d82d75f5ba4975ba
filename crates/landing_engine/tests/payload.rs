use landing_engine::{FieldMap, FormMeta, SubmissionPayload};
use pretty_assertions::assert_eq;

fn signup_payload() -> SubmissionPayload {
    SubmissionPayload {
        source: "karbon-site".to_string(),
        page: "/skraning".to_string(),
        submitted_at: "2025-06-01T12:00:00+00:00".to_string(),
        form_meta: FormMeta {
            id: "form-simple".to_string(),
            name: "Skráning".to_string(),
        },
        data: FieldMap::from_pairs([
            ("name".to_string(), "Jon".to_string()),
            ("email".to_string(), "jon@example.com".to_string()),
            ("interest".to_string(), "Diet".to_string()),
            ("interest".to_string(), "Training".to_string()),
        ]),
    }
}

#[test]
fn payload_serializes_with_document_order_and_coalesced_repeats() {
    let json = serde_json::to_string(&signup_payload()).expect("serialize payload");

    assert_eq!(
        json,
        concat!(
            "{\"source\":\"karbon-site\",",
            "\"page\":\"/skraning\",",
            "\"submittedAt\":\"2025-06-01T12:00:00+00:00\",",
            "\"formMeta\":{\"id\":\"form-simple\",\"name\":\"Skráning\"},",
            "\"data\":{\"name\":\"Jon\",\"email\":\"jon@example.com\",",
            "\"interest\":[\"Diet\",\"Training\"]}}",
        )
    );
}

#[test]
fn field_count_matches_logical_names() {
    let payload = signup_payload();

    // Four raw pairs, three logical keys.
    assert_eq!(payload.data.len(), 3);
}

#[test]
fn empty_snapshot_serializes_to_empty_map() {
    let data = FieldMap::from_pairs(Vec::<(String, String)>::new());

    assert!(data.is_empty());
    assert_eq!(serde_json::to_string(&data).unwrap(), "{}");
}
