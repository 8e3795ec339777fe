//! Evaluation over records produced by the extractor

use llmops_domain::{ExtractedRecord, TaskType};
use llmops_eval::{BinaryConfusionMatrix, NameFieldReport};
use llmops_extractor::ResponseExtractor;

#[test]
fn test_email_type_run() {
    let extractor = ResponseExtractor::standard();
    let completions = [
        r#"{"email_address_type": "person"}"#,
        r#"{"email_address_type": "non-person"}"#,
        r#"{"email_address_type": "Non-Person"}"#,
        "I cannot classify this address.",
    ];
    let truth = ["Person", "Non-Person", "Non-Person", "Person"];

    let predicted: Vec<String> = completions
        .iter()
        .map(|c| {
            extractor
                .extract(TaskType::EmailType, c)
                .get("p_email_type")
                .unwrap_or_default()
                .to_string()
        })
        .collect();
    assert_eq!(predicted, vec!["Person", "Non-Person", "", ""]);

    // Empty predictions score as Non-Person
    let matrix = BinaryConfusionMatrix::from_labels(&truth, &predicted).unwrap();
    assert_eq!(matrix.true_negative, 1);
    assert_eq!(matrix.true_positive, 2);
    assert_eq!(matrix.false_positive, 1);
    assert_eq!(matrix.false_negative, 0);
    assert_eq!(matrix.report().recall, 1.0);
}

#[test]
fn test_email_names_run() {
    let extractor = ResponseExtractor::standard();
    let completions = [
        "First Name: David\nMiddle Name: Robert\nLast Name: Brown\nName Prefix: \nName Suffix: Jr.",
        "First Name: Emma\nLast Name: Smith",
        "",
    ];
    let truth = vec![
        ExtractedRecord::from_pairs(
            TaskType::EmailNames,
            [
                ("first_name", "David"),
                ("middle_name", "Robert"),
                ("last_name", "Brown"),
                ("name_suffix", "Jr."),
            ],
        ),
        ExtractedRecord::from_pairs(
            TaskType::EmailNames,
            [
                ("first_name", "Emma"),
                ("middle_name", "Grace"),
                ("last_name", "Smith"),
                ("name_prefix", "Dr."),
                ("name_suffix", "III"),
            ],
        ),
        ExtractedRecord::from_pairs(TaskType::EmailNames, [("first_name", "Ada")]),
    ];

    let predicted: Vec<_> = completions
        .iter()
        .map(|c| extractor.extract(TaskType::EmailNames, c))
        .collect();

    let report = NameFieldReport::evaluate(&truth, &predicted).unwrap();
    assert_eq!(report.rows, 3);

    let first = report.field("first_name").unwrap();
    assert!((first.exact_match - 2.0 / 3.0).abs() < 1e-12);

    // Row 3 has no prefix and nothing was extracted: a match
    let prefix = report.field("name_prefix").unwrap();
    assert!((prefix.exact_match - 2.0 / 3.0).abs() < 1e-12);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["fields"][0]["field"], "first_name");
}
