//! End-to-end tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{
        classify_payload, names_context, ExtractionRequest, ExtractionStatus, ExtractorConfig,
        InvocationPayload, PromptBuilder, PromptSpec, PromptTemplate, ResponseExtractor,
    };
    use llmops_domain::{EmailType, TaskType};
    use std::sync::Arc;
    use std::thread;

    fn names_spec() -> PromptSpec {
        PromptSpec {
            prompt_type: TaskType::EmailNames,
            system_prompt: "You are a highly skilled assistant specializing in data extraction.".to_string(),
            instruction: "Please extract the email name components from the following input.".to_string(),
        }
    }

    #[test]
    fn test_names_request_to_record() {
        let config = ExtractorConfig::default();
        let spec = names_spec();

        let prompt = PromptBuilder::new(&spec, PromptTemplate::Instruct)
            .with_context(names_context("emma.smith@gmail.com", "Dr. Emma Grace Smith III"))
            .build();
        let payload = InvocationPayload::new(prompt, &config.generation);
        let body = payload.to_json().unwrap();
        assert!(body.contains("Emma Grace Smith III"));

        // What the endpoint sends back for that prompt
        let response = serde_json::json!([{
            "generated_text": "First Name: Emma\nMiddle Name: Grace\nLast Name: Smith\nName Prefix: Dr.\nName Suffix: III\n"
        }])
        .to_string();

        let extractor = ResponseExtractor::from_config(&config).unwrap();
        let extraction = extractor.extract_from_payload(spec.prompt_type, &response);

        assert_eq!(extraction.status, ExtractionStatus::Complete);
        let json = serde_json::to_value(&extraction.record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "first_name": "Emma",
                "middle_name": "Grace",
                "last_name": "Smith",
                "name_prefix": "Dr.",
                "name_suffix": "III"
            })
        );
    }

    #[test]
    fn test_type_request_with_chatty_completion() {
        let request = ExtractionRequest::new(
            TaskType::EmailType,
            "Based on the fields provided, this looks like a shared inbox.\n\nOutput:\n{\"email_address_type\": \"non-person\"}",
        );
        let extraction = ResponseExtractor::standard().extract_request(&request);
        assert_eq!(extraction.record.get("p_email_type"), Some("Non-Person"));
        assert!(extraction.is_complete());
    }

    #[test]
    fn test_json_formatted_names_are_not_recognized() {
        // The prompt asks for JSON keys, but the table reads "Label: value" lines.
        let text = r#"{"First Name": "David", "Last Name": "Brown"}"#;
        let extraction = ResponseExtractor::standard()
            .extract_with_report(TaskType::EmailNames, text);
        assert_eq!(extraction.status, ExtractionStatus::Failed);
        assert!(extraction.record.is_empty());
    }

    #[test]
    fn test_classifier_flow_uses_configured_threshold() {
        let body = r#"[{"sentence": "info@acme.com, info, Acme Info", "probabilities": [0.2, 0.8]}]"#;

        let default = ExtractorConfig::default();
        let outcome = classify_payload(body, default.person_threshold).unwrap();
        assert_eq!(outcome.pred_email_type, EmailType::Person);

        let config = ExtractorConfig::from_toml("person_threshold = 0.5").unwrap();
        let outcome = classify_payload(body, config.person_threshold).unwrap();
        assert_eq!(outcome.pred_email_type, EmailType::NonPerson);
    }

    #[test]
    fn test_concurrent_extraction_matches_sequential() {
        let extractor = Arc::new(ResponseExtractor::new().unwrap());
        let inputs = [
            (TaskType::EmailType, r#"{"email_address_type": "person"}"#),
            (TaskType::EmailType, "garbage"),
            (TaskType::EmailNames, "First Name: Ada\nLast Name: Lovelace"),
            (TaskType::EmailNames, ""),
        ];

        let expected: Vec<_> = inputs
            .iter()
            .map(|(task, text)| extractor.extract(*task, text))
            .collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let extractor = Arc::clone(&extractor);
                thread::spawn(move || {
                    inputs
                        .iter()
                        .map(|(task, text)| extractor.extract(*task, text))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}

#[cfg(test)]
mod proptests {
    use crate::{ExtractionStatus, ResponseExtractor};
    use llmops_domain::TaskType;
    use proptest::prelude::*;

    fn any_task() -> impl Strategy<Value = TaskType> {
        prop_oneof![Just(TaskType::EmailType), Just(TaskType::EmailNames)]
    }

    /// Text that sometimes contains the labels the tables look for
    fn completion() -> impl Strategy<Value = String> {
        let fragment = prop_oneof![
            Just("First Name: ".to_string()),
            Just("Last Name: ".to_string()),
            Just("Name Suffix: ".to_string()),
            Just("\"email_address_type\": \"".to_string()),
            Just("person\"".to_string()),
            Just("non-person\"".to_string()),
            Just("\n".to_string()),
            "\\PC{0,12}",
        ];
        proptest::collection::vec(fragment, 0..12).prop_map(|parts| parts.concat())
    }

    proptest! {
        /// Property: every declared field is present whatever the input
        #[test]
        fn test_record_always_complete(task in any_task(), text in completion()) {
            let extraction = ResponseExtractor::standard().extract_with_report(task, &text);

            prop_assert_eq!(extraction.record.len(), task.fields().len());
            for field in task.fields() {
                prop_assert!(extraction.record.get(field).is_some());
            }
        }

        /// Property: misses and status agree
        #[test]
        fn test_status_matches_misses(task in any_task(), text in completion()) {
            let extraction = ResponseExtractor::standard().extract_with_report(task, &text);
            let total = task.fields().len();

            let expected = match extraction.misses.len() {
                0 => ExtractionStatus::Complete,
                n if n == total => ExtractionStatus::Failed,
                _ => ExtractionStatus::Partial,
            };
            prop_assert_eq!(extraction.status, expected);
            for miss in &extraction.misses {
                prop_assert_eq!(extraction.record.get(&miss.field), Some(""));
            }
        }

        /// Property: email type values stay within the allowed labels
        #[test]
        fn test_email_type_values_closed(text in completion()) {
            let record = ResponseExtractor::standard().extract(TaskType::EmailType, &text);
            let value = record.get("p_email_type").unwrap_or("missing");
            prop_assert!(["Person", "Non-Person", ""].contains(&value));
        }

        /// Property: extraction is idempotent
        #[test]
        fn test_extraction_idempotent(task in any_task(), text in "\\PC{0,200}") {
            let extractor = ResponseExtractor::standard();
            prop_assert_eq!(
                extractor.extract_with_report(task, &text),
                extractor.extract_with_report(task, &text)
            );
        }
    }
}
