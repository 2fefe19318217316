//! Wire-format checks against records as other consumers write them.

use prompt_bot::prompts::{
    EmailPrompt, MultiChoicePrompt, NumberPrompt, PasswordPrompt, Prompt, PromptError, PromptKind,
    Record,
};

fn parse(json: &str) -> Record {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_number_record_from_json() {
    let record = parse(
        r#"{
            "type": 2,
            "question": "What's your favorite number?",
            "bounds": {"upper": 10, "lower": null, "upper_inclusive": false, "lower_inclusive": false}
        }"#,
    );

    let prompt = Prompt::from_record(&record).unwrap();
    assert_eq!(prompt.kind(), PromptKind::Number);
    assert!(!prompt.validate("10").unwrap());
    assert!(prompt.validate("9").unwrap());
    assert_eq!(prompt.to_record(), record);
}

#[test]
fn test_inclusive_upper_bound() {
    let mut number = NumberPrompt::new("n");
    number.set_upper_bound(Some(10));
    number.set_upper_inclusive(true);
    assert!(Prompt::from(number).validate("10").unwrap());
}

#[test]
fn test_zero_lower_bound_is_enforced() {
    let mut number = NumberPrompt::new("n");
    number.set_lower_bound(Some(0));
    number.set_lower_inclusive(true);
    let prompt = Prompt::from_record(&Prompt::from(number).to_record()).unwrap();

    assert!(prompt.validate("0").unwrap());
    assert!(!prompt.validate("-1").unwrap());
}

#[test]
fn test_email_allow_list_wins() {
    let record = parse(
        r#"{"type": 4, "question": "Email?", "domains": {"allowed": ["a.com"], "blocked": ["a.com"]}}"#,
    );
    let prompt = Prompt::from_record(&record).unwrap();
    assert!(prompt.validate("x@a.com").unwrap());

    let open = Prompt::from(EmailPrompt::new("Email?"));
    assert!(open.validate("x@anything.com").unwrap());
}

#[test]
fn test_password_case_sensitive() {
    let record = parse(r#"{"type": 5, "question": "Password?", "passwords": ["secret"]}"#);
    let prompt = Prompt::from_record(&record).unwrap();
    assert!(prompt.validate("secret").unwrap());
    assert!(!prompt.validate("Secret").unwrap());
}

#[test]
fn test_multi_choice_order_preserved() {
    let record = parse(r#"{"type": 3, "question": "Pick", "options": ["b", "a", "b"]}"#);
    let Prompt::MultiChoice(choice) = Prompt::from_record(&record).unwrap() else {
        panic!("expected a multiple choice prompt");
    };
    assert_eq!(choice, MultiChoicePrompt::with_options("Pick", ["b", "a", "b"]));
}

#[test]
fn test_unknown_kind_is_base() {
    let prompt = Prompt::from_record(&parse(r#"{"type": 99, "question": "Q"}"#)).unwrap();
    assert_eq!(prompt.kind(), PromptKind::Base);
    assert_eq!(prompt.question(), "Q");
}

#[test]
fn test_missing_question_fails() {
    let result = Prompt::from_record(&parse(r#"{"type": 1}"#));
    assert!(matches!(result, Err(PromptError::MissingField("question"))));
}

#[test]
fn test_kind_key_fallback_and_missing_question() {
    let prompt = Prompt::from_record(&parse(r#"{"kind": 99, "question": "Q"}"#)).unwrap();
    assert_eq!(prompt.kind(), PromptKind::Base);
    assert_eq!(prompt.question(), "Q");

    let result = Prompt::from_record(&parse(r#"{"kind": 1}"#));
    assert!(matches!(result, Err(PromptError::MissingField("question"))));
}

#[test]
fn test_whole_float_bound_from_json() {
    let record = parse(
        r#"{
            "type": 2,
            "question": "n",
            "bounds": {"upper": 10.0, "lower": null, "upper_inclusive": false, "lower_inclusive": false}
        }"#,
    );

    let prompt = Prompt::from_record(&record).unwrap();
    assert!(!prompt.validate("10").unwrap());
    assert!(prompt.validate("9").unwrap());
    assert_eq!(prompt.to_record()["bounds"]["upper"], 10);
}

#[test]
fn test_conversion_does_not_mutate() {
    let mut password = PasswordPrompt::new("Password?");
    password.add_password("a");
    let prompt = Prompt::from(password);
    let before = prompt.clone();

    let first = prompt.to_record();
    let second = prompt.to_record();
    assert_eq!(first, second);
    assert_eq!(prompt, before);
}
