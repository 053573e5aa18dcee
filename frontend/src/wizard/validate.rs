use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::{Field, LeadFields, Step};

pub type FieldErrors = BTreeMap<Field, String>;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks every field of `step` and reports all failures at once.
pub fn validate(step: Step, fields: &LeadFields) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut fail = |field: Field, message: &str| {
        errors.insert(field, message.to_string());
    };

    match step {
        Step::Qualification => {
            if fields.budget.is_empty() {
                fail(Field::Budget, "Please select your annual IT budget");
            }
            if fields.employees.is_empty() {
                fail(Field::Employees, "Please select the number of employees");
            }
            if fields.timeline.is_empty() {
                fail(Field::Timeline, "Please select when you would like to start");
            }
        }
        Step::Contact => {
            if fields.name.trim().is_empty() {
                fail(Field::Name, "Please enter your name");
            }
            if fields.company.trim().is_empty() {
                fail(Field::Company, "Please enter your company");
            }
            if fields.email.trim().is_empty() {
                fail(Field::Email, "Please enter your email address");
            } else if !is_valid_email(&fields.email) {
                fail(Field::Email, "Please enter a valid email address");
            }
            if fields.phone.trim().is_empty() {
                fail(Field::Phone, "Please enter your phone number");
            }
        }
        Step::Challenges => {
            if fields.challenges.is_empty() {
                fail(Field::Challenges, "Please select at least one challenge");
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contact(name: &str, company: &str, email: &str, phone: &str) -> LeadFields {
        LeadFields {
            name: name.to_string(),
            company: company.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            ..LeadFields::default()
        }
    }

    #[test]
    fn empty_qualification_step_reports_all_three_fields() {
        let errors = validate(Step::Qualification, &LeadFields::default());
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![Field::Budget, Field::Employees, Field::Timeline]
        );
        assert!(errors.values().all(|m| m.starts_with("Please select")));
    }

    #[test]
    fn whitespace_only_contact_fields_are_missing() {
        let errors = validate(Step::Contact, &contact("  ", "\t", " ", "   "));
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Email], "Please enter your email address");
    }

    #[test]
    fn malformed_email_gets_its_own_message() {
        let errors = validate(Step::Contact, &contact("Ada", "ACME", "ada@acme", "+49 1"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Email], "Please enter a valid email address");
    }

    #[test]
    fn valid_contact_step_passes() {
        let errors = validate(Step::Contact, &contact("Ada", "ACME", "ada@acme.de", "123"));
        assert!(errors.is_empty());
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email(" a@b.de"));
        assert!(!is_valid_email("@b.de"));
    }

    #[test]
    fn challenges_step_needs_one_selection() {
        let mut fields = LeadFields::default();
        let errors = validate(Step::Challenges, &fields);
        assert!(errors.contains_key(&Field::Challenges));

        fields.toggle_challenge("Unclear digitalization strategy");
        assert!(validate(Step::Challenges, &fields).is_empty());
    }

    #[test]
    fn validation_only_looks_at_the_given_step() {
        // Contact fields are empty, but step 1 does not care.
        let fields = LeadFields {
            budget: "under-10k".to_string(),
            employees: "1-10".to_string(),
            timeline: "asap".to_string(),
            ..LeadFields::default()
        };
        assert!(validate(Step::Qualification, &fields).is_empty());
    }
}
