use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::error;
use utoipa::ToSchema;

use crate::shared::domain::ServiceType;

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .inspect_err(|e| error!(error = %e, "Email pattern failed to compile"))
    });

fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(email))
}

/// Contact form body as posted by the browser. Empty strings mean "not given".
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct InquiryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    /// One of `web_dev`, `saas`, `android`, `custom`
    #[serde(default)]
    pub service_interest: Option<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitInquiryCommandError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please select a valid service")]
    UnknownService(String),
}

/// A validated inquiry, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitInquiryCommand {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service_interest: Option<ServiceType>,
    pub budget_range: Option<String>,
    pub message: String,
}

impl TryFrom<InquiryForm> for SubmitInquiryCommand {
    type Error = SubmitInquiryCommandError;

    fn try_from(form: InquiryForm) -> Result<Self, Self::Error> {
        let name = form.name.trim();
        let email = form.email.trim();
        let message = form.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(SubmitInquiryCommandError::MissingRequiredFields);
        }

        if !is_valid_email(email) {
            return Err(SubmitInquiryCommandError::InvalidEmail);
        }

        let service_interest = match optional(form.service_interest) {
            Some(raw) => Some(
                raw.parse::<ServiceType>()
                    .map_err(|_| SubmitInquiryCommandError::UnknownService(raw))?,
            ),
            None => None,
        };

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: optional(form.phone),
            company: optional(form.company),
            service_interest,
            budget_range: optional(form.budget_range),
            message: message.to_string(),
        })
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> InquiryForm {
        InquiryForm {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: Some("".to_string()),
            company: Some("  Rao Foods ".to_string()),
            service_interest: Some("saas".to_string()),
            budget_range: None,
            message: "We need a booking app.".to_string(),
        }
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_PATTERN.is_ok());
        assert!(is_valid_email("asha@example.com"));
    }

    #[test]
    fn accepts_a_complete_form_and_normalizes_optionals() {
        let command = SubmitInquiryCommand::try_from(valid_form()).unwrap();

        assert_eq!(command.name, "Asha Rao");
        assert_eq!(command.phone, None);
        assert_eq!(command.company.as_deref(), Some("Rao Foods"));
        assert_eq!(command.service_interest, Some(ServiceType::Saas));
        assert_eq!(command.budget_range, None);
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        for form in [
            InquiryForm {
                name: "  ".to_string(),
                ..valid_form()
            },
            InquiryForm {
                email: String::new(),
                ..valid_form()
            },
            InquiryForm {
                message: "\n".to_string(),
                ..valid_form()
            },
        ] {
            assert_eq!(
                SubmitInquiryCommand::try_from(form),
                Err(SubmitInquiryCommandError::MissingRequiredFields)
            );
        }
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["asha.example.com", "asha@example", "as ha@example.com", "@example.com"] {
            let form = InquiryForm {
                email: email.to_string(),
                ..valid_form()
            };
            assert_eq!(
                SubmitInquiryCommand::try_from(form),
                Err(SubmitInquiryCommandError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn missing_fields_win_over_bad_email() {
        let form = InquiryForm {
            email: "nope".to_string(),
            message: String::new(),
            ..valid_form()
        };
        assert_eq!(
            SubmitInquiryCommand::try_from(form),
            Err(SubmitInquiryCommandError::MissingRequiredFields)
        );
    }

    #[test]
    fn unknown_service_is_rejected_and_blank_service_is_none() {
        let form = InquiryForm {
            service_interest: Some("ios".to_string()),
            ..valid_form()
        };
        assert_eq!(
            SubmitInquiryCommand::try_from(form),
            Err(SubmitInquiryCommandError::UnknownService("ios".to_string()))
        );

        let form = InquiryForm {
            service_interest: Some(String::new()),
            ..valid_form()
        };
        let command = SubmitInquiryCommand::try_from(form).unwrap();
        assert_eq!(command.service_interest, None);
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            SubmitInquiryCommandError::MissingRequiredFields.to_string(),
            "Please fill in all required fields"
        );
        assert_eq!(
            SubmitInquiryCommandError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }
}
