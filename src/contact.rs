//! Contact form handling.
//!
//! A submission is validated, logged and acknowledged. Nothing is stored or
//! forwarded.

use crate::i18n::Language;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Loose `local@domain.tld` shape check, shared with the translation validator.
pub fn is_email(text: &str) -> bool {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
        .is_match(text)
}

/// Raw form fields as posted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// Service the visitor is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceInterest {
    Hedging,
    Brokerage,
    Portfolio,
    General,
}

impl ServiceInterest {
    pub const ALL: [ServiceInterest; 4] = [
        ServiceInterest::Hedging,
        ServiceInterest::Brokerage,
        ServiceInterest::Portfolio,
        ServiceInterest::General,
    ];

    /// Parse the `service` field. An empty value means no selection.
    pub fn parse(value: &str) -> Result<Option<ServiceInterest>, ContactError> {
        match value.trim() {
            "" => Ok(None),
            "hedging" => Ok(Some(ServiceInterest::Hedging)),
            "brokerage" => Ok(Some(ServiceInterest::Brokerage)),
            "portfolio" => Ok(Some(ServiceInterest::Portfolio)),
            "general" => Ok(Some(ServiceInterest::General)),
            _ => Err(ContactError::InvalidService),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceInterest::Hedging => "hedging",
            ServiceInterest::Brokerage => "brokerage",
            ServiceInterest::Portfolio => "portfolio",
            ServiceInterest::General => "general",
        }
    }

    pub fn label_key(&self) -> String {
        format!("contactPage.form.services.{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,

    #[error("email is required")]
    MissingEmail,

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("message is required")]
    MissingMessage,

    #[error("unknown service")]
    InvalidService,
}

impl ContactError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ContactError::MissingName => "name",
            ContactError::MissingEmail | ContactError::InvalidEmail => "email",
            ContactError::MissingMessage => "message",
            ContactError::InvalidService => "service",
        }
    }

    /// Translation key of the message shown next to the field.
    pub fn message_key(&self) -> &'static str {
        match self {
            ContactError::MissingName => "contactPage.form.errors.name",
            ContactError::MissingEmail => "contactPage.form.errors.email",
            ContactError::InvalidEmail => "contactPage.form.errors.emailInvalid",
            ContactError::MissingMessage => "contactPage.form.errors.message",
            ContactError::InvalidService => "contactPage.form.errors.service",
        }
    }
}

/// A validated inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: Option<ServiceInterest>,
    pub message: String,
    pub language: &'static str,
    pub received_at: DateTime<Utc>,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ContactForm {
    /// Validate the form, collecting every problem rather than stopping at
    /// the first.
    pub fn validate(&self, language: Language) -> Result<ContactSubmission, Vec<ContactError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(ContactError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ContactError::MissingEmail);
        } else if !is_email(email) {
            errors.push(ContactError::InvalidEmail);
        }

        let service = ServiceInterest::parse(&self.service).unwrap_or_else(|error| {
            errors.push(error);
            None
        });

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(ContactError::MissingMessage);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            company: optional(&self.company),
            phone: optional(&self.phone),
            service,
            message: message.to_string(),
            language: language.code(),
            received_at: Utc::now(),
        })
    }
}

/// Outcome of a submission, as shown on the contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactView {
    pub values: ContactForm,
    pub errors: Vec<ContactError>,
    pub acknowledged: bool,
}

impl ContactView {
    pub fn acknowledged() -> Self {
        Self {
            acknowledged: true,
            ..Self::default()
        }
    }

    /// Keep the visitor's input so the form can be corrected.
    pub fn rejected(values: ContactForm, errors: Vec<ContactError>) -> Self {
        Self {
            values,
            errors,
            acknowledged: false,
        }
    }

    pub fn error_for(&self, field: &str) -> Option<ContactError> {
        self.errors.iter().copied().find(|error| error.field() == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Sara Ahmadi".to_string(),
            email: "sara@example.com".to_string(),
            company: "".to_string(),
            phone: " +98 21 1234 5678 ".to_string(),
            service: "hedging".to_string(),
            message: "We import steel and need a hedge.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_submission() {
        let submission = valid_form().validate(Language::PERSIAN).unwrap();

        assert_eq!(submission.name, "Sara Ahmadi");
        assert_eq!(submission.company, None);
        assert_eq!(submission.phone.as_deref(), Some("+98 21 1234 5678"));
        assert_eq!(submission.service, Some(ServiceInterest::Hedging));
        assert_eq!(submission.language, "fa");
    }

    #[test]
    fn test_empty_form_reports_all_required_fields() {
        let errors = ContactForm::default().validate(Language::ENGLISH).unwrap_err();

        assert_eq!(
            errors,
            vec![
                ContactError::MissingName,
                ContactError::MissingEmail,
                ContactError::MissingMessage
            ]
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..valid_form()
        };

        assert_eq!(form.validate(Language::ENGLISH).unwrap_err(), vec![ContactError::MissingName]);
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("info@sib-m.ir"));
        assert!(is_email("a.b+c@example.co"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.d"));
        assert!(!is_email("https://t.me/hedgingsolution"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_invalid_email() {
        for email in ["not-an-email", "a@b", "a b@c.d", "@x.io"] {
            let form = ContactForm {
                email: email.to_string(),
                ..valid_form()
            };
            assert_eq!(
                form.validate(Language::ENGLISH).unwrap_err(),
                vec![ContactError::InvalidEmail],
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_service_parsing() {
        assert_eq!(ServiceInterest::parse(""), Ok(None));
        assert_eq!(ServiceInterest::parse("general"), Ok(Some(ServiceInterest::General)));
        assert_eq!(ServiceInterest::parse("crypto"), Err(ContactError::InvalidService));

        for service in ServiceInterest::ALL {
            assert_eq!(ServiceInterest::parse(service.as_str()), Ok(Some(service)));
        }
    }

    #[test]
    fn test_unknown_service_is_rejected() {
        let form = ContactForm {
            service: "crypto".to_string(),
            ..valid_form()
        };

        assert_eq!(form.validate(Language::ENGLISH).unwrap_err(), vec![ContactError::InvalidService]);
    }

    #[test]
    fn test_error_keys_point_at_translations() {
        let table = crate::i18n::TranslationTable::embedded().unwrap();
        let root = table.root(Language::PERSIAN).unwrap();

        for error in [
            ContactError::MissingName,
            ContactError::MissingEmail,
            ContactError::InvalidEmail,
            ContactError::MissingMessage,
            ContactError::InvalidService,
        ] {
            assert!(root.lookup(error.message_key()).is_ok(), "{:?}", error);
        }
        for service in ServiceInterest::ALL {
            assert!(root.lookup(&service.label_key()).is_ok());
        }
    }

    #[test]
    fn test_view_error_lookup() {
        let view = ContactView::rejected(
            ContactForm::default(),
            vec![ContactError::InvalidEmail, ContactError::MissingMessage],
        );

        assert_eq!(view.error_for("email"), Some(ContactError::InvalidEmail));
        assert_eq!(view.error_for("name"), None);
        assert!(!view.acknowledged);
        assert!(ContactView::acknowledged().acknowledged);
    }

    #[test]
    fn test_form_deserializes_with_missing_fields() {
        let form: ContactForm = serde_json::from_str(r#"{ "name": "Ali" }"#).unwrap();
        assert_eq!(form.name, "Ali");
        assert!(form.email.is_empty());
    }
}
