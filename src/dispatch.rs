//! Validation and orchestration of one contact submission.
//!
//! The flow per request: validate -> render both emails -> deliver the
//! confirmation synchronously -> schedule the operator notification in the
//! background -> reply. A failed confirmation fails the whole request and
//! the operator notice is never scheduled; a failed operator notice is only
//! logged, the submitter already got their answer.

use crate::background;
use crate::config::Config;
use crate::i18n::Language;
use crate::mailer::{MailError, Mailer};
use crate::render::{self, Role};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Raw inbound payload, straight off the wire.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "en".to_string()
}

/// A validated submission. Immutable once constructed; lives for one
/// request/background-task pair.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub lang: Language,
}

#[derive(Debug, Serialize)]
pub struct Reply {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("name must not be empty")]
    EmptyName,
    #[error("could not send the confirmation email")]
    Delivery(#[from] MailError),
}

impl ContactError {
    fn status(&self) -> StatusCode {
        match self {
            ContactError::InvalidEmail | ContactError::EmptyName => StatusCode::BAD_REQUEST,
            ContactError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl ContactRequest {
    /// Validate the payload into a `Submission`, normalizing the language
    /// and applying the localized default subject.
    pub fn validate(self) -> Result<Submission, ContactError> {
        if !self.email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        if self.name.trim().is_empty() {
            return Err(ContactError::EmptyName);
        }

        let lang = Language::from_code(self.lang.trim());
        let subject = match self.subject {
            Some(s) if !s.trim().is_empty() => s,
            _ => lang.strings().default_subject.to_string(),
        };

        Ok(Submission {
            name: self.name,
            email: self.email,
            subject,
            message: self.message,
            lang,
        })
    }
}

/// Orchestrates the two-path delivery for each submission.
#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
}

impl Dispatcher {
    pub fn new(config: Arc<Config>, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }

    pub async fn handle(&self, request: ContactRequest) -> Result<Reply, ContactError> {
        let submission = request.validate()?;

        let confirmation = render::render(&submission, Role::Confirmation);
        let notification = render::render(&submission, Role::Notification);

        // The confirmation is part of the request's outcome: if it cannot
        // be delivered the request fails closed and the operator notice is
        // never scheduled.
        if let Err(e) = self.mailer.send(&submission.email, &confirmation).await {
            error!(
                "Failed to send confirmation to {}: {}",
                submission.email, e
            );
            return Err(ContactError::Delivery(e));
        }
        info!("Confirmation sent to {}", submission.email);

        let mailer = Arc::clone(&self.mailer);
        let operator = self.config.operator_email.clone();
        background::schedule(async move {
            mailer.send(&operator, &notification).await?;
            info!("Operator notification sent to {}", operator);
            Ok(())
        });

        Ok(Reply {
            message: submission.lang.strings().response_message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderedMessage;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    struct MockMailer {
        fail: bool,
        sends: Mutex<Vec<(String, RenderedMessage)>>,
    }

    impl MockMailer {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                sends: Mutex::new(Vec::new()),
            })
        }

        fn sends(&self) -> Vec<(String, RenderedMessage)> {
            self.sends.lock().unwrap().clone()
        }

        async fn wait_for_sends(&self, count: usize) {
            for _ in 0..100 {
                if self.sends.lock().unwrap().len() >= count {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            panic!("timed out waiting for {} sends", count);
        }
    }

    #[async_trait]
    impl Mailer for MockMailer {
        async fn send(
            &self,
            to: &str,
            message: &RenderedMessage,
        ) -> Result<(), MailError> {
            self.sends
                .lock()
                .unwrap()
                .push((to.to_string(), message.clone()));
            if self.fail {
                Err(MailError::Address(
                    "not an address".parse::<lettre::Address>().unwrap_err(),
                ))
            } else {
                Ok(())
            }
        }
    }

    fn test_config() -> Arc<Config> {
        Arc::new(Config {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_username: "relay@example.com".to_string(),
            smtp_password: "app-password".to_string(),
            operator_email: "owner@example.com".to_string(),
            port: 8080,
            send_timeout_secs: 10,
        })
    }

    fn request(email: &str, lang: &str) -> ContactRequest {
        ContactRequest {
            name: "Ana".to_string(),
            email: email.to_string(),
            message: "Hola\nMundo".to_string(),
            subject: Some("Precio".to_string()),
            lang: lang.to_string(),
        }
    }

    // ==================== Validation ====================

    #[test]
    fn test_validate_rejects_email_without_at() {
        let result = request("ana-at-x.com", "es").validate();
        assert!(matches!(result, Err(ContactError::InvalidEmail)));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut req = request("ana@x.com", "en");
        req.name = "   ".to_string();
        assert!(matches!(req.validate(), Err(ContactError::EmptyName)));
    }

    #[test]
    fn test_validate_normalizes_language() {
        let submission = request("ana@x.com", "ES").validate().unwrap();
        assert_eq!(submission.lang, Language::Spanish);

        let submission = request("ana@x.com", "pt").validate().unwrap();
        assert_eq!(submission.lang, Language::English);
    }

    #[test]
    fn test_validate_applies_localized_default_subject() {
        let mut req = request("ana@x.com", "es");
        req.subject = None;
        let submission = req.validate().unwrap();
        assert_eq!(submission.subject, "Consulta general");

        let mut req = request("ana@x.com", "en");
        req.subject = Some("  ".to_string());
        let submission = req.validate().unwrap();
        assert_eq!(submission.subject, "General inquiry");
    }

    // ==================== Dispatch ====================

    #[tokio::test]
    async fn test_handle_sends_confirmation_then_schedules_notification() {
        let mailer = MockMailer::new(false);
        let dispatcher = Dispatcher::new(test_config(), mailer.clone());

        let reply = dispatcher
            .handle(request("ana@x.com", "es"))
            .await
            .expect("request should succeed");
        assert_eq!(
            reply.message,
            "Confirmación enviada. Tu solicitud ha sido recibida."
        );

        mailer.wait_for_sends(2).await;
        let sends = mailer.sends();
        assert_eq!(sends.len(), 2);

        // Confirmation first, to the submitter
        assert_eq!(sends[0].0, "ana@x.com");
        assert!(sends[0].1.subject.contains("Precio"));

        // Operator notice second, carrying the submitter's details
        assert_eq!(sends[1].0, "owner@example.com");
        assert!(sends[1].1.body.contains("Ana"));
        assert!(sends[1].1.body.contains("ana@x.com"));
    }

    #[tokio::test]
    async fn test_handle_validation_failure_issues_no_sends() {
        let mailer = MockMailer::new(false);
        let dispatcher = Dispatcher::new(test_config(), mailer.clone());

        let result = dispatcher.handle(request("ana-at-x.com", "es")).await;
        assert!(matches!(result, Err(ContactError::InvalidEmail)));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(mailer.sends().is_empty());
    }

    #[tokio::test]
    async fn test_handle_confirmation_failure_aborts_and_skips_operator() {
        let mailer = MockMailer::new(true);
        let dispatcher = Dispatcher::new(test_config(), mailer.clone());

        let result = dispatcher.handle(request("ana@x.com", "en")).await;
        assert!(matches!(result, Err(ContactError::Delivery(_))));

        // Exactly one attempt (the confirmation); nothing scheduled after.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let sends = mailer.sends();
        assert_eq!(sends.len(), 1);
        assert_eq!(sends[0].0, "ana@x.com");
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(ContactError::InvalidEmail.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ContactError::EmptyName.status(), StatusCode::BAD_REQUEST);
        let delivery = ContactError::Delivery(MailError::Address(
            "bad".parse::<lettre::Address>().unwrap_err(),
        ));
        assert_eq!(delivery.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
