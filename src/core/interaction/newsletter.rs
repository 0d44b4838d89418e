//! Footer newsletter signup

use thiserror::Error;

/// Decoy input that humans never see; bots tend to fill it
pub const HONEYPOT_FIELD: &str = "website";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("Please enter your email address.")]
    EmptyEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Your submission could not be accepted.")]
    Automated,
    #[error("Subscription failed: {0}")]
    Delivery(String),
}

/// Basic shape check: one `@`, non-empty local part, dotted domain
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Check a submission. The honeypot is checked first so automated
/// submissions never reach the address checks.
pub fn validate_submission(email: &str, honeypot: &str) -> Result<String, NewsletterError> {
    if !honeypot.trim().is_empty() {
        return Err(NewsletterError::Automated);
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(NewsletterError::EmptyEmail);
    }
    if !is_plausible_email(email) {
        return Err(NewsletterError::InvalidEmail);
    }
    Ok(email.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NewsletterStatus {
    #[default]
    Idle,
    Submitting,
    Subscribed,
    Failed(NewsletterError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsletterState {
    pub email: String,
    pub status: NewsletterStatus,
}

impl NewsletterState {
    /// Validate and move to `Submitting`, or record the failure.
    /// Returns the normalized address on success. Automated submissions are
    /// dropped but look subscribed to the sender.
    pub fn submit(&mut self, email: &str, honeypot: &str) -> Option<String> {
        self.email = email.to_string();
        match validate_submission(email, honeypot) {
            Ok(email) => {
                self.status = NewsletterStatus::Submitting;
                Some(email)
            }
            Err(NewsletterError::Automated) => {
                self.succeeded();
                None
            }
            Err(error) => {
                self.status = NewsletterStatus::Failed(error);
                None
            }
        }
    }

    pub fn succeeded(&mut self) {
        self.email.clear();
        self.status = NewsletterStatus::Subscribed;
    }

    pub fn failed(&mut self, reason: impl Into<String>) {
        self.status = NewsletterStatus::Failed(NewsletterError::Delivery(reason.into()));
    }

    pub fn is_invalid(&self) -> bool {
        matches!(
            self.status,
            NewsletterStatus::Failed(NewsletterError::EmptyEmail | NewsletterError::InvalidEmail)
        )
    }

    /// Message for the status region, `None` while idle
    pub fn message(&self) -> Option<String> {
        match &self.status {
            NewsletterStatus::Idle => None,
            NewsletterStatus::Submitting => Some("Subscribing...".to_string()),
            NewsletterStatus::Subscribed => Some("Thanks for subscribing!".to_string()),
            NewsletterStatus::Failed(error) => Some(error.to_string()),
        }
    }
}
