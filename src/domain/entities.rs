//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/terminal types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};

/// One user-initiated attempt to send the contact form.
///
/// Created at submit time, never persisted, discarded after the pipeline
/// resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Terminal result of one submission. Exactly one primary attempt, then
/// exactly one fallback path — no retry count, no backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The delivery service accepted the message.
    Sent,
    /// The delivery service failed; the mail client was invoked instead.
    FallbackRequired,
}

/// The static content document rendered by the presentation layer.
///
/// Read once at startup. Absent or malformed documents are replaced by
/// [`PortfolioData::fallback`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal: Personal,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub about: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl PortfolioData {
    /// Built-in defaults used when the content document is missing or
    /// cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            personal: Personal {
                name: "Your Name".to_string(),
                title: "Full Stack Developer".to_string(),
                description: "I create beautiful and functional web applications.".to_string(),
                about: None,
                email: "your.email@example.com".to_string(),
                phone: Some("+1 (555) 123-4567".to_string()),
                location: Some("Your City, Country".to_string()),
            },
            skills: Vec::new(),
            projects: Vec::new(),
            social_links: Vec::new(),
            certifications: Vec::new(),
        }
    }
}
