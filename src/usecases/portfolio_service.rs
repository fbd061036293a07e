//! Content loading. Reads the portfolio document through the content port
//! and substitutes built-in defaults when it is missing or malformed.

use crate::domain::PortfolioData;
use crate::ports::ContentPort;
use std::sync::Arc;
use tracing::{info, warn};

pub struct PortfolioService {
    content: Arc<dyn ContentPort>,
}

impl PortfolioService {
    pub fn new(content: Arc<dyn ContentPort>) -> Self {
        Self { content }
    }

    /// Load the content document. On any failure, logs a warning and
    /// returns [`PortfolioData::fallback`] — rendering never fails for
    /// want of content.
    pub async fn load_or_default(&self) -> PortfolioData {
        match self.content.load().await {
            Ok(data) => {
                info!(
                    skills = data.skills.len(),
                    projects = data.projects.len(),
                    certifications = data.certifications.len(),
                    "content document loaded"
                );
                data
            }
            Err(e) => {
                warn!(error = %e, "content document unavailable, using built-in defaults");
                PortfolioData::fallback()
            }
        }
    }
}
