//! Implements InputPort. Inquire-based interactive session: section
//! rendering from the content document plus the contact-form flow.

use crate::adapters::ui::banner;
use crate::domain::{ContactSubmission, DeliveryOutcome, DomainError, PortfolioData};
use crate::ports::InputPort;
use crate::usecases::ContactService;
use async_trait::async_trait;
use crossterm::style::{Color, Stylize};
use indicatif::ProgressBar;
use inquire::{InquireError, Select, Text};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

const NEON_CYAN: Color = Color::Rgb {
    r: 0x00,
    g: 0xff,
    b: 0xff,
};
const SUNSET_ORANGE: Color = Color::Rgb {
    r: 0xff,
    g: 0x77,
    b: 0x30,
};
const STEEL_BLUE: Color = Color::Rgb {
    r: 0x17,
    g: 0xa2,
    b: 0xb8,
};

/// Kind of the transient notification shown after a submission.
enum Notice {
    Success,
    Error,
    Info,
}

/// Render exactly one notification line for a pipeline outcome.
fn notify(kind: Notice, message: &str) {
    let line = match kind {
        Notice::Success => format!("✔ {}", message).with(NEON_CYAN).bold(),
        Notice::Error => format!("✖ {}", message).with(SUNSET_ORANGE).bold(),
        Notice::Info => format!("ℹ {}", message).with(STEEL_BLUE).bold(),
    };
    println!("\n{}\n", line);
}

/// TUI adapter. Inquire prompts over the loaded content document.
pub struct TuiInputPort {
    data: PortfolioData,
    contact: Arc<ContactService>,
    typewriter: bool,
}

impl TuiInputPort {
    pub fn new(data: PortfolioData, contact: Arc<ContactService>, typewriter: bool) -> Self {
        Self {
            data,
            contact,
            typewriter,
        }
    }

    /// Print a line character by character. Instant when the typewriter
    /// effect is disabled.
    async fn type_out(&self, text: &str) {
        if !self.typewriter {
            println!("{}", text);
            return;
        }
        let mut out = std::io::stdout();
        for ch in text.chars() {
            print!("{}", ch);
            let _ = out.flush();
            tokio::time::sleep(Duration::from_millis(30)).await;
        }
        println!();
    }

    fn render_about(&self) {
        let p = &self.data.personal;
        println!("\n{}", "About".with(NEON_CYAN).bold());
        println!("{}", p.description);
        if let Some(about) = &p.about {
            println!("\n{}", about);
        }
        println!();
        println!("  email     {}", p.email);
        if let Some(phone) = &p.phone {
            println!("  phone     {}", phone);
        }
        if let Some(location) = &p.location {
            println!("  location  {}", location);
        }
        if !self.data.social_links.is_empty() {
            println!();
            for link in &self.data.social_links {
                println!("  {:<9} {}", link.platform.to_lowercase(), link.url);
            }
        }
        println!();
    }

    fn render_skills(&self) {
        println!("\n{}", "Skills".with(NEON_CYAN).bold());
        for skill in &self.data.skills {
            println!(
                "  {} — {}",
                skill.name.clone().with(SUNSET_ORANGE),
                skill.description
            );
        }
        println!();
    }

    fn render_projects(&self) {
        println!("\n{}", "Projects".with(NEON_CYAN).bold());
        for project in &self.data.projects {
            println!("\n  {}", project.title.clone().with(SUNSET_ORANGE).bold());
            println!("  {}", project.description);
            if !project.technologies.is_empty() {
                println!("  [{}]", project.technologies.join(", "));
            }
            if let Some(url) = &project.live_url {
                println!("  live: {}", url);
            }
            if let Some(url) = &project.github_url {
                println!("  code: {}", url);
            }
        }
        println!();
    }

    fn render_certifications(&self) {
        println!("\n{}", "Certifications".with(NEON_CYAN).bold());
        for cert in &self.data.certifications {
            println!(
                "\n  {} — {}",
                cert.title.clone().with(SUNSET_ORANGE).bold(),
                cert.issuer
            );
            if !cert.description.is_empty() {
                println!("  {}", cert.description);
            }
            if !cert.skills.is_empty() {
                println!("  [{}]", cert.skills.join(", "));
            }
            if let Some(url) = &cert.pdf_url {
                println!("  certificate: {}", url);
            }
        }
        println!();
    }

    /// Prompt wrapper: Esc returns to the menu instead of erroring.
    fn prompt(&self, text: Text<'_, '_>) -> Result<Option<String>, DomainError> {
        match text.prompt() {
            Ok(value) => Ok(Some(value)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(DomainError::Input(e.to_string())),
        }
    }

    /// Contact form flow. The draft survives validation failures and is
    /// cleared once the pipeline reaches a terminal state.
    async fn contact_flow(&self) -> Result<(), DomainError> {
        println!(
            "\n{}",
            "Get in touch — I'll reply as soon as I can."
                .with(NEON_CYAN)
                .bold()
        );

        let mut draft = ContactSubmission::default();
        loop {
            let Some(name) = self.prompt(
                Text::new("Your name:").with_initial_value(&draft.name),
            )?
            else {
                return Ok(());
            };
            draft.name = name;

            let Some(email) = self.prompt(
                Text::new("Your email:").with_initial_value(&draft.email),
            )?
            else {
                return Ok(());
            };
            draft.email = email;

            let Some(message) = self.prompt(
                Text::new("Your message:").with_initial_value(&draft.message),
            )?
            else {
                return Ok(());
            };
            draft.message = message;

            // The submit control stays "disabled" for the whole pipeline
            // run; the spinner is its visual state.
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Sending...");
            spinner.enable_steady_tick(Duration::from_millis(80));
            let result = self.contact.submit(draft.clone()).await;
            spinner.finish_and_clear();

            match result {
                Ok(DeliveryOutcome::Sent) => {
                    notify(
                        Notice::Success,
                        "Message sent successfully! I'll get back to you soon.",
                    );
                    return Ok(());
                }
                Ok(DeliveryOutcome::FallbackRequired) => {
                    notify(Notice::Info, "Opening your email client to send the message.");
                    return Ok(());
                }
                Err(DomainError::Validation(reason)) => {
                    // Surfaced verbatim; the draft is kept for another try.
                    notify(Notice::Error, &reason.to_string());
                }
                Err(e) => {
                    notify(Notice::Error, &e.to_string());
                    return Ok(());
                }
            }
        }
    }

    fn menu_options(&self) -> Vec<&'static str> {
        let mut options = vec!["About"];
        if !self.data.skills.is_empty() {
            options.push("Skills");
        }
        if !self.data.projects.is_empty() {
            options.push("Projects");
        }
        if !self.data.certifications.is_empty() {
            options.push("Certifications");
        }
        options.push("Contact");
        options.push("Quit");
        options
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        banner::print_welcome(&self.data.personal.name);
        self.type_out(&self.data.personal.title).await;
        println!();

        loop {
            let choice = match Select::new("Where to?", self.menu_options()).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            match choice {
                "About" => self.render_about(),
                "Skills" => self.render_skills(),
                "Projects" => self.render_projects(),
                "Certifications" => self.render_certifications(),
                "Contact" => self.contact_flow().await?,
                _ => break,
            }
        }

        println!("{}", "Thanks for stopping by.".with(NEON_CYAN));
        Ok(())
    }
}
