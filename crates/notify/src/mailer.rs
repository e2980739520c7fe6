//! SMTP mail dispatch via `lettre`.
//!
//! Configuration is loaded from environment variables; if `SMTP_HOST` is
//! not set, [`MailerConfig::from_env`] returns `None` and the service runs
//! without email (sends are skipped upstream).

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::stub::AsyncStubTransport;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::templates::wrap_template;

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "Order Portal <noreply@ordertrack.local>";

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" mailbox.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl MailerConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured.
    ///
    /// | Variable        | Required | Default                                   |
    /// |-----------------|----------|-------------------------------------------|
    /// | `SMTP_HOST`     | yes      | —                                         |
    /// | `SMTP_PORT`     | no       | `587`                                     |
    /// | `SMTP_FROM`     | no       | `Order Portal <noreply@ordertrack.local>` |
    /// | `SMTP_USER`     | no       | —                                         |
    /// | `SMTP_PASSWORD` | no       | —                                         |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

/// Result of one send attempt, as a value.
///
/// The mailer reports failures here instead of returning `Err`, so a failed
/// notification can never roll back or abort the work that triggered it.
#[derive(Debug, Clone)]
pub enum SendOutcome {
    /// Accepted by the SMTP server; carries the server response line.
    Sent { message_id: String },
    /// The message could not be built or the transport failed.
    Failed { error: String },
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent { .. })
    }
}

/// The wire behind a [`Mailer`]: real SMTP in production, lettre's
/// in-memory stub in tests that need observable send outcomes.
enum MailTransport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    Stub(AsyncStubTransport),
}

/// Sends ordertrack notification emails via SMTP.
///
/// The transport is constructed once at startup and reused for every send.
pub struct Mailer {
    transport: MailTransport,
    from_address: String,
}

impl Mailer {
    /// Build a mailer from the given configuration.
    ///
    /// Fails only on an invalid relay host; per-message problems surface
    /// through [`SendOutcome`] at send time.
    pub fn new(config: &MailerConfig) -> Result<Self, lettre::transport::smtp::Error> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: MailTransport::Smtp(builder.build()),
            from_address: config.from_address.clone(),
        })
    }

    /// A mailer whose sends always succeed, backed by lettre's in-memory
    /// stub transport. No network I/O; messages are still built and their
    /// addresses validated.
    pub fn stub() -> Self {
        Self {
            transport: MailTransport::Stub(AsyncStubTransport::new_ok()),
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
        }
    }

    /// A mailer whose sends always fail, for exercising the callers'
    /// failure handling.
    pub fn stub_failing() -> Self {
        Self {
            transport: MailTransport::Stub(AsyncStubTransport::new_error()),
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
        }
    }

    /// Send one HTML email, wrapped in the standard template.
    ///
    /// Never returns an error: all failures are folded into
    /// [`SendOutcome::Failed`] and logged.
    pub async fn send(&self, to: &str, subject: &str, html_body: &str) -> SendOutcome {
        let message = match self.build_message(to, subject, html_body) {
            Ok(message) => message,
            Err(error) => {
                tracing::warn!(to, %error, "Failed to build email");
                return SendOutcome::Failed { error };
            }
        };

        let result = match &self.transport {
            MailTransport::Smtp(transport) => transport
                .send(message)
                .await
                .map(|response| response.message().collect::<Vec<_>>().join(" "))
                .map_err(|e| e.to_string()),
            MailTransport::Stub(transport) => transport
                .send(message)
                .await
                .map(|_| "stubbed".to_string())
                .map_err(|e| e.to_string()),
        };

        match result {
            Ok(message_id) => {
                tracing::info!(to, subject, "Email sent");
                SendOutcome::Sent { message_id }
            }
            Err(error) => {
                tracing::error!(to, subject, %error, "Failed to send email");
                SendOutcome::Failed { error }
            }
        }
    }

    fn build_message(&self, to: &str, subject: &str, html_body: &str) -> Result<Message, String> {
        Message::builder()
            .from(self.from_address.parse().map_err(|e| format!("{e}"))?)
            .to(to.parse().map_err(|e| format!("{e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(wrap_template(html_body))
            .map_err(|e| e.to_string())
    }
}
