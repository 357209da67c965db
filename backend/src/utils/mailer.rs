use lettre::address::AddressError;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::info;

use crate::config::app_config::{Config, MailSettings};
use crate::models::contact_models::ContactMessage;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("MAIL_USERNAME is not set")]
    MissingRecipient,
    #[error("invalid address: {0}")]
    Address(#[from] AddressError),
    #[error("could not build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Where contact submissions go.
pub enum Mailer {
    /// Logs the submission instead of sending it (`TESTING=true`).
    Console,
    Smtp(SmtpMailer),
}

impl Mailer {
    pub fn from_config(config: &Config) -> Result<Self, MailError> {
        if config.testing {
            return Ok(Mailer::Console);
        }
        Ok(Mailer::Smtp(SmtpMailer::new(&config.mail)?))
    }

    pub async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        match self {
            Mailer::Console => {
                info!(
                    from = %message.email,
                    name = %message.name,
                    subject = %message.subject,
                    "Contact form submission (test mode):\n{}",
                    message.message
                );
                Ok(())
            }
            Mailer::Smtp(smtp) => smtp.send(message).await,
        }
    }
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    username: String,
}

impl SmtpMailer {
    pub fn new(settings: &MailSettings) -> Result<Self, MailError> {
        let builder = if settings.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.server)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.server)
        };
        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(settings.username.clone(), settings.password.clone()))
            .build();

        Ok(SmtpMailer { transport, username: settings.username.clone() })
    }

    /// Mails the submission to the site owner with the sender as reply-to.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        if self.username.is_empty() {
            return Err(MailError::MissingRecipient);
        }
        let owner: Mailbox = self.username.parse()?;
        let sender = Mailbox::new(Some(message.name.clone()), message.email.parse::<Address>()?);

        let email = Message::builder()
            .from(owner.clone())
            .reply_to(sender)
            .to(owner)
            .subject(format!("Portfolio Contact: {}", message.subject))
            .body(format!(
                "Name:    {}\nEmail:   {}\nSubject: {}\n\nMessage:\n{}",
                message.name, message.email, message.subject, message.message
            ))?;

        self.transport.send(email).await?;
        info!("Contact email delivered for {}", message.email);
        Ok(())
    }
}
