//! # Client Module
//!
//! The client entity: identifying attributes with construction-time
//! validation, plus the observer capability that turns account
//! notifications into outbound alerts through a notification sink.

use crate::email;
use crate::error::{CoreError, CoreResult};
use crate::observer::Observer;
use chrono::Local;
use std::fmt;

/// Destination for composed alerts.
///
/// Send-and-forget: the core never retries or verifies delivery.
pub trait NotificationSink {
    fn send(&self, to: &str, subject: &str, body: &str) -> CoreResult<()>;
}

/// Default sink: writes the alert to the log instead of delivering mail.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn send(&self, to: &str, subject: &str, body: &str) -> CoreResult<()> {
        tracing::info!(to, subject, body, "notification dispatched");
        Ok(())
    }
}

/// A bank client.
///
/// First and last name must be non-blank; the email address is normalized
/// when valid and kept as given otherwise. Attach a client to an account
/// to have it alerted on low-balance and large-transaction events.
pub struct Client {
    client_number: u32,
    first_name: String,
    last_name: String,
    email_address: String,
    sink: Box<dyn NotificationSink>,
}

impl Client {
    pub fn new(
        client_number: u32,
        first_name: &str,
        last_name: &str,
        email_address: &str,
    ) -> CoreResult<Self> {
        if client_number == 0 {
            return Err(CoreError::InvalidClientNumber(client_number));
        }

        let first_name = first_name.trim();
        if first_name.is_empty() {
            return Err(CoreError::BlankName("First name"));
        }

        let last_name = last_name.trim();
        if last_name.is_empty() {
            return Err(CoreError::BlankName("Last name"));
        }

        let email_address = email::normalize(email_address)
            .unwrap_or_else(|_| email_address.to_string());

        Ok(Self {
            client_number,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email_address,
            sink: Box::new(LogSink),
        })
    }

    /// Replace the notification sink collaborator.
    pub fn with_sink(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn client_number(&self) -> u32 {
        self.client_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}

impl Observer for Client {
    fn name(&self) -> &str {
        &self.email_address
    }

    fn update(&self, message: &str) -> CoreResult<()> {
        let subject = format!(
            "ALERT: Unusual Activity: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        let body = format!(
            "Notification for {}: {} {}: {}",
            self.client_number, self.first_name, self.last_name, message
        );
        self.sink.send(&self.email_address, &subject, &body)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("client_number", &self.client_number)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .finish()
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} [{}] - {}",
            self.last_name, self.first_name, self.client_number, self.email_address
        )
    }
}
