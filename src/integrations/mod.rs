//! Notification and ticketing capabilities.
//!
//! Health results can be pushed to external channels (JIRA tickets, Slack or
//! Teams messages, email). The scoring core never calls into this module;
//! callers decide what to send with [`build_alerts`] and where with
//! [`dispatch`]. Only mock transports exist: they log and return synthetic
//! receipts.

mod alerts;
mod mock;

pub use alerts::{build_alerts, dispatch, DispatchFailure, DispatchSummary};
pub use mock::{sinks_for, MockIntegration, NoopSink};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::Result;
use crate::model::EntityId;
use crate::recommendations::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Jira,
    Slack,
    Teams,
    Email,
    Noop,
}

impl Channel {
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Jira => "jira",
            Channel::Slack => "slack",
            Channel::Teams => "teams",
            Channel::Email => "email",
            Channel::Noop => "noop",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A message about one program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub program_id: EntityId,
    pub title: String,
    pub body: String,
    pub severity: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReceipt {
    pub channel: Channel,
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    pub program_id: EntityId,
    pub summary: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketReceipt {
    pub key: String,
}

/// Something that can deliver a notification.
pub trait NotificationSink: Send + Sync {
    fn channel(&self) -> Channel;

    fn deliver(&self, notification: &Notification) -> Result<DeliveryReceipt>;
}

/// Something that can open a tracking ticket.
pub trait TicketingClient: Send + Sync {
    fn create_ticket(&self, request: &TicketRequest) -> Result<TicketReceipt>;
}
