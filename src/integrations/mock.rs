use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use super::{
    Channel, DeliveryReceipt, Notification, NotificationSink, TicketReceipt, TicketRequest,
    TicketingClient,
};
use crate::errors::{Error, Result};

/// Stand-in for a real channel client.
///
/// Deliveries are logged and acknowledged with sequential ids. A JIRA mock
/// also acts as a ticketing client issuing `MOCK-<n>` keys.
#[derive(Debug)]
pub struct MockIntegration {
    channel: Channel,
    sequence: AtomicU64,
}

impl MockIntegration {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            sequence: AtomicU64::new(0),
        }
    }

    fn next_id(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl NotificationSink for MockIntegration {
    fn channel(&self) -> Channel {
        self.channel
    }

    fn deliver(&self, notification: &Notification) -> Result<DeliveryReceipt> {
        if notification.title.trim().is_empty() {
            return Err(Error::integration(self.channel, "notification title is empty"));
        }

        let message_id = format!("{}-{}", self.channel, self.next_id());
        info!(
            channel = %self.channel,
            program_id = notification.program_id,
            severity = %notification.severity,
            message_id = %message_id,
            "Mock delivery: {}",
            notification.title
        );

        Ok(DeliveryReceipt {
            channel: self.channel,
            message_id,
        })
    }
}

impl TicketingClient for MockIntegration {
    fn create_ticket(&self, request: &TicketRequest) -> Result<TicketReceipt> {
        if self.channel != Channel::Jira {
            return Err(Error::integration(
                self.channel,
                "channel does not support ticket creation",
            ));
        }

        let key = format!("MOCK-{}", self.next_id());
        info!(
            program_id = request.program_id,
            priority = %request.priority,
            key = %key,
            "Mock ticket created: {}",
            request.summary
        );
        Ok(TicketReceipt { key })
    }
}

/// Accepts everything and does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl NotificationSink for NoopSink {
    fn channel(&self) -> Channel {
        Channel::Noop
    }

    fn deliver(&self, _notification: &Notification) -> Result<DeliveryReceipt> {
        Ok(DeliveryReceipt {
            channel: Channel::Noop,
            message_id: String::new(),
        })
    }
}

/// Build a sink per configured channel.
pub fn sinks_for(channels: &[Channel]) -> Vec<Box<dyn NotificationSink>> {
    channels
        .iter()
        .map(|&channel| -> Box<dyn NotificationSink> {
            match channel {
                Channel::Noop => Box::new(NoopSink),
                other => Box::new(MockIntegration::new(other)),
            }
        })
        .collect()
}
