use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use ttd_dataset::ReferenceDataset;
use ttd_resolver::{process_message, Reply};

/// The one thing the bot needs from a chat platform: post a reply to a channel.
#[async_trait]
pub trait ReplySink: Send + Sync {
    type Channel: Debug + Send + Sync;

    async fn send_reply(&self, channel: &Self::Channel, reply: &Reply) -> anyhow::Result<()>;
}

/// What happened to one inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// No `%%` reference; nothing was sent
    Ignored,
    /// A reply with `fields` fields was delivered
    Sent { fields: usize },
    /// The platform rejected the reply; logged and dropped
    SendFailed,
}

/// Routes inbound messages through the resolver and back out to the platform.
///
/// Cheap to clone; every clone shares the same read-only dataset.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    dataset: Arc<ReferenceDataset>,
}

impl Dispatcher {
    pub fn new(dataset: Arc<ReferenceDataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &ReferenceDataset {
        &self.dataset
    }

    /// Handle one message from `channel`.
    ///
    /// Sends at most one reply and never retries a failed send.
    pub async fn handle_message<S>(
        &self,
        sink: &S,
        channel: &S::Channel,
        content: &str,
    ) -> Dispatch
    where
        S: ReplySink + ?Sized,
    {
        let Some(reply) = process_message(content, &self.dataset) else {
            return Dispatch::Ignored;
        };

        let fields = reply.len();
        log::debug!("Replying to {channel:?} with {fields} field(s)");

        match sink.send_reply(channel, &reply).await {
            Ok(()) => Dispatch::Sent { fields },
            Err(err) => {
                log::warn!("Failed to send reply to {channel:?}: {err:#}");
                Dispatch::SendFailed
            }
        }
    }
}
