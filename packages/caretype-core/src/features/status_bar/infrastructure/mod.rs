//! Status bar adapters

mod channel_notifier;
mod documents;

pub use channel_notifier::ChannelNotifier;
pub use documents::InMemoryDocuments;
