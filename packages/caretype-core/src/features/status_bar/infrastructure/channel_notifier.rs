//! Channel-backed update sink
//!
//! The widget is the single writer; the renderer drains the receiver.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::features::status_bar::ports::{UpdateSink, WidgetUpdate};

pub struct ChannelNotifier {
    sender: Sender<WidgetUpdate>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver the renderer reads from
    pub fn channel() -> (Self, Receiver<WidgetUpdate>) {
        let (sender, receiver) = channel();
        (Self { sender }, receiver)
    }
}

impl UpdateSink for ChannelNotifier {
    fn widget_changed(&mut self, update: WidgetUpdate) {
        if self.sender.send(update).is_err() {
            tracing::debug!("renderer disconnected, dropping status bar update");
        }
    }
}
