//! Eviction Notifier Module
//!
//! Discard events are purely observational: notifiers must not block, must
//! not fail the `put` that triggered them, and cannot influence eviction.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc::{self, Receiver, Sender, UnboundedReceiver, UnboundedSender};
use tracing::info;

// == Discard Event ==
/// Emitted once per eviction, naming the evicted key.
///
/// Displays as `DISCARD: <key>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardEvent<K> {
    pub key: K,
}

impl<K> DiscardEvent<K> {
    pub fn new(key: K) -> Self {
        Self { key }
    }
}

impl<K: fmt::Display> fmt::Display for DiscardEvent<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DISCARD: {}", self.key)
    }
}

// == Notifier Trait ==
/// Receives discard events synchronously, before the new entry is inserted.
pub trait EvictionNotifier<K>: Send + Sync {
    fn notify(&self, event: &DiscardEvent<K>);
}

/// Logs each event at info level. Default notifier for displayable keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl<K: fmt::Display> EvictionNotifier<K> for TracingNotifier {
    fn notify(&self, event: &DiscardEvent<K>) {
        info!(target: "policy_cache::discard", "{}", event);
    }
}

// == Writer Notifier ==
/// Writes one `DISCARD: <key>` line per event. Write errors are dropped.
#[derive(Debug)]
pub struct WriterNotifier<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterNotifier<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<K: fmt::Display, W: Write + Send> EvictionNotifier<K> for WriterNotifier<W> {
    fn notify(&self, event: &DiscardEvent<K>) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "{}", event);
        let _ = writer.flush();
    }
}

// == Channel Notifier ==
/// Forwards events onto an unbounded channel. Sending never blocks; events
/// are dropped once the receiver is gone.
///
/// A receiver that is kept but never drained makes the channel grow by one
/// event per eviction. Use [`BoundedChannelNotifier`] when consumers may lag.
#[derive(Debug, Clone)]
pub struct ChannelNotifier<K> {
    sender: UnboundedSender<DiscardEvent<K>>,
}

impl<K> ChannelNotifier<K> {
    /// Creates a notifier and the receiving end of its stream.
    pub fn channel() -> (Self, UnboundedReceiver<DiscardEvent<K>>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl<K: Clone + Send> EvictionNotifier<K> for ChannelNotifier<K> {
    fn notify(&self, event: &DiscardEvent<K>) {
        let _ = self.sender.send(event.clone());
    }
}

// == Bounded Channel Notifier ==
/// Forwards events onto a bounded channel with `try_send`. Events arriving
/// while the channel is full, or after the receiver is gone, are dropped.
#[derive(Debug, Clone)]
pub struct BoundedChannelNotifier<K> {
    sender: Sender<DiscardEvent<K>>,
}

impl<K> BoundedChannelNotifier<K> {
    /// Creates a notifier buffering at most `buffer` undelivered events.
    ///
    /// # Panics
    /// Panics if `buffer` is 0, like [`tokio::sync::mpsc::channel`].
    pub fn channel(buffer: usize) -> (Self, Receiver<DiscardEvent<K>>) {
        let (sender, receiver) = mpsc::channel(buffer);
        (Self { sender }, receiver)
    }
}

impl<K: Clone + Send> EvictionNotifier<K> for BoundedChannelNotifier<K> {
    fn notify(&self, event: &DiscardEvent<K>) {
        let _ = self.sender.try_send(event.clone());
    }
}

// == Recording Notifier ==
/// Collects evicted keys in memory. Clones share the same log.
#[derive(Debug, Clone)]
pub struct RecordingNotifier<K> {
    events: Arc<Mutex<Vec<K>>>,
}

impl<K> Default for RecordingNotifier<K> {
    fn default() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<K: Clone> RecordingNotifier<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evicted keys so far, oldest first.
    pub fn discarded(&self) -> Vec<K> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<K: Clone + Send> EvictionNotifier<K> for RecordingNotifier<K> {
    fn notify(&self, event: &DiscardEvent<K>) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.key.clone());
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_event_display() {
        assert_eq!(DiscardEvent::new("A").to_string(), "DISCARD: A");
        assert_eq!(DiscardEvent::new(42).to_string(), "DISCARD: 42");
    }

    #[test]
    fn test_writer_notifier_lines() {
        let notifier = WriterNotifier::new(Vec::new());
        notifier.notify(&DiscardEvent::new("A"));
        notifier.notify(&DiscardEvent::new("B"));

        let output = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(output, "DISCARD: A\nDISCARD: B\n");
    }

    #[test]
    fn test_recording_notifier_shares_log() {
        let notifier = RecordingNotifier::new();
        let handle = notifier.clone();
        notifier.notify(&DiscardEvent::new(1));
        notifier.notify(&DiscardEvent::new(2));

        assert_eq!(handle.discarded(), vec![1, 2]);
    }

    #[test]
    fn test_channel_notifier_delivers() {
        let (notifier, mut receiver) = ChannelNotifier::channel();
        notifier.notify(&DiscardEvent::new("k"));

        assert_eq!(receiver.try_recv().unwrap(), DiscardEvent::new("k"));
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_bounded_channel_notifier_drops_when_full() {
        let (notifier, mut receiver) = BoundedChannelNotifier::channel(2);
        notifier.notify(&DiscardEvent::new("a"));
        notifier.notify(&DiscardEvent::new("b"));
        notifier.notify(&DiscardEvent::new("c"));

        assert_eq!(receiver.try_recv().unwrap().key, "a");
        assert_eq!(receiver.try_recv().unwrap().key, "b");
        assert!(receiver.try_recv().is_err());

        // Room again after draining
        notifier.notify(&DiscardEvent::new("d"));
        assert_eq!(receiver.try_recv().unwrap().key, "d");
    }

    #[test]
    fn test_channel_notifier_survives_dropped_receiver() {
        let (notifier, receiver) = ChannelNotifier::channel();
        drop(receiver);
        notifier.notify(&DiscardEvent::new("k"));
    }
}
