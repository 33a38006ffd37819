//! Debounced, multicast, replay-1 emission pipeline.
//!
//! The worker pushes raw emissions into an unbounded channel; the debounce
//! loop collapses bursts within the quiet window into the latest value, then
//! publishes to a broadcast channel and a last-value slot. Late subscribers
//! get the slot contents first, so they never miss the current state.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use futures::Stream;
use tokio::sync::{broadcast, mpsc};
use tokio::time::timeout;

use crate::logger::{self, LogTag};

use super::events::FilterEvent;

pub(crate) struct EmissionHub<P, A> {
    tx: broadcast::Sender<FilterEvent<P, A>>,
    last: RwLock<Option<FilterEvent<P, A>>>,
}

impl<P: Clone, A: Clone> EmissionHub<P, A> {
    pub(crate) fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self {
            tx,
            last: RwLock::new(None),
        }
    }

    pub(crate) fn publish(&self, event: FilterEvent<P, A>) {
        if let Ok(mut last) = self.last.write() {
            *last = Some(event.clone());
        }
        // A send error only means nobody is subscribed right now; the replay
        // slot above still captures the emission for late subscribers.
        let _ = self.tx.send(event);
    }

    pub(crate) fn subscribe(&self) -> EventSubscription<P, A> {
        let rx = self.tx.subscribe();
        let replay = self.last.read().ok().and_then(|last| last.clone());
        EventSubscription { replay, rx }
    }
}

/// Debounce loop: successive emissions within `window` collapse to the latest
/// value. A zero window publishes every emission as-is (useful in tests).
pub(crate) async fn run_debounce<P, A>(
    mut rx: mpsc::UnboundedReceiver<FilterEvent<P, A>>,
    hub: Arc<EmissionHub<P, A>>,
    window: Duration,
) where
    P: Clone + Send + 'static,
    A: Clone + Send + 'static,
{
    while let Some(mut event) = rx.recv().await {
        if !window.is_zero() {
            loop {
                match timeout(window, rx.recv()).await {
                    // superseded within the quiet window
                    Ok(Some(next)) => event = next,
                    Ok(None) => {
                        hub.publish(event);
                        return;
                    }
                    // window elapsed without a newer emission
                    Err(_) => break,
                }
            }
        }
        hub.publish(event);
    }
    logger::debug(LogTag::Stream, "emission channel closed, debounce exiting");
}

/// A live subscription to the engine's event stream.
///
/// The most recent emission before subscribing (if any) is delivered first.
/// An emission that lands exactly while subscribing can be observed twice
/// across the replay boundary; renders are expected to be idempotent.
pub struct EventSubscription<P, A> {
    replay: Option<FilterEvent<P, A>>,
    rx: broadcast::Receiver<FilterEvent<P, A>>,
}

impl<P, A> EventSubscription<P, A>
where
    P: Clone + Send + 'static,
    A: Clone + Send + 'static,
{
    /// Next event, or `None` once the engine is gone.
    pub async fn recv(&mut self) -> Option<FilterEvent<P, A>> {
        if let Some(event) = self.replay.take() {
            return Some(event);
        }
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    logger::warning(
                        LogTag::Stream,
                        &format!("subscriber lagged, skipped {} emissions", skipped),
                    );
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Adapter for `futures`-based consumers.
    pub fn into_stream(self) -> impl Stream<Item = FilterEvent<P, A>> {
        futures::stream::unfold(self, |mut subscription| async move {
            subscription
                .recv()
                .await
                .map(|event| (event, subscription))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{Filters, SortOrder};
    use crate::testkit::{item, single_group, Attrs};

    type Event = FilterEvent<u32, Attrs>;

    fn preview(selected: &str) -> Event {
        FilterEvent::Update {
            filters: Filters::new(
                vec![single_group(
                    "g",
                    vec![item("a", selected == "a"), item("b", selected == "b")],
                    false,
                )],
                SortOrder::default(),
            ),
        }
    }

    fn selected_id(event: &Event) -> String {
        event.filters().selected_ids()[0].1.clone()
    }

    #[tokio::test]
    async fn burst_collapses_to_latest() {
        let hub = Arc::new(EmissionHub::new(8));
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_debounce(rx, Arc::clone(&hub), Duration::from_millis(40)));

        let mut subscription = hub.subscribe();
        tx.send(preview("a")).unwrap();
        tx.send(preview("b")).unwrap();
        tx.send(preview("a")).unwrap();

        let event = timeout(Duration::from_secs(2), subscription.recv())
            .await
            .expect("debounced emission")
            .expect("stream open");
        assert_eq!(selected_id(&event), "a");

        // nothing else was queued, the burst was one emission
        let extra = timeout(Duration::from_millis(120), subscription.recv()).await;
        assert!(extra.is_err(), "expected exactly one debounced emission");
    }

    #[tokio::test]
    async fn late_subscriber_gets_replay() {
        let hub = Arc::new(EmissionHub::new(8));
        hub.publish(preview("b"));

        let mut subscription = hub.subscribe();
        let event = subscription.recv().await.expect("replayed emission");
        assert_eq!(selected_id(&event), "b");
    }

    #[tokio::test]
    async fn zero_window_publishes_everything() {
        let hub = Arc::new(EmissionHub::new(8));
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_debounce(rx, Arc::clone(&hub), Duration::ZERO));

        let mut subscription = hub.subscribe();
        tx.send(preview("a")).unwrap();
        tx.send(preview("b")).unwrap();

        let first = subscription.recv().await.unwrap();
        let second = subscription.recv().await.unwrap();
        assert_eq!(selected_id(&first), "a");
        assert_eq!(selected_id(&second), "b");
    }

    #[tokio::test]
    async fn stream_adapter_yields_events() {
        use futures::StreamExt;

        let hub = Arc::new(EmissionHub::new(8));
        hub.publish(preview("a"));

        let mut stream = Box::pin(hub.subscribe().into_stream());
        let event = stream.next().await.expect("replayed emission");
        assert_eq!(selected_id(&event), "a");
    }
}
