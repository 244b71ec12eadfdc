//! The reading driver: schedules delayed transitions and applies them.
//!
//! Must be used from within a tokio runtime context.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use arcana_core::{DrawOutcome, ReadingConfig, RevealRequest, Session};
use arcana_oracle::{CardPrompt, NarrativeProvider};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinSet;
use tokio::time::{Instant, sleep, sleep_until};
use tracing::Instrument;

use crate::event::ReadingEvent;

/// Single owner of a reading session and its scheduled tasks.
pub struct ReadingDriver {
    session: Session,
    provider: Arc<dyn NarrativeProvider>,
    tx: UnboundedSender<ReadingEvent>,
    rx: UnboundedReceiver<ReadingEvent>,
    tasks: JoinSet<()>,
}

impl ReadingDriver {
    /// Create a driver with a fresh session.
    pub fn new(config: ReadingConfig, provider: Arc<dyn NarrativeProvider>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(config),
            provider,
            tx,
            rx,
            tasks: JoinSet::new(),
        }
    }

    /// Read-only view of the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Number of scheduled tasks that have not finished yet.
    pub fn pending_tasks(&mut self) -> usize {
        while self.tasks.try_join_next().is_some() {}
        self.tasks.len()
    }

    /// Submit the question and schedule the end of the shuffle.
    pub fn submit(&mut self, question: &str) -> bool {
        let Some(generation) = self.session.submit(question) else {
            return false;
        };
        let delay = self.session.config().settle_delay;
        self.schedule("settle", delay, ReadingEvent::Settled { generation });
        true
    }

    /// Fan out or gather the deck.
    pub fn toggle_spread(&mut self) -> bool {
        self.session.toggle_spread()
    }

    /// Draw a card; the final draw schedules the deck collapse.
    pub fn draw(&mut self, card_id: u8) -> Option<DrawOutcome> {
        let outcome = self.session.draw(card_id)?;
        if outcome.completed {
            let delay = self.session.config().collapse_delay;
            let generation = self.session.generation();
            self.schedule("collapse", delay, ReadingEvent::Collapse { generation });
        }
        Some(outcome)
    }

    /// Start the reveal sequence.
    ///
    /// Issues the narrative request immediately, schedules the three flips in
    /// draw order, and joins the narrative with the animation floor before
    /// delivering [`ReadingEvent::Narrative`].
    pub fn reveal(&mut self) -> bool {
        let Some(request) = self.session.begin_reveal() else {
            return false;
        };
        let timing = self.session.config().reveal;
        let generation = request.generation;
        tracing::info!(generation, question = %request.question, "revealing spread");

        let start = Instant::now();
        let tx = self.tx.clone();
        let offsets = timing.flip_offsets();
        self.spawn("flips", async move {
            for (index, offset) in offsets.into_iter().enumerate() {
                sleep_until(start + offset).await;
                if tx.send(ReadingEvent::Flip { generation, index }).is_err() {
                    return;
                }
            }
        });

        let tx = self.tx.clone();
        let provider = Arc::clone(&self.provider);
        let floor = start + timing.animation_floor();
        self.spawn("narrative", async move {
            let text = fetch_behind_floor(provider.as_ref(), &request, floor).await;
            tx.send(ReadingEvent::Narrative { generation, text }).ok();
        });
        true
    }

    /// Abandon everything in flight and start over.
    pub fn reset(&mut self) {
        self.tasks.abort_all();
        self.tasks.detach_all();
        while self.rx.try_recv().is_ok() {}
        self.session.reset();
    }

    /// Apply a delivered event. Returns whether the session changed.
    pub fn apply(&mut self, event: ReadingEvent) -> bool {
        match event {
            ReadingEvent::Settled { generation } => self.session.finish_shuffle(generation),
            ReadingEvent::Collapse { generation } => self.session.settle_collapse(generation),
            ReadingEvent::Flip { generation, index } => self.session.flip(generation, index),
            ReadingEvent::Narrative { generation, text } => {
                self.session.complete_reveal(generation, text)
            }
        }
    }

    /// Wait for the next event, apply it, and return it.
    pub async fn step(&mut self) -> Option<ReadingEvent> {
        let event = self.rx.recv().await?;
        self.apply(event.clone());
        Some(event)
    }

    /// Apply the next event if one is already waiting.
    pub fn try_step(&mut self) -> Option<ReadingEvent> {
        let event = self.rx.try_recv().ok()?;
        self.apply(event.clone());
        Some(event)
    }

    fn schedule(&mut self, name: &'static str, delay: Duration, event: ReadingEvent) {
        let tx = self.tx.clone();
        self.spawn(name, async move {
            sleep(delay).await;
            tx.send(event).ok();
        });
    }

    fn spawn<F>(&mut self, name: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        while self.tasks.try_join_next().is_some() {}
        let span = tracing::debug_span!("reading_task", task = name);
        self.tasks.spawn(task.instrument(span));
    }
}

/// Request the narrative and hold it until `floor`, whichever finishes last.
async fn fetch_behind_floor(
    provider: &dyn NarrativeProvider,
    request: &RevealRequest,
    floor: Instant,
) -> String {
    let cards: Vec<CardPrompt> = request.cards.iter().map(CardPrompt::from).collect();
    let (text, ()) = tokio::join!(
        provider.produce_reading(&request.question, &cards),
        sleep_until(floor)
    );
    text
}
