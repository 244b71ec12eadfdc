//! End-to-end reveal choreography on a paused clock.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use arcana_core::{MAJOR_ARCANA, Phase, Position, ReadingConfig};
use arcana_oracle::{
    CardPrompt, FALLBACK_UNAVAILABLE, FixedProvider, GeminiProvider, NarrativeProvider,
};
use arcana_reading::{ReadingDriver, ReadingEvent};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

const FLOOR: Duration = Duration::from_millis(7500);

/// Provider whose call fails and is converted to a fallback at the boundary.
struct FailingProvider;

#[async_trait]
impl NarrativeProvider for FailingProvider {
    async fn produce_reading(&self, _question: &str, _cards: &[CardPrompt]) -> String {
        let call: Result<String, &str> = Err("connection refused");
        call.unwrap_or_else(|_| "Fallback: connection unavailable".to_string())
    }
}

/// Provider that records what it was asked.
#[derive(Default)]
struct RecordingProvider {
    seen: Mutex<Vec<(String, Vec<CardPrompt>)>>,
}

#[async_trait]
impl NarrativeProvider for RecordingProvider {
    async fn produce_reading(&self, question: &str, cards: &[CardPrompt]) -> String {
        self.seen
            .lock()
            .await
            .push((question.to_string(), cards.to_vec()));
        "recorded".to_string()
    }
}

/// Provider that marks when its slow call runs to completion.
struct LatchProvider {
    latency: Duration,
    finished: AtomicBool,
}

#[async_trait]
impl NarrativeProvider for LatchProvider {
    async fn produce_reading(&self, _question: &str, _cards: &[CardPrompt]) -> String {
        tokio::time::sleep(self.latency).await;
        self.finished.store(true, Ordering::SeqCst);
        "late".to_string()
    }
}

/// Observations from one reveal run.
struct RevealTrace {
    flips: Vec<(usize, Duration)>,
    finished_after: Duration,
    revealed_before: Vec<bool>,
}

async fn picked(driver: &mut ReadingDriver, ids: [u8; 3]) {
    assert!(driver.submit("How will my week go?"));
    while driver.session().phase() != Phase::Picking {
        driver.step().await.unwrap();
    }
    for id in ids {
        driver.draw(id).unwrap();
    }
}

async fn run_reveal(driver: &mut ReadingDriver) -> RevealTrace {
    let revealed_before = driver.session().drawn().iter().map(|c| c.revealed).collect();
    let start = Instant::now();
    assert!(driver.reveal());
    let mut flips = Vec::new();
    loop {
        match driver.step().await.unwrap() {
            ReadingEvent::Flip { index, .. } => {
                assert!(driver.session().drawn()[index].revealed);
                assert_eq!(driver.session().phase(), Phase::Picking);
                flips.push((index, start.elapsed()));
            }
            ReadingEvent::Narrative { .. } => break,
            _ => {}
        }
    }
    RevealTrace {
        flips,
        finished_after: start.elapsed(),
        revealed_before,
    }
}

#[tokio::test(start_paused = true)]
async fn example_reading_with_failed_narrative() {
    let mut driver = ReadingDriver::new(ReadingConfig::default(), Arc::new(FailingProvider));
    picked(&mut driver, [5, 12, 0]).await;

    let drawn = driver.session().drawn();
    let ids: Vec<u8> = drawn.iter().map(|c| c.card.id).collect();
    let positions: Vec<Position> = drawn.iter().map(|c| c.position).collect();
    assert_eq!(ids, vec![5, 12, 0]);
    assert_eq!(positions, vec![Position::Past, Position::Present, Position::Future]);
    assert!(drawn.iter().all(|c| !c.revealed));

    run_reveal(&mut driver).await;
    assert_eq!(driver.session().phase(), Phase::Reading);
    assert_eq!(driver.session().narrative(), "Fallback: connection unavailable");
}

#[tokio::test(start_paused = true)]
async fn flips_run_in_draw_order_before_reading() {
    let mut driver =
        ReadingDriver::new(ReadingConfig::default(), Arc::new(FixedProvider::new("ok")));
    picked(&mut driver, [3, 9, 21]).await;

    let trace = run_reveal(&mut driver).await;
    assert_eq!(trace.revealed_before, vec![false, false, false]);
    let order: Vec<usize> = trace.flips.iter().map(|(i, _)| *i).collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert!(trace.flips[0].1 >= Duration::from_millis(500));
    assert!(trace.flips[1].1 >= Duration::from_millis(3000));
    assert!(trace.flips[2].1 >= Duration::from_millis(5500));
    assert!(driver.session().drawn().iter().all(|c| c.revealed));
}

#[tokio::test(start_paused = true)]
async fn instant_narrative_waits_for_animation_floor() {
    let mut driver =
        ReadingDriver::new(ReadingConfig::default(), Arc::new(FixedProvider::new("fast")));
    picked(&mut driver, [1, 2, 3]).await;

    let trace = run_reveal(&mut driver).await;
    assert!(trace.finished_after >= FLOOR);
    assert!(trace.finished_after < FLOOR + Duration::from_millis(100));
    assert_eq!(driver.session().narrative(), "fast");
    assert!(!driver.session().is_loading());
    assert!(!driver.session().is_revealing());
}

#[tokio::test(start_paused = true)]
async fn slow_narrative_extends_the_wait() {
    let slow = FixedProvider::new("slow").with_latency(Duration::from_secs(12));
    let mut driver = ReadingDriver::new(ReadingConfig::default(), Arc::new(slow));
    picked(&mut driver, [4, 5, 6]).await;

    let trace = run_reveal(&mut driver).await;
    assert_eq!(trace.flips.len(), 3);
    assert!(trace.flips.iter().all(|(_, at)| *at < FLOOR));
    assert!(trace.finished_after >= Duration::from_secs(12));
    assert_eq!(driver.session().phase(), Phase::Reading);
}

#[tokio::test(start_paused = true)]
async fn narrative_request_sees_spread_in_position_order() {
    let provider = Arc::new(RecordingProvider::default());
    let config = ReadingConfig::default().with_reversal_chance(1.0).unwrap();
    let mut driver = ReadingDriver::new(config, provider.clone());
    picked(&mut driver, [5, 12, 0]).await;
    run_reveal(&mut driver).await;

    let seen = provider.seen.lock().await;
    assert_eq!(seen.len(), 1);
    let (question, cards) = &seen[0];
    assert_eq!(question, "How will my week go?");
    let expected: Vec<CardPrompt> = [5usize, 12, 0]
        .iter()
        .zip(Position::ALL)
        .map(|(id, position)| CardPrompt {
            position,
            name: MAJOR_ARCANA[*id].name.to_string(),
            reversed: true,
        })
        .collect();
    assert_eq!(cards, &expected);
}

#[tokio::test(start_paused = true)]
async fn reset_mid_reveal_abandons_everything() {
    let slow = Arc::new(LatchProvider {
        latency: Duration::from_secs(2),
        finished: AtomicBool::new(false),
    });
    let mut driver = ReadingDriver::new(ReadingConfig::default(), slow.clone());
    picked(&mut driver, [7, 8, 9]).await;
    assert!(driver.reveal());

    // Let the first flip land, then abandon the reading.
    match driver.step().await.unwrap() {
        ReadingEvent::Flip { index: 0, .. } | ReadingEvent::Collapse { .. } => {}
        other => panic!("unexpected event {other:?}"),
    }
    driver.reset();

    tokio::time::sleep(FLOOR * 2).await;
    while driver.try_step().is_some() {}

    let session = driver.session();
    assert_eq!(session.phase(), Phase::Input);
    assert!(session.drawn().is_empty());
    assert_eq!(session.deck().cards(), &MAJOR_ARCANA[..]);
    assert_eq!(session.narrative(), "");
    assert!(!session.is_revealing());
    assert!(!session.is_loading());
    // The narrative task was aborted before its call could finish.
    assert!(!slow.finished.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn new_reading_after_reset_is_unaffected_by_old_one() {
    let mut driver = ReadingDriver::new(
        ReadingConfig::default(),
        Arc::new(FixedProvider::new("second")),
    );
    picked(&mut driver, [1, 2, 3]).await;
    assert!(driver.reveal());
    driver.reset();

    picked(&mut driver, [10, 11, 12]).await;
    run_reveal(&mut driver).await;
    let ids: Vec<u8> = driver.session().drawn().iter().map(|c| c.card.id).collect();
    assert_eq!(ids, vec![10, 11, 12]);
    assert_eq!(driver.session().narrative(), "second");
}

#[tokio::test]
async fn unreachable_service_still_reaches_reading() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = GeminiProvider::new("k", Duration::from_secs(5))
        .unwrap()
        .with_base_url(format!("http://{addr}"));
    let config = ReadingConfig::default()
        .with_settle_delay(Duration::from_millis(1))
        .with_collapse_delay(Duration::from_millis(1))
        .with_reveal_timing(arcana_core::RevealTiming::from_millis(1, 1, 1));
    let mut driver = ReadingDriver::new(config, Arc::new(provider));
    picked(&mut driver, [0, 1, 2]).await;

    run_reveal(&mut driver).await;
    assert_eq!(driver.session().phase(), Phase::Reading);
    assert_eq!(driver.session().narrative(), FALLBACK_UNAVAILABLE);
}
