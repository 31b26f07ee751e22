//! Spin engine: picks a wedge, animates toward it, reports once.

use crate::config::RouletteConfig;
use crate::core::easing::SPIN_EASE_OUT;
use crate::core::wheel::WedgeSet;
use crate::error::{MenuError, Result};
use parking_lot::Mutex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Identifier of a single spin
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpinId(Uuid);

impl SpinId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SpinId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SpinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of the two random draws a spin makes
pub trait SpinRandom: Send {
    /// Uniform index in `[0, len)`
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform number of full turns within `range`
    fn pick_rotations(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Thread-local RNG, no seeding contract
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl SpinRandom for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn pick_rotations(&mut self, range: RangeInclusive<u32>) -> u32 {
        rand::thread_rng().gen_range(range)
    }
}

/// Predetermined draws, cycled in order; out-of-range values are clamped
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    draws: Vec<(usize, u32)>,
    next: usize,
}

impl ScriptedRandom {
    /// Always draw `index` and `rotations`
    pub fn new(index: usize, rotations: u32) -> Self {
        Self::sequence(vec![(index, rotations)])
    }

    pub fn sequence(draws: Vec<(usize, u32)>) -> Self {
        Self { draws, next: 0 }
    }

    fn current(&self) -> (usize, u32) {
        if self.draws.is_empty() {
            (0, 0)
        } else {
            self.draws[self.next % self.draws.len()]
        }
    }
}

impl SpinRandom for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.current().0.min(len.saturating_sub(1))
    }

    fn pick_rotations(&mut self, range: RangeInclusive<u32>) -> u32 {
        let rotations = self.current().1.clamp(*range.start(), *range.end());
        self.next += 1;
        rotations
    }
}

/// Result of one spin
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub spin_id: SpinId,
    pub chosen_index: usize,
    pub rotations: u32,
    /// `360 * rotations - chosen_index * angle_per_wedge`
    pub total_rotation_degrees: f64,
}

/// Draw the winning wedge, then the number of full turns.
///
/// The turn count only affects the animation, never the winner.
pub fn draw_outcome(
    wheel: &WedgeSet,
    rng: &mut dyn SpinRandom,
    rotations: RangeInclusive<u32>,
) -> SpinOutcome {
    let chosen_index = rng.pick_index(wheel.len());
    let rotations = rng.pick_rotations(rotations);
    let total_rotation_degrees =
        360.0 * rotations as f64 - chosen_index as f64 * wheel.angle_per_wedge();

    SpinOutcome {
        spin_id: SpinId::new(),
        chosen_index,
        rotations,
        total_rotation_degrees,
    }
}

/// Visual sweep of one spin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinAnimation {
    pub start_angle: f64,
    pub end_angle: f64,
    pub duration: Duration,
    pub started_at: Instant,
}

impl SpinAnimation {
    /// Linear progress in `[0, 1]` after `elapsed`
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Wheel angle after `elapsed`, following the ease-out curve
    pub fn angle_after(&self, elapsed: Duration) -> f64 {
        let eased = SPIN_EASE_OUT.ease(self.progress(elapsed));
        self.start_angle + (self.end_angle - self.start_angle) * eased
    }

    /// Wheel angle at `now`
    pub fn angle_at(&self, now: Instant) -> f64 {
        self.angle_after(now.saturating_duration_since(self.started_at))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

/// Public view of the engine state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Spinning,
}

/// State of the spin button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinTrigger {
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Debug)]
enum SpinState {
    Idle,
    Spinning {
        id: SpinId,
        cancel: CancellationToken,
    },
}

#[derive(Debug)]
struct Shared {
    state: SpinState,
    completed: usize,
}

impl Shared {
    /// Leave `Spinning` for `id` as a completion; true only the first time
    fn complete(&mut self, id: SpinId) -> bool {
        match &self.state {
            SpinState::Spinning { id: current, .. } if *current == id => {
                self.state = SpinState::Idle;
                self.completed += 1;
                true
            }
            _ => false,
        }
    }

    /// Leave `Spinning` for `id` without an outcome
    fn cancel(&mut self, id: Option<SpinId>) -> bool {
        match &self.state {
            SpinState::Spinning { id: current, cancel }
                if id.is_none_or(|id| id == *current) =>
            {
                cancel.cancel();
                self.state = SpinState::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Handle to an in-flight spin.
///
/// The outcome arrives once the animation duration has elapsed, unless the
/// spin is cancelled first, in which case it never arrives.
#[derive(Debug)]
pub struct SpinHandle {
    id: SpinId,
    animation: SpinAnimation,
    shared: Arc<Mutex<Shared>>,
    outcome_rx: oneshot::Receiver<SpinOutcome>,
    task: JoinHandle<()>,
}

impl SpinHandle {
    pub fn id(&self) -> SpinId {
        self.id
    }

    pub fn animation(&self) -> &SpinAnimation {
        &self.animation
    }

    /// Cancel the spin; no outcome will be delivered for it
    pub fn cancel(&self) {
        if self.shared.lock().cancel(Some(self.id)) {
            tracing::debug!("Spin {} cancelled by handle", self.id);
        }
    }

    /// Non-blocking check for the outcome; yields it at most once
    pub fn try_outcome(&mut self) -> Option<SpinOutcome> {
        self.outcome_rx.try_recv().ok()
    }

    /// Wait for the outcome; `None` if the spin was cancelled
    pub async fn outcome(self) -> Option<SpinOutcome> {
        self.outcome_rx.await.ok()
    }

    /// Whether the completion task has finished, by completion or cancel
    pub fn is_settled(&self) -> bool {
        self.task.is_finished()
    }
}

/// Runs at most one spin at a time
pub struct SpinEngine {
    shared: Arc<Mutex<Shared>>,
    rng: Box<dyn SpinRandom>,
    duration: Duration,
    rotations: RangeInclusive<u32>,
    angle: f64,
}

impl fmt::Debug for SpinEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinEngine")
            .field("state", &self.state())
            .field("duration", &self.duration)
            .field("rotations", &self.rotations)
            .field("angle", &self.angle)
            .finish()
    }
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new(&RouletteConfig::default())
    }
}

impl SpinEngine {
    /// Engine drawing from the thread RNG
    pub fn new(config: &RouletteConfig) -> Self {
        Self::with_random(config, Box::new(ThreadRandom))
    }

    pub fn with_random(config: &RouletteConfig, rng: Box<dyn SpinRandom>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state: SpinState::Idle,
                completed: 0,
            })),
            rng,
            duration: config.spin_duration,
            rotations: config.rotation_range(),
            angle: 0.0,
        }
    }

    pub fn state(&self) -> EngineState {
        match self.shared.lock().state {
            SpinState::Idle => EngineState::Idle,
            SpinState::Spinning { .. } => EngineState::Spinning,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.state() == EngineState::Spinning
    }

    /// Angle the wheel rests at, or is heading to while spinning
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Spin button state: disabled while spinning, "Spin again" after a
    /// completed spin
    pub fn trigger(&self) -> SpinTrigger {
        let shared = self.shared.lock();
        match shared.state {
            SpinState::Spinning { .. } => SpinTrigger {
                enabled: false,
                label: "Spinning...",
            },
            SpinState::Idle if shared.completed > 0 => SpinTrigger {
                enabled: true,
                label: "Spin again",
            },
            SpinState::Idle => SpinTrigger {
                enabled: true,
                label: "Spin",
            },
        }
    }

    /// Start a spin against `wheel`.
    ///
    /// Fails with `NoWheel` for an absent or empty wheel and with
    /// `SpinInProgress` while another spin is in flight. Must be called from
    /// within a tokio runtime.
    pub fn spin(&mut self, wheel: Option<&WedgeSet>) -> Result<SpinHandle> {
        let wheel = wheel.filter(|w| !w.is_empty()).ok_or(MenuError::NoWheel)?;

        let mut shared = self.shared.lock();
        if matches!(shared.state, SpinState::Spinning { .. }) {
            return Err(MenuError::SpinInProgress);
        }

        let outcome = draw_outcome(wheel, self.rng.as_mut(), self.rotations.clone());
        let id = outcome.spin_id;
        let cancel = CancellationToken::new();
        shared.state = SpinState::Spinning {
            id,
            cancel: cancel.clone(),
        };
        drop(shared);

        // Settle from the last full turn so the sweep is always forward and
        // ends with the chosen wedge under the pointer.
        let base = (self.angle / 360.0).floor() * 360.0;
        let animation = SpinAnimation {
            start_angle: self.angle,
            end_angle: base + outcome.total_rotation_degrees,
            duration: self.duration,
            started_at: Instant::now(),
        };
        self.angle = animation.end_angle;

        tracing::debug!(
            "Spin {} started: index {} of {}, {} turns, {:.1}°",
            id,
            outcome.chosen_index,
            wheel.len(),
            outcome.rotations,
            outcome.total_rotation_degrees
        );

        let (outcome_tx, outcome_rx) = oneshot::channel();
        let shared = self.shared.clone();
        let duration = self.duration;
        let task = tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    shared.lock().cancel(Some(id));
                }
                _ = tokio::time::sleep(duration) => {
                    let completed = shared.lock().complete(id);
                    if completed {
                        tracing::debug!("Spin {} completed", id);
                        let _ = outcome_tx.send(outcome);
                    }
                }
            }
        });

        Ok(SpinHandle {
            id,
            animation,
            shared: self.shared.clone(),
            outcome_rx,
            task,
        })
    }

    /// Cancel the in-flight spin, if any. Returns whether one was cancelled.
    pub fn cancel(&self) -> bool {
        let cancelled = self.shared.lock().cancel(None);
        if cancelled {
            tracing::debug!("Spin cancelled");
        }
        cancelled
    }

    /// Cancel any spin and put the wheel back at rest at 0°
    pub fn reset(&mut self) {
        self.cancel();
        self.angle = 0.0;
    }
}

impl Drop for SpinEngine {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::core::aggregator::FlattenedDrink;

    fn wheel(count: usize) -> WedgeSet {
        let drinks: Vec<FlattenedDrink> = (0..count)
            .map(|i| FlattenedDrink {
                item: Item {
                    name: format!("Drink {i}"),
                    description: String::new(),
                    image: String::new(),
                    tags: None,
                },
                category_name: "Tea".into(),
                category_id: "tea".into(),
                subcategory_name: None,
                subcategory_id: None,
            })
            .collect();
        WedgeSet::build(&drinks).unwrap()
    }

    fn scripted(index: usize, rotations: u32) -> SpinEngine {
        SpinEngine::with_random(
            &RouletteConfig::default(),
            Box::new(ScriptedRandom::new(index, rotations)),
        )
    }

    #[test]
    fn test_draw_outcome_formula() {
        let wheel = wheel(5);
        let outcome = draw_outcome(&wheel, &mut ScriptedRandom::new(2, 4), 4..=6);

        assert_eq!(outcome.chosen_index, 2);
        assert_eq!(outcome.rotations, 4);
        assert!((outcome.total_rotation_degrees - 1296.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_bounds() {
        let wheel = wheel(8);
        let mut rng = ThreadRandom;
        for _ in 0..500 {
            let outcome = draw_outcome(&wheel, &mut rng, 4..=6);
            assert!((4..=6).contains(&outcome.rotations));
            let expected = 360.0 * outcome.rotations as f64 - outcome.chosen_index as f64 * 45.0;
            assert!((outcome.total_rotation_degrees - expected).abs() < 1e-9);
            // Never less than three full turns
            assert!(outcome.total_rotation_degrees > 360.0 * 3.0);
        }
    }

    #[test]
    fn test_chosen_index_is_uniform() {
        let wheel = wheel(4);
        let mut rng = ThreadRandom;
        let trials = 4000;
        let mut counts = [0usize; 4];
        for _ in 0..trials {
            counts[draw_outcome(&wheel, &mut rng, 4..=6).chosen_index] += 1;
        }

        let expected = trials as f64 / 4.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| (observed as f64 - expected).powi(2) / expected)
            .sum();
        // df = 3, p = 0.001
        assert!(chi_square < 16.27, "chi-square {chi_square} for {counts:?}");
    }

    #[test]
    fn test_scripted_random_clamps() {
        let mut rng = ScriptedRandom::new(9, 10);
        assert_eq!(rng.pick_index(3), 2);
        assert_eq!(rng.pick_rotations(4..=6), 6);
    }

    #[test]
    fn test_animation_curve() {
        let animation = SpinAnimation {
            start_angle: 100.0,
            end_angle: 1000.0,
            duration: Duration::from_millis(4000),
            started_at: Instant::now(),
        };

        assert_eq!(animation.angle_after(Duration::ZERO), 100.0);
        assert_eq!(animation.angle_after(Duration::from_millis(4000)), 1000.0);
        assert_eq!(animation.angle_after(Duration::from_millis(9000)), 1000.0);

        let mut previous = animation.start_angle;
        for ms in (0..=4000).step_by(100) {
            let angle = animation.angle_after(Duration::from_millis(ms));
            assert!(angle >= previous);
            previous = angle;
        }
    }

    #[tokio::test]
    async fn test_no_wheel() {
        let mut engine = SpinEngine::default();
        assert!(matches!(engine.spin(None), Err(MenuError::NoWheel)));
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spin_completes_once() {
        let wheel = wheel(5);
        let mut engine = scripted(2, 4);
        assert_eq!(engine.trigger().label, "Spin");

        let handle = engine.spin(Some(&wheel)).unwrap();
        assert_eq!(engine.state(), EngineState::Spinning);
        assert!(!engine.trigger().enabled);
        assert_eq!(handle.animation().start_angle, 0.0);
        assert_eq!(handle.animation().end_angle, 1296.0);

        let outcome = handle.outcome().await.unwrap();
        assert_eq!(outcome.chosen_index, 2);
        assert_eq!(outcome.total_rotation_degrees, 1296.0);
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.trigger(), SpinTrigger {
            enabled: true,
            label: "Spin again"
        });
        assert_eq!(wheel.wedge_at_pointer(engine.angle()), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_outcome_not_delivered_before_duration() {
        let wheel = wheel(3);
        let mut engine = scripted(1, 5);
        let mut handle = engine.spin(Some(&wheel)).unwrap();

        tokio::time::sleep(Duration::from_millis(3999)).await;
        assert!(handle.try_outcome().is_none());
        assert!(engine.is_spinning());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(handle.try_outcome().map(|o| o.chosen_index), Some(1));
        // Delivered only once
        assert!(handle.try_outcome().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_spin_is_rejected() {
        let wheel = wheel(4);
        let mut engine = scripted(3, 6);

        let first = engine.spin(Some(&wheel)).unwrap();
        let first_end = first.animation().end_angle;

        let second = engine.spin(Some(&wheel));
        assert!(matches!(second, Err(MenuError::SpinInProgress)));
        // The rejected request does not move the wheel target
        assert_eq!(engine.angle(), first_end);

        let outcome = first.outcome().await.unwrap();
        assert_eq!(outcome.chosen_index, 3);
        assert_eq!(outcome.rotations, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_turn_config_still_spins_forward() {
        let wheel = wheel(4);
        let config = RouletteConfig {
            rotations: 0..=0,
            ..Default::default()
        };
        let mut engine = SpinEngine::with_random(&config, Box::new(ScriptedRandom::new(1, 0)));

        let handle = engine.spin(Some(&wheel)).unwrap();
        let animation = *handle.animation();
        assert!(animation.end_angle > animation.start_angle);

        let outcome = handle.outcome().await.unwrap();
        assert_eq!(outcome.rotations, 1);
        assert_eq!(outcome.total_rotation_degrees, 270.0);
        assert_eq!(wheel.wedge_at_pointer(engine.angle()), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_successive_spins_move_forward() {
        let wheel = wheel(6);
        let mut engine = SpinEngine::with_random(
            &RouletteConfig::default(),
            Box::new(ScriptedRandom::sequence(vec![(5, 4), (0, 4), (3, 6)])),
        );

        for expected in [5, 0, 3] {
            let handle = engine.spin(Some(&wheel)).unwrap();
            let animation = *handle.animation();
            assert!(animation.end_angle > animation.start_angle + 360.0 * 2.0);

            let outcome = handle.outcome().await.unwrap();
            assert_eq!(outcome.chosen_index, expected);
            assert_eq!(wheel.wedge_at_pointer(engine.angle()), expected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_outcome() {
        let wheel = wheel(4);
        let mut engine = scripted(0, 4);
        let handle = engine.spin(Some(&wheel)).unwrap();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(engine.cancel());
        assert_eq!(engine.state(), EngineState::Idle);
        // The trigger does not claim a completed spin
        assert_eq!(engine.trigger().label, "Spin");

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(handle.outcome().await.is_none());
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_cancel() {
        let wheel = wheel(2);
        let mut engine = scripted(1, 4);
        let handle = engine.spin(Some(&wheel)).unwrap();

        handle.cancel();
        assert_eq!(engine.state(), EngineState::Idle);
        assert!(handle.outcome().await.is_none());

        // A new spin can start right away
        assert!(engine.spin(Some(&wheel)).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_completion_is_ignored() {
        let wheel = wheel(2);
        let mut engine = scripted(0, 4);

        let stale = engine.spin(Some(&wheel)).unwrap();
        engine.cancel();
        let fresh = engine.spin(Some(&wheel)).unwrap();

        // The first timer may not complete the second spin
        assert!(!engine.shared.lock().complete(stale.id()));
        assert!(engine.is_spinning());

        assert!(stale.outcome().await.is_none());
        assert!(fresh.outcome().await.is_some());
    }
}
