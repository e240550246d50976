//! Spin controller and the background animation task.
//!
//! `SpinController::spin` starts a tokio task that ticks through the
//! animation, draws the result and then waits for the view to acknowledge
//! it.  The task never touches UI state directly: it reports `SpinUpdate`s
//! over a channel and the main loop feeds them back through
//! `SpinController::apply`, which drives the state machine and the view.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;

use super::view::{Acknowledgement, InlineText, Trigger, WheelView};
use crate::config::{AnimationConfig, Labels, WheelConfig};
use crate::core::catalog::{Catalog, Entry};
use crate::core::wheel::{select_entry, WheelError, WheelState};

/// Progress reported by a running spin.
#[derive(Debug)]
pub enum SpinUpdate {
    /// Animation step `step` (0-based) elapsed.
    Step { step: u32 },
    /// The animation is over and `entry` was drawn.
    Landed { entry: Entry, ack: Acknowledgement },
    /// The result was acknowledged.
    Finished,
}

/// A spin update tagged with the spin generation that produced it.
pub type SpinMessage = (u64, SpinUpdate);

pub struct SpinController {
    catalog: Arc<Catalog>,
    animation: AnimationConfig,
    labels: Labels,
    wheel: WheelState,
    rng: StdRng,
    tx: mpsc::UnboundedSender<SpinMessage>,
    /// Monotonic id of the current spin; updates from older spins are dropped.
    generation: u64,
}

impl SpinController {
    pub fn new(
        catalog: Arc<Catalog>,
        config: &WheelConfig,
        tx: mpsc::UnboundedSender<SpinMessage>,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            animation: config.animation,
            labels: config.labels.clone(),
            wheel: WheelState::new(),
            rng,
            tx,
            generation: 0,
        }
    }

    pub fn wheel(&self) -> &WheelState {
        &self.wheel
    }

    /// Start a spin.  `Ok(false)` means one is already running and the
    /// request was ignored.  An empty catalog is reported to the view and
    /// returned as `EmptyCatalog`.
    pub fn spin(&mut self, view: &mut impl WheelView) -> Result<bool, WheelError> {
        match self.wheel.begin_spin(&self.catalog) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("spin ignored: already {:?}", self.wheel.phase());
                return Ok(false);
            }
            Err(err) => {
                view.show_text(InlineText::error(err.to_string()));
                return Err(err);
            }
        }

        self.generation = self.generation.wrapping_add(1);
        tracing::info!(generation = self.generation, "spin started");

        view.set_trigger(Trigger::busy(self.labels.trigger_busy));
        view.show_text(InlineText::status(self.labels.spin_started));

        let rng = StdRng::from_rng(&mut self.rng);
        tokio::spawn(run_spin(
            self.generation,
            Arc::clone(&self.catalog),
            self.animation,
            rng,
            self.tx.clone(),
        ));
        Ok(true)
    }

    /// Apply one update from the spin task.
    pub fn apply(
        &mut self,
        generation: u64,
        update: SpinUpdate,
        view: &mut impl WheelView,
    ) -> Result<(), WheelError> {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "stale spin update");
            return Ok(());
        }
        match update {
            SpinUpdate::Step { step } => {
                self.wheel.advance()?;
                view.show_text(InlineText::status(self.labels.spin_frame(step)));
            }
            SpinUpdate::Landed { entry, ack } => {
                self.wheel.land(entry.clone())?;
                tracing::info!(team = %entry.label, color = %entry.color, "wheel landed");
                view.show_text(InlineText::result(&entry));
                view.present(&entry, ack);
            }
            SpinUpdate::Finished => {
                self.wheel.finish()?;
                tracing::debug!(spins = self.wheel.completed_spins(), "spin finished");
                view.set_trigger(Trigger::ready(self.labels.trigger_again));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
impl SpinController {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Body of the spin task.
///
/// Returns quietly as soon as the other side goes away: a closed channel or
/// a dropped acknowledgement means the screen is gone and nobody is waiting.
pub async fn run_spin<R: Rng + Send>(
    generation: u64,
    catalog: Arc<Catalog>,
    animation: AnimationConfig,
    mut rng: R,
    tx: mpsc::UnboundedSender<SpinMessage>,
) {
    for step in 0..animation.steps {
        tokio::time::sleep(animation.step_delay).await;
        tracing::trace!(generation, step, "spin step");
        if tx.send((generation, SpinUpdate::Step { step })).is_err() {
            return;
        }
    }

    let entry = match select_entry(&catalog, &mut rng) {
        Ok(entry) => entry.clone(),
        Err(err) => {
            tracing::warn!(generation, "spin aborted: {err}");
            return;
        }
    };

    let (ack, acknowledged) = Acknowledgement::new();
    if tx.send((generation, SpinUpdate::Landed { entry, ack })).is_err() {
        return;
    }
    if acknowledged.await.is_err() {
        tracing::debug!(generation, "result popup closed without acknowledgement");
        return;
    }
    let _ = tx.send((generation, SpinUpdate::Finished));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::TextKind;
    use crate::core::wheel::Phase;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::time::Duration;

    /// Records everything the controller asks the view to do.
    #[derive(Default)]
    struct RecordingView {
        texts: Vec<InlineText>,
        trigger: Option<Trigger>,
        presented: Vec<Entry>,
        pending: Option<Acknowledgement>,
    }

    impl WheelView for RecordingView {
        fn show_text(&mut self, text: InlineText) {
            self.texts.push(text);
        }

        fn set_trigger(&mut self, trigger: Trigger) {
            self.trigger = Some(trigger);
        }

        fn present(&mut self, entry: &Entry, ack: Acknowledgement) {
            self.presented.push(entry.clone());
            self.pending = Some(ack);
        }
    }

    fn controller(
        catalog: Catalog,
        seed: u64,
    ) -> (SpinController, mpsc::UnboundedReceiver<SpinMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = WheelConfig {
            seed: Some(seed),
            ..WheelConfig::default()
        };
        (SpinController::new(Arc::new(catalog), &config, tx), rx)
    }

    /// Pump updates until the spin finishes, dismissing the popup when shown.
    async fn drive_to_completion(
        ctl: &mut SpinController,
        rx: &mut mpsc::UnboundedReceiver<SpinMessage>,
        view: &mut RecordingView,
    ) {
        while let Some((generation, update)) = rx.recv().await {
            let finished = matches!(update, SpinUpdate::Finished);
            ctl.apply(generation, update, view).unwrap();
            if let Some(ack) = view.pending.take() {
                ack.dismiss();
            }
            if finished {
                break;
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn completed_spin_shows_result_and_rearms_trigger() {
        let (mut ctl, mut rx) = controller(Catalog::nba(), 11);
        let mut view = RecordingView::default();

        assert_eq!(ctl.spin(&mut view), Ok(true));
        assert_eq!(view.trigger, Some(Trigger::busy("Spinning...")));
        assert_eq!(view.texts[0], InlineText::status("🎯 Spinning the wheel... 🎯"));

        drive_to_completion(&mut ctl, &mut rx, &mut view).await;

        assert_eq!(ctl.wheel().phase(), Phase::Idle);
        let result = ctl.wheel().last_result().cloned().unwrap();
        assert!(ctl.catalog().contains(&result));
        assert_eq!(view.presented, vec![result.clone()]);

        let last = view.texts.last().unwrap();
        assert_eq!(last.kind, TextKind::Result);
        assert_eq!(last.text, result.label);
        assert_eq!(last.color, Some(result.color));
        assert_eq!(view.trigger, Some(Trigger::ready("🎯 SPIN AGAIN! 🎯")));
    }

    #[tokio::test(start_paused = true)]
    async fn animation_alternates_status_for_every_step() {
        let (mut ctl, mut rx) = controller(Catalog::nba(), 5);
        let mut view = RecordingView::default();
        ctl.spin(&mut view).unwrap();
        drive_to_completion(&mut ctl, &mut rx, &mut view).await;

        // Opening status + 20 frames + result.
        assert_eq!(view.texts.len(), 22);
        let frames: Vec<&str> = view.texts[1..21].iter().map(|t| t.text.as_str()).collect();
        for (i, frame) in frames.iter().enumerate() {
            let expected = if i % 2 == 0 {
                "🎯 Spinning... 🎯"
            } else {
                "🎯 ... Spinning ... 🎯"
            };
            assert_eq!(*frame, expected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn animation_takes_steps_times_delay() {
        let (mut ctl, mut rx) = controller(Catalog::nba(), 5);
        let mut view = RecordingView::default();
        let start = tokio::time::Instant::now();
        ctl.spin(&mut view).unwrap();

        loop {
            let (generation, update) = rx.recv().await.unwrap();
            let landed = matches!(update, SpinUpdate::Landed { .. });
            ctl.apply(generation, update, &mut view).unwrap();
            if landed {
                break;
            }
        }
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(2000), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(2100), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn second_spin_while_running_is_ignored() {
        let (mut ctl, mut rx) = controller(Catalog::nba(), 9);
        let mut view = RecordingView::default();
        assert_eq!(ctl.spin(&mut view), Ok(true));
        assert_eq!(ctl.spin(&mut view), Ok(false));

        drive_to_completion(&mut ctl, &mut rx, &mut view).await;
        assert_eq!(view.presented.len(), 1);
        assert_eq!(ctl.wheel().completed_spins(), 1);

        // Nothing else is queued: the ignored request spawned no task.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn spin_is_ignored_while_popup_is_up() {
        let (mut ctl, mut rx) = controller(Catalog::nba(), 9);
        let mut view = RecordingView::default();
        ctl.spin(&mut view).unwrap();

        loop {
            let (generation, update) = rx.recv().await.unwrap();
            ctl.apply(generation, update, &mut view).unwrap();
            if view.pending.is_some() {
                break;
            }
        }
        assert_eq!(ctl.wheel().phase(), Phase::Selecting);
        assert_eq!(ctl.spin(&mut view), Ok(false));

        if let Some(ack) = view.pending.take() {
            ack.dismiss();
        }
        let (generation, update) = rx.recv().await.unwrap();
        assert!(matches!(update, SpinUpdate::Finished));
        ctl.apply(generation, update, &mut view).unwrap();
        assert_eq!(ctl.wheel().phase(), Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_spins_draw_with_replacement() {
        let (mut ctl, mut rx) = controller(Catalog::nba(), 2024);
        let mut view = RecordingView::default();
        for _ in 0..40 {
            assert_eq!(ctl.spin(&mut view), Ok(true));
            drive_to_completion(&mut ctl, &mut rx, &mut view).await;
        }
        assert_eq!(ctl.wheel().completed_spins(), 40);
        let distinct: HashSet<&str> = view.presented.iter().map(|e| e.label.as_str()).collect();
        assert!(distinct.len() < view.presented.len());
        assert!(view.presented.iter().all(|e| ctl.catalog().contains(e)));
    }

    #[tokio::test]
    async fn empty_catalog_fails_explicitly() {
        let (mut ctl, mut rx) = controller(Catalog::default(), 1);
        let mut view = RecordingView::default();
        assert_eq!(ctl.spin(&mut view), Err(WheelError::EmptyCatalog));
        assert_eq!(ctl.wheel().phase(), Phase::Idle);
        assert_eq!(view.trigger, None);
        assert_eq!(view.texts.last().map(|t| t.kind), Some(TextKind::Error));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_acknowledgement_abandons_spin() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_spin(
            1,
            Arc::new(Catalog::nba()),
            AnimationConfig::default(),
            StdRng::seed_from_u64(3),
            tx,
        ));

        let mut landed = None;
        while let Some((_, update)) = rx.recv().await {
            if let SpinUpdate::Landed { ack, .. } = update {
                landed = Some(ack);
                break;
            }
        }
        drop(landed.expect("spin should land"));

        task.await.unwrap();
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn closed_channel_stops_animation() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        run_spin(
            1,
            Arc::new(Catalog::nba()),
            AnimationConfig::default(),
            StdRng::seed_from_u64(3),
            tx,
        )
        .await;
    }

    #[test]
    fn stale_generations_are_ignored() {
        let (mut ctl, _rx) = controller(Catalog::nba(), 1);
        let mut view = RecordingView::default();
        ctl.apply(7, SpinUpdate::Step { step: 0 }, &mut view).unwrap();
        assert!(view.texts.is_empty());
        assert_eq!(ctl.wheel().phase(), Phase::Idle);
    }
}
