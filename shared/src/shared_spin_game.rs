use rand::Rng;
use thiserror::Error;

use crate::constants::{RECENT_EXCLUSION_COUNT, RESULT_AT_MS, STEP_THREE_AT_MS, STEP_TWO_AT_MS};
use crate::selection::{record_recent, select_species};
use crate::species::{NonEmptySpecies, Species};

/// The three cosmetic phases of a spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpinStep {
    One,
    Two,
    Three,
}

impl SpinStep {
    pub const ALL: [SpinStep; 3] = [SpinStep::One, SpinStep::Two, SpinStep::Three];

    pub fn number(self) -> u8 {
        match self {
            SpinStep::One => 1,
            SpinStep::Two => 2,
            SpinStep::Three => 3,
        }
    }

    pub fn next(self) -> Option<SpinStep> {
        match self {
            SpinStep::One => Some(SpinStep::Two),
            SpinStep::Two => Some(SpinStep::Three),
            SpinStep::Three => None,
        }
    }

    /// Scanning message shown while this step is active.
    pub fn message(self) -> &'static str {
        match self {
            SpinStep::One => "👆 Lecture de l'empreinte digitale...",
            SpinStep::Two => "🧫 Récupération de l'ADN...",
            SpinStep::Three => "🔬 Analyse de l'ADN...",
        }
    }

    /// Colour of this step's progress dot once reached.
    pub fn color(self) -> &'static str {
        match self {
            SpinStep::One => "#A78BFA",
            SpinStep::Two => "#22D3EE",
            SpinStep::Three => "#F472B6",
        }
    }
}

pub const INACTIVE_STEP_COLOR: &str = "#334155";

#[derive(Debug, Clone, PartialEq)]
pub enum GamePhase {
    Idle,
    Spinning(SpinStep),
    Result(Species),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimingError {
    #[error("spin offsets must be greater than zero")]
    ZeroOffset,
    #[error("spin offsets must strictly increase (got {0}ms, {1}ms, {2}ms)")]
    NotIncreasing(u32, u32, u32),
}

/// Offsets of the timed transitions, measured from the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTiming {
    step_two_at_ms: u32,
    step_three_at_ms: u32,
    result_at_ms: u32,
}

impl SpinTiming {
    pub fn new(step_two_at_ms: u32, step_three_at_ms: u32, result_at_ms: u32) -> Result<Self, TimingError> {
        if step_two_at_ms == 0 {
            return Err(TimingError::ZeroOffset);
        }
        if !(step_two_at_ms < step_three_at_ms && step_three_at_ms < result_at_ms) {
            return Err(TimingError::NotIncreasing(step_two_at_ms, step_three_at_ms, result_at_ms));
        }
        Ok(Self { step_two_at_ms, step_three_at_ms, result_at_ms })
    }

    pub fn total_ms(&self) -> u32 {
        self.result_at_ms
    }
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            step_two_at_ms: STEP_TWO_AT_MS,
            step_three_at_ms: STEP_THREE_AT_MS,
            result_at_ms: RESULT_AT_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    AdvanceTo(SpinStep),
    Complete,
}

/// A transition to fire `at_ms` after the trigger of spin `spin_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub spin_id: u64,
    pub at_ms: u32,
    pub event: SpinEvent,
}

/// Every timed transition of one spin, in firing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinSchedule {
    pub spin_id: u64,
    events: [ScheduledEvent; 3],
}

impl SpinSchedule {
    fn new(spin_id: u64, timing: &SpinTiming) -> Self {
        let at = |at_ms, event| ScheduledEvent { spin_id, at_ms, event };
        Self {
            spin_id,
            events: [
                at(timing.step_two_at_ms, SpinEvent::AdvanceTo(SpinStep::Two)),
                at(timing.step_three_at_ms, SpinEvent::AdvanceTo(SpinStep::Three)),
                at(timing.result_at_ms, SpinEvent::Complete),
            ],
        }
    }

    pub fn events(&self) -> &[ScheduledEvent] {
        &self.events
    }
}

/// Session state of the roulette: current phase plus the recently shown species.
#[derive(Debug, Clone)]
pub struct SpinGame {
    phase: GamePhase,
    recent: Vec<u32>,
    recent_limit: usize,
    timing: SpinTiming,
    spin_id: u64,
}

impl SpinGame {
    pub fn new(timing: SpinTiming) -> Self {
        Self {
            phase: GamePhase::Idle,
            recent: Vec::with_capacity(RECENT_EXCLUSION_COUNT),
            recent_limit: RECENT_EXCLUSION_COUNT,
            timing,
            spin_id: 0,
        }
    }

    pub fn with_recent_limit(mut self, recent_limit: usize) -> Self {
        self.recent_limit = recent_limit;
        self.recent.truncate(recent_limit);
        self
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn recent(&self) -> &[u32] {
        &self.recent
    }

    pub fn timing(&self) -> &SpinTiming {
        &self.timing
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, GamePhase::Spinning(_))
    }

    pub fn current_step(&self) -> Option<SpinStep> {
        match self.phase {
            GamePhase::Spinning(step) => Some(step),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<&Species> {
        match &self.phase {
            GamePhase::Result(species) => Some(species),
            _ => None,
        }
    }

    /// Starts a spin from Idle and returns the transitions the caller must arm.
    /// Any other phase ignores the trigger.
    pub fn trigger(&mut self) -> Option<SpinSchedule> {
        if self.phase != GamePhase::Idle {
            log::debug!("Ignoring spin trigger while in {:?}", self.phase);
            return None;
        }
        self.spin_id += 1;
        self.phase = GamePhase::Spinning(SpinStep::One);
        log::info!("Spin {} started", self.spin_id);
        Some(SpinSchedule::new(self.spin_id, &self.timing))
    }

    /// Applies a timed transition. Returns false when the event is stale
    /// (older spin, or out of step with the current phase) and was dropped.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        scheduled: &ScheduledEvent,
        dataset: &NonEmptySpecies,
        rng: &mut R,
    ) -> bool {
        if scheduled.spin_id != self.spin_id {
            log::debug!("Dropping event of spin {} (current {})", scheduled.spin_id, self.spin_id);
            return false;
        }
        match scheduled.event {
            SpinEvent::AdvanceTo(step) => self.advance(step),
            SpinEvent::Complete => self.complete(dataset, rng).is_some(),
        }
    }

    fn advance(&mut self, step: SpinStep) -> bool {
        match self.current_step() {
            Some(current) if current.next() == Some(step) => {
                self.phase = GamePhase::Spinning(step);
                log::debug!("Spin {} reached step {}", self.spin_id, step.number());
                true
            }
            _ => {
                log::debug!("Dropping advance to step {} while in {:?}", step.number(), self.phase);
                false
            }
        }
    }

    fn complete<R: Rng + ?Sized>(&mut self, dataset: &NonEmptySpecies, rng: &mut R) -> Option<&Species> {
        if self.current_step() != Some(SpinStep::Three) {
            log::debug!("Dropping completion while in {:?}", self.phase);
            return None;
        }
        let species = select_species(dataset, &self.recent, rng).clone();
        self.recent = record_recent(&self.recent, species.id, self.recent_limit);
        log::info!("Spin {} landed on {} ({}%)", self.spin_id, species.name, species.percentage);
        self.phase = GamePhase::Result(species);
        self.selected()
    }

    /// Returns to Idle from any phase. Events still pending for the
    /// interrupted spin become stale. The recent list is kept.
    pub fn reset(&mut self) {
        if self.is_spinning() {
            // invalidate the in-flight schedule
            self.spin_id += 1;
        }
        self.phase = GamePhase::Idle;
    }
}

impl Default for SpinGame {
    fn default() -> Self {
        Self::new(SpinTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::test_species;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dataset(ids: &[u32]) -> NonEmptySpecies {
        NonEmptySpecies::new(ids.iter().map(|&id| test_species(id)).collect()).unwrap()
    }

    /// Fires every event of the schedule in order, recording the phase after each.
    fn run(game: &mut SpinGame, schedule: &SpinSchedule, dataset: &NonEmptySpecies, rng: &mut StdRng) -> Vec<(u32, GamePhase)> {
        schedule
            .events()
            .iter()
            .map(|event| {
                assert!(game.apply(event, dataset, rng));
                (event.at_ms, game.phase().clone())
            })
            .collect()
    }

    #[test]
    fn test_spin_walks_through_steps_to_result() {
        let dataset = dataset(&[1, 2, 3, 4, 5, 6, 7]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = SpinGame::default();

        let schedule = game.trigger().expect("idle game should start spinning");
        assert_eq!(game.phase(), &GamePhase::Spinning(SpinStep::One));

        let trace = run(&mut game, &schedule, &dataset, &mut rng);
        assert_eq!(trace[0], (2000, GamePhase::Spinning(SpinStep::Two)));
        assert_eq!(trace[1], (4000, GamePhase::Spinning(SpinStep::Three)));
        assert_eq!(trace[2].0, game.timing().total_ms());
        assert!(matches!(trace[2].1, GamePhase::Result(_)));

        let selected = game.selected().unwrap().id;
        assert_eq!(game.recent(), &[selected]);
    }

    #[test]
    fn test_schedule_offsets_strictly_increase() {
        let mut game = SpinGame::new(SpinTiming::new(100, 250, 900).unwrap());
        let schedule = game.trigger().unwrap();
        let offsets: Vec<u32> = schedule.events().iter().map(|e| e.at_ms).collect();
        assert_eq!(offsets, vec![100, 250, 900]);
        assert!(schedule.events().iter().all(|e| e.spin_id == schedule.spin_id));
    }

    #[test]
    fn test_trigger_while_spinning_is_a_no_op() {
        let dataset = dataset(&[1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = SpinGame::default();
        let schedule = game.trigger().unwrap();

        assert!(game.apply(&schedule.events()[0], &dataset, &mut rng));
        assert!(game.trigger().is_none());
        assert_eq!(game.phase(), &GamePhase::Spinning(SpinStep::Two));

        // the original sequence carries on untouched
        assert!(game.apply(&schedule.events()[1], &dataset, &mut rng));
        assert!(game.apply(&schedule.events()[2], &dataset, &mut rng));
        assert!(game.selected().is_some());
        assert_eq!(game.recent().len(), 1);
    }

    #[test]
    fn test_trigger_from_result_is_ignored() {
        let dataset = dataset(&[1, 2]);
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = SpinGame::default();
        let schedule = game.trigger().unwrap();
        run(&mut game, &schedule, &dataset, &mut rng);
        assert!(game.trigger().is_none());
        assert!(game.selected().is_some());
    }

    #[test]
    fn test_reset_from_result_returns_to_idle() {
        let dataset = dataset(&[1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = SpinGame::default();
        let schedule = game.trigger().unwrap();
        run(&mut game, &schedule, &dataset, &mut rng);

        game.reset();
        assert_eq!(game.phase(), &GamePhase::Idle);
        assert!(game.selected().is_none());
        assert_eq!(game.recent().len(), 1);
    }

    #[test]
    fn test_events_from_cancelled_spin_are_dropped() {
        let dataset = dataset(&[1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = SpinGame::default();
        let stale = game.trigger().unwrap();
        game.reset();

        for event in stale.events() {
            assert!(!game.apply(event, &dataset, &mut rng));
        }
        assert_eq!(game.phase(), &GamePhase::Idle);
        assert!(game.recent().is_empty());

        let fresh = game.trigger().unwrap();
        assert_ne!(fresh.spin_id, stale.spin_id);
        assert!(!game.apply(&stale.events()[0], &dataset, &mut rng));
        assert_eq!(game.phase(), &GamePhase::Spinning(SpinStep::One));
    }

    #[test]
    fn test_out_of_order_events_are_dropped() {
        let dataset = dataset(&[1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = SpinGame::default();
        let schedule = game.trigger().unwrap();

        assert!(!game.apply(&schedule.events()[2], &dataset, &mut rng));
        assert!(!game.apply(&schedule.events()[1], &dataset, &mut rng));
        assert_eq!(game.phase(), &GamePhase::Spinning(SpinStep::One));
    }

    #[test]
    fn test_consecutive_spins_avoid_recent_species() {
        let dataset = dataset(&[1, 2, 3, 4, 5, 6]);
        let mut rng = StdRng::seed_from_u64(21);
        let mut game = SpinGame::default();
        let mut history = Vec::new();

        for _ in 0..6 {
            let schedule = game.trigger().unwrap();
            run(&mut game, &schedule, &dataset, &mut rng);
            history.push(game.selected().unwrap().id);
            game.reset();
        }

        // with 6 species and a window of 5, the first six spins are all distinct
        let mut unique = history.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 6);
        assert_eq!(game.recent().len(), RECENT_EXCLUSION_COUNT);
    }

    #[test]
    fn test_recent_window_larger_than_dataset_still_selects() {
        let dataset = dataset(&[1, 2]);
        let mut rng = StdRng::seed_from_u64(8);
        let mut game = SpinGame::default();
        for _ in 0..10 {
            let schedule = game.trigger().unwrap();
            run(&mut game, &schedule, &dataset, &mut rng);
            assert!(dataset.get(game.selected().unwrap().id).is_some());
            game.reset();
        }
        assert!(game.recent().len() <= RECENT_EXCLUSION_COUNT);
    }

    #[test]
    fn test_custom_recent_limit() {
        let dataset = dataset(&[1, 2]);
        let mut rng = StdRng::seed_from_u64(13);
        let mut game = SpinGame::default().with_recent_limit(1);
        let mut previous = None;
        for _ in 0..10 {
            let schedule = game.trigger().unwrap();
            run(&mut game, &schedule, &dataset, &mut rng);
            let id = game.selected().unwrap().id;
            // a window of one with two species alternates strictly
            assert_ne!(Some(id), previous);
            previous = Some(id);
            assert_eq!(game.recent(), &[id]);
            game.reset();
        }
    }

    #[test]
    fn test_timing_validation() {
        assert_eq!(SpinTiming::new(0, 1, 2), Err(TimingError::ZeroOffset));
        assert_eq!(SpinTiming::new(5, 5, 6), Err(TimingError::NotIncreasing(5, 5, 6)));
        assert_eq!(SpinTiming::new(3, 2, 6), Err(TimingError::NotIncreasing(3, 2, 6)));
        assert_eq!(SpinTiming::default().total_ms(), 6000);
    }

    #[test]
    fn test_step_order() {
        assert_eq!(SpinStep::One.next(), Some(SpinStep::Two));
        assert_eq!(SpinStep::Three.next(), None);
        assert!(SpinStep::One < SpinStep::Three);
    }
}
