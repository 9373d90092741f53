// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuropet Engine
//!
//! Single owner of every component. All mutation happens through `&mut self`
//! calls made by one control loop; other threads only ever see
//! [`Snapshot`] copies.
//!
//! ## Gesture handling
//!
//! | Gesture | Feed button | Pet button |
//! |---------|-------------|------------|
//! | Short   | one feed    | one pet    |
//! | Long    | two feeds   | two pets   |
//! | Double  | no effect, still logged and rewarded | same |
//!
//! Every gesture clears the ignore period, is logged with the current
//! output, and queues rewards: the matching ask action if the pet was
//! asking for it, then `Happy`.

use std::collections::VecDeque;

use neuropet_npu_inference::{InferenceEngine, Strategy};
use neuropet_npu_plasticity::RewardLearner;
use neuropet_sensorimotor::{FeatureEncoder, GestureDetector, TimeOfDay};
use neuropet_serialization::{export_json, ModelMeta};
use neuropet_state_manager::{
    InteractionKind, InteractionTracker, InteractionWindow, PetStats, StateSimulator,
};
use neuropet_structures::{
    Action, ButtonEvent, ButtonId, EventLog, Features, Gesture, InputEvent, InteractionStats,
    LogEntry, Output, PetState, BUTTON_COUNT,
};

use crate::config::EngineConfig;
use crate::error::{PersistenceError, Result};
use crate::events::EngineEvent;
use crate::scheduler::Scheduler;
use crate::snapshot::{Snapshot, SnapshotHandle};
use crate::store::{PetStore, StoreResult, StoredBias};

/// Oldest notifications are dropped past this many undrained events
const MAX_PENDING_EVENTS: usize = 64;

fn load_or_default<T: Default>(result: StoreResult<T>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(PersistenceError::NotFound(_)) => {
            tracing::info!(target: "neuropet-runtime", "No saved {}, using defaults", what);
            T::default()
        }
        Err(e) => {
            tracing::warn!(
                target: "neuropet-runtime",
                "Could not load {} ({}), using defaults",
                what,
                e
            );
            T::default()
        }
    }
}

pub struct NeuropetEngine<S: PetStore> {
    store: S,
    config: EngineConfig,

    gestures: GestureDetector,
    simulator: StateSimulator,
    tracker: InteractionTracker,
    window: InteractionWindow,
    encoder: FeatureEncoder,
    inference: InferenceEngine,
    learner: RewardLearner,
    log: EventLog,
    clock: TimeOfDay,

    state: PetState,
    stats: InteractionStats,
    pet_stats: PetStats,
    features: Features,
    output: Output,
    last_tick_ms: u64,

    events: VecDeque<EngineEvent>,
    snapshot: SnapshotHandle,
}

impl<S: PetStore> NeuropetEngine<S> {
    /// Build the engine from whatever `store` holds, substituting defaults
    /// for anything missing or unreadable.
    ///
    /// # Errors
    ///
    /// Only invalid configuration (a zero event-log capacity) is fatal.
    pub fn start(mut store: S, config: EngineConfig, now_ms: u64) -> Result<Self> {
        let log = EventLog::with_capacity(config.event_log_capacity)?;

        let state = load_or_default(store.load_state(), "pet state");

        // ms-since-boot timestamps are meaningless after a restart; only the
        // spam score carries over
        let saved_stats = load_or_default(store.load_interaction_stats(), "interaction stats");
        let stats = InteractionStats {
            spam_score: saved_stats.spam_score,
            ..InteractionStats::default()
        };

        let mut pet_stats = load_or_default(store.load_pet_stats(), "pet stats");
        pet_stats.record_boot();
        if let Err(e) = store.save_pet_stats(&pet_stats) {
            tracing::warn!(target: "neuropet-runtime", "Could not record boot: {}", e);
        }

        let mut learner = RewardLearner::new(config.learner);
        let saved_bias = load_or_default(store.load_bias(), "learned biases");
        learner.restore(saved_bias.bias, saved_bias.total_rewards);

        let offset = load_or_default(store.load_time_offset(), "time offset");
        let clock = TimeOfDay::with_offset(now_ms, offset);

        let mut inference = InferenceEngine::new();
        match store.load_model() {
            Ok((blob, meta)) => {
                if let Err(e) = inference.load_weights(&blob) {
                    tracing::warn!(
                        target: "neuropet-runtime",
                        "Stored model v{} unusable ({}), using fallback rules",
                        meta.version,
                        e
                    );
                }
            }
            Err(PersistenceError::NotFound(_)) => {
                tracing::info!(target: "neuropet-runtime", "No stored model, using fallback rules");
            }
            Err(e) => {
                tracing::warn!(
                    target: "neuropet-runtime",
                    "Stored model rejected ({}), using fallback rules",
                    e
                );
            }
        }
        if !config.prefer_learned {
            inference.set_strategy(Strategy::Fallback);
        }

        let encoder = config.encoder;
        let features = encoder.encode(&state, &stats, now_ms, clock.day_fraction(now_ms));
        let output = Output::default();

        let snapshot = SnapshotHandle::new(Snapshot {
            timestamp_ms: now_ms,
            state,
            output,
            model_version: inference.model_version(),
            strategy: inference.strategy(),
        });

        tracing::info!(
            target: "neuropet-runtime",
            "Neuropet started (boot #{}, model v{}, {:?} strategy)",
            pet_stats.boot_count,
            inference.model_version(),
            inference.strategy()
        );

        let mut engine = Self {
            gestures: GestureDetector::new(config.buttons),
            simulator: StateSimulator::new(config.state),
            tracker: InteractionTracker::new(config.tracker),
            window: InteractionWindow::new(),
            encoder,
            inference,
            learner,
            log,
            clock,
            state,
            stats,
            pet_stats,
            features,
            output,
            last_tick_ms: now_ms,
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
            snapshot,
            store,
            config,
        };
        engine.push_event(EngineEvent::Started {
            boot_count: engine.pet_stats.boot_count,
            model_version: engine.inference.model_version(),
        });
        Ok(engine)
    }

    fn push_event(&mut self, event: EngineEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take every queued notification, oldest first
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    fn publish(&self, now_ms: u64) {
        self.snapshot.publish(Snapshot {
            timestamp_ms: now_ms,
            state: self.state,
            output: self.output,
            model_version: self.inference.model_version(),
            strategy: self.inference.strategy(),
        });
    }

    fn encode(&self, now_ms: u64) -> Features {
        self.encoder.encode(
            &self.state,
            &self.stats,
            now_ms,
            self.clock.day_fraction(now_ms),
        )
    }

    /// Sample both buttons and act on any completed gestures
    pub fn poll(&mut self, now_ms: u64, levels: [bool; BUTTON_COUNT]) -> Vec<ButtonEvent> {
        let detected = self.gestures.update(levels, now_ms);
        for event in &detected {
            self.handle_gesture(*event);
        }
        detected
    }

    /// Apply one gesture to the pet. Also usable directly by callers that
    /// do their own button handling.
    pub fn handle_gesture(&mut self, event: ButtonEvent) -> InputEvent {
        let now_ms = event.timestamp_ms;
        let input = InputEvent::from(event);

        // decay the spam score up to now before this interaction bumps it
        self.tracker.update(&mut self.stats, now_ms);

        let asked = match event.button {
            ButtonId::Feed => Action::AskFood,
            ButtonId::Pet => Action::AskPet,
        };
        let was_requested = self.output.action == asked;
        let was_timely = !self.stats.is_ignored();

        let portions = match event.gesture {
            Gesture::Short => 1,
            Gesture::Long => 2,
            Gesture::Double => 0,
        };

        if portions > 0 {
            for _ in 0..portions {
                match event.button {
                    ButtonId::Feed => {
                        self.simulator.apply_feed(&mut self.state, &mut self.stats);
                        self.window.record(InteractionKind::Feed, now_ms);
                    }
                    ButtonId::Pet => {
                        self.simulator.apply_pet(&mut self.state, &mut self.stats);
                        self.window.record(InteractionKind::Pet, now_ms);
                    }
                }
            }
            match event.button {
                ButtonId::Feed => self.pet_stats.record_feeds(portions),
                ButtonId::Pet => self.pet_stats.record_pets(portions),
            }
            let delta =
                StateSimulator::apply_trust_delta(&mut self.state, was_requested, was_timely);
            tracing::debug!(
                target: "neuropet-runtime",
                was_requested, was_timely, delta, "trust adjusted"
            );
        }

        self.stats.mark_interaction(now_ms);
        self.window.refresh(&mut self.stats, now_ms);
        self.pet_stats.observe(&self.state);

        self.features = self.encode(now_ms);
        self.log.append(LogEntry {
            timestamp_ms: now_ms,
            input_event: input,
            features: self.features,
            output: self.output,
            state_after: self.state,
        });

        if was_requested {
            self.learner.reward(asked, &self.features);
        }
        self.learner.reward(Action::Happy, &self.features);

        tracing::info!(
            target: "neuropet-runtime",
            "{} (hunger {:.2}, affection need {:.2}, trust {:.2})",
            input.name(),
            self.state.hunger,
            self.state.affection_need,
            self.state.trust
        );

        self.push_event(EngineEvent::Interaction {
            input,
            timestamp_ms: now_ms,
        });
        self.publish(now_ms);
        input
    }

    /// Advance the simulation to `now_ms` and make a fresh decision
    pub fn tick(&mut self, now_ms: u64) -> Output {
        let elapsed_ms = now_ms.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = now_ms;

        self.simulator
            .tick(&mut self.state, elapsed_ms, self.output.action);
        self.tracker.update(&mut self.stats, now_ms);
        self.window.refresh(&mut self.stats, now_ms);

        if self.tracker.check_ignored(&mut self.stats, now_ms) {
            let features = self.encode(now_ms);
            self.log.append(LogEntry {
                timestamp_ms: now_ms,
                input_event: InputEvent::Ignore,
                features,
                output: self.output,
                state_after: self.state,
            });
            tracing::info!(target: "neuropet-runtime", "Pet is being ignored");
            self.push_event(EngineEvent::Ignored { since_ms: now_ms });
        }

        self.features = self.encode(now_ms);
        self.output = self.inference.infer(&self.features, self.learner.bias());
        self.pet_stats.observe(&self.state);

        tracing::debug!(
            target: "neuropet-runtime",
            action = %self.output.action,
            valence = self.output.valence,
            arousal = self.output.arousal,
            hunger = self.state.hunger,
            energy = self.state.energy,
            stress = self.state.stress,
            "tick"
        );

        self.push_event(EngineEvent::Decision {
            output: self.output,
            timestamp_ms: now_ms,
        });
        self.publish(now_ms);
        self.output
    }

    /// Fold buffered rewards into the biases and save everything.
    ///
    /// Every record is attempted even if an earlier one fails; the first
    /// failure is returned.
    pub fn persist(&mut self, now_ms: u64) -> Result<()> {
        self.learner.apply();
        self.pet_stats.mark_saved(now_ms);

        let bias = StoredBias {
            bias: *self.learner.bias(),
            total_rewards: self.learner.total_rewards(),
        };

        let mut first_error: Option<PersistenceError> = None;
        for (what, result) in [
            ("pet state", self.store.save_state(&self.state)),
            ("interaction stats", self.store.save_interaction_stats(&self.stats)),
            ("pet stats", self.store.save_pet_stats(&self.pet_stats)),
            ("learned biases", self.store.save_bias(&bias)),
        ] {
            if let Err(e) = result {
                tracing::warn!(target: "neuropet-runtime", "Failed to save {}: {}", what, e);
                first_error.get_or_insert(e);
            }
        }

        if let Some(e) = first_error {
            return Err(e.into());
        }

        tracing::info!(
            target: "neuropet-runtime",
            "Saved (feeds {}, pets {}, rewards {})",
            self.pet_stats.total_feeds,
            self.pet_stats.total_pets,
            self.learner.total_rewards()
        );
        self.push_event(EngineEvent::Saved { timestamp_ms: now_ms });
        Ok(())
    }

    /// Install a new model. Nothing changes unless the blob passes its
    /// checksum, parses, and is stored.
    pub fn upload_model(&mut self, blob: &[u8], meta: &ModelMeta) -> Result<u32> {
        let result = self.try_upload_model(blob, meta);
        match &result {
            Ok(version) => self.push_event(EngineEvent::ModelLoaded { version: *version }),
            Err(e) => {
                tracing::warn!(target: "neuropet-runtime", "Model upload rejected: {}", e);
                self.push_event(EngineEvent::ModelRejected {
                    reason: e.to_string(),
                });
            }
        }
        result
    }

    fn try_upload_model(&mut self, blob: &[u8], meta: &ModelMeta) -> Result<u32> {
        meta.verify(blob)?;

        let mut candidate = self.inference.clone();
        let version = candidate.load_weights(blob)?;
        if !self.config.prefer_learned {
            candidate.set_strategy(Strategy::Fallback);
        }

        self.store.save_model(blob, meta)?;
        self.inference = candidate;
        self.publish(self.last_tick_ms);
        Ok(version)
    }

    /// Forget the uploaded model and go back to the built-in weights
    ///
    /// The stored model is removed first; if that fails the current model
    /// stays active.
    pub fn reset_model(&mut self) -> Result<()> {
        self.store.clear_model()?;
        self.inference.reset();
        self.publish(self.last_tick_ms);
        Ok(())
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.inference.set_strategy(strategy);
        self.publish(self.last_tick_ms);
    }

    /// Set the wall clock and persist the offset
    pub fn set_time(&mut self, now_ms: u64, hour: u8, minute: u8) -> Result<()> {
        self.clock.set(now_ms, hour, minute)?;
        self.store.save_time_offset(&self.clock.offset())?;
        Ok(())
    }

    /// JSON export of `count` log entries starting at `start` (oldest first)
    pub fn export_log(&self, start: usize, count: usize) -> Result<String> {
        Ok(export_json(&self.log, start, count)?)
    }

    /// Run whatever the scheduler says is due at `now_ms`
    pub fn step(
        &mut self,
        scheduler: &mut Scheduler,
        now_ms: u64,
        levels: [bool; BUTTON_COUNT],
    ) -> Result<Vec<ButtonEvent>> {
        let due = scheduler.due(now_ms);
        let mut detected = Vec::new();
        if due.poll {
            detected = self.poll(now_ms, levels);
        }
        if due.tick {
            self.tick(now_ms);
        }
        if due.save {
            self.persist(now_ms)?;
        }
        Ok(detected)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.read()
    }

    /// Handle for readers on other threads
    pub fn snapshot_handle(&self) -> SnapshotHandle {
        self.snapshot.clone()
    }

    pub fn state(&self) -> &PetState {
        &self.state
    }

    pub fn output(&self) -> Output {
        self.output
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn interaction_stats(&self) -> &InteractionStats {
        &self.stats
    }

    pub fn pet_stats(&self) -> &PetStats {
        &self.pet_stats
    }

    pub fn learner(&self) -> &RewardLearner {
        &self.learner
    }

    pub fn inference(&self) -> &InferenceEngine {
        &self.inference
    }

    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    pub fn clock(&self) -> &TimeOfDay {
        &self.clock
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tear down, handing back the store (used to simulate a restart)
    pub fn into_store(self) -> S {
        self.store
    }
}
