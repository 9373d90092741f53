// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Reward-driven action bias learning
//!
//! ```text
//! apply():
//!   bias[*]  *= decay
//!   for (action a, reward r) in buffer:
//!     bias[a]  += lr · r
//!     bias[¬a] -= lr · r · competition
//!   bias[*]   = clamp(bias[*], ±bias_limit)
//!   buffer.clear()
//! ```

use neuropet_structures::{Action, ActionBias, Features, BIAS_LIMIT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearnerConfig {
    pub learning_rate: f32,
    /// Forgetting factor applied on every non-empty apply, in (0, 1]
    pub decay: f32,
    /// Fraction of a reward taken from every other action
    pub competition: f32,
    /// Experience buffer capacity; rewards past this are dropped
    pub buffer_capacity: usize,
    pub bias_limit: f32,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            decay: 0.99,
            competition: 0.1,
            buffer_capacity: 16,
            bias_limit: BIAS_LIMIT,
        }
    }
}

/// One buffered reward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Experience {
    /// Context the reward was given in
    pub features: Features,
    pub action: Action,
    /// Positive reinforces, negative discourages
    pub reward: f32,
}

#[derive(Debug, Clone)]
pub struct RewardLearner {
    config: LearnerConfig,
    bias: ActionBias,
    buffer: Vec<Experience>,
    total_rewards: u32,
}

impl RewardLearner {
    pub fn new(config: LearnerConfig) -> Self {
        Self {
            buffer: Vec::with_capacity(config.buffer_capacity),
            config,
            bias: ActionBias::zeroed(),
            total_rewards: 0,
        }
    }

    /// Resume from persisted biases and reward count
    pub fn restore(&mut self, bias: ActionBias, total_rewards: u32) {
        let mut bias = bias;
        bias.clamp_to(self.config.bias_limit);
        self.bias = bias;
        self.total_rewards = total_rewards;
        tracing::info!(
            target: "neuropet-plasticity",
            "Restored learned biases, rewards: {}",
            total_rewards
        );
    }

    /// Queue a +1 reward. Returns false when the buffer is full and the
    /// reward was dropped.
    pub fn reward(&mut self, action: Action, features: &Features) -> bool {
        self.reward_with(action, features, 1.0)
    }

    /// Queue a signed reward
    pub fn reward_with(&mut self, action: Action, features: &Features, reward: f32) -> bool {
        if self.buffer.len() >= self.config.buffer_capacity {
            tracing::debug!(
                target: "neuropet-plasticity",
                ?action, "experience buffer full, reward dropped"
            );
            return false;
        }

        self.buffer.push(Experience {
            features: *features,
            action,
            reward,
        });
        self.total_rewards = self.total_rewards.saturating_add(1);
        tracing::debug!(
            target: "neuropet-plasticity",
            "reward action {}, buffer {}",
            action,
            self.buffer.len()
        );
        true
    }

    /// Fold the buffered rewards into the biases. Returns false (and changes
    /// nothing) when the buffer is empty.
    pub fn apply(&mut self) -> bool {
        if self.buffer.is_empty() {
            return false;
        }

        let c = &self.config;
        self.bias.scale(c.decay);

        for exp in &self.buffer {
            let delta = c.learning_rate * exp.reward;
            let rewarded = exp.action.index();
            for action in Action::ALL {
                let i = action.index();
                if i == rewarded {
                    self.bias.add(i, delta);
                } else {
                    self.bias.add(i, -delta * c.competition);
                }
            }
        }

        self.bias.clamp_to(c.bias_limit);

        tracing::info!(
            target: "neuropet-plasticity",
            "Applied {} rewards, biases: {:?}",
            self.buffer.len(),
            self.bias.values()
        );
        self.buffer.clear();
        true
    }

    pub fn bias(&self) -> &ActionBias {
        &self.bias
    }

    pub fn total_rewards(&self) -> u32 {
        self.total_rewards
    }

    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    /// Forget everything learned
    pub fn reset(&mut self) {
        self.bias = ActionBias::zeroed();
        self.buffer.clear();
        self.total_rewards = 0;
    }
}

impl Default for RewardLearner {
    fn default() -> Self {
        Self::new(LearnerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_reward() {
        let mut learner = RewardLearner::default();
        assert!(learner.reward(Action::Happy, &Features::default()));
        assert!(learner.apply());

        let bias = learner.bias();
        assert!((bias.get(Action::Happy) - 0.1).abs() < 1e-6);
        for action in Action::ALL {
            if action != Action::Happy {
                assert!((bias.get(action) + 0.01).abs() < 1e-6);
            }
        }
        assert_eq!(learner.pending(), 0);
    }

    #[test]
    fn test_empty_apply_is_noop() {
        let mut learner = RewardLearner::default();
        learner.restore(ActionBias::from_values([0.5; 8]), 3);
        assert!(!learner.apply());
        // no decay without experiences
        assert_eq!(learner.bias().values(), &[0.5; 8]);
    }

    #[test]
    fn test_overflow_dropped() {
        let mut learner = RewardLearner::default();
        for _ in 0..16 {
            assert!(learner.reward(Action::Play, &Features::default()));
        }
        assert!(!learner.reward(Action::Sad, &Features::default()));
        assert_eq!(learner.pending(), 16);
        assert_eq!(learner.total_rewards(), 16);

        learner.apply();
        // the dropped Sad reward never competed
        assert!(learner.bias().get(Action::Play) > 0.0);
        assert!(learner.bias().get(Action::Sad) < 0.0);
    }

    #[test]
    fn test_decay_before_learning() {
        let mut values = [0.0; 8];
        values[Action::Sleep.index()] = 1.0;
        let mut learner = RewardLearner::default();
        learner.restore(ActionBias::from_values(values), 0);

        learner.reward(Action::Happy, &Features::default());
        learner.apply();
        // 1.0 * 0.99 - 0.01
        assert!((learner.bias().get(Action::Sleep) - 0.98).abs() < 1e-6);
    }

    #[test]
    fn test_biases_clamped() {
        let mut learner = RewardLearner::new(LearnerConfig {
            learning_rate: 5.0,
            ..Default::default()
        });
        learner.reward(Action::AskPet, &Features::default());
        learner.apply();
        assert_eq!(learner.bias().get(Action::AskPet), 2.0);
        assert!(learner.bias().values().iter().all(|v| (-2.0..=2.0).contains(v)));
    }

    #[test]
    fn test_negative_reward_discourages() {
        let mut learner = RewardLearner::default();
        learner.reward_with(Action::Annoyed, &Features::default(), -1.0);
        learner.apply();
        assert!(learner.bias().get(Action::Annoyed) < 0.0);
        assert!(learner.bias().get(Action::Idle) > 0.0);
    }
}
