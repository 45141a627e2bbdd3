//! Step tracking for linear multi-step forms.
//!
//! A [`FormWizard`] remembers which step is showing, which steps the user has
//! opened and which steps have passed validation. Steps are numbered from 1.
//!
//! Navigation requests that cannot be honored (a step number outside the
//! form, moving past the last step, skipping ahead of an incomplete step) are
//! ignored and reported through the `bool` return value; they never panic
//! and never error.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Errors raised when building a wizard from an impossible configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("a form needs at least one step")]
    NoSteps,

    #[error("initial step {initial_step} is outside 1..={total_steps}")]
    InitialStepOutOfRange { initial_step: u32, total_steps: u32 },
}

/// Whether [`FormWizard::go_to_step`] and [`FormWizard::next_step`] apply the
/// forward-progress rule themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationGate {
    /// Moving forward requires the current step to be complete.
    #[default]
    Enforced,
    /// Any in-range step is reachable; callers consult
    /// [`FormWizard::can_go_to_step`] on their own.
    Advisory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    pub total_steps: u32,
    pub initial_step: u32,
    pub gate: NavigationGate,
}

impl WizardConfig {
    pub fn new(total_steps: u32) -> Self {
        Self {
            total_steps,
            initial_step: 1,
            gate: NavigationGate::default(),
        }
    }
}

/// Read-only view of a wizard, suitable for rendering or logging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardSnapshot {
    pub current_step: u32,
    pub total_steps: u32,
    pub completed_steps: Vec<u32>,
    pub visited_steps: Vec<u32>,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub progress: f64,
}

/// State machine for a linear form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormWizard {
    config: WizardConfig,
    current_step: u32,
    completed_steps: BTreeSet<u32>,
    visited_steps: BTreeSet<u32>,
}

impl FormWizard {
    /// Creates a wizard starting at step 1 with the completion gate enforced.
    pub fn new(total_steps: u32) -> Result<Self, WizardError> {
        Self::with_config(WizardConfig::new(total_steps))
    }

    pub fn with_config(config: WizardConfig) -> Result<Self, WizardError> {
        if config.total_steps == 0 {
            return Err(WizardError::NoSteps);
        }
        if !(1..=config.total_steps).contains(&config.initial_step) {
            return Err(WizardError::InitialStepOutOfRange {
                initial_step: config.initial_step,
                total_steps: config.total_steps,
            });
        }

        Ok(Self {
            config,
            current_step: config.initial_step,
            completed_steps: BTreeSet::new(),
            visited_steps: BTreeSet::from([config.initial_step]),
        })
    }

    pub fn config(&self) -> WizardConfig {
        self.config
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.config.total_steps
    }

    pub fn completed_steps(&self) -> &BTreeSet<u32> {
        &self.completed_steps
    }

    pub fn visited_steps(&self) -> &BTreeSet<u32> {
        &self.visited_steps
    }

    fn in_range(
        &self,
        step: u32,
    ) -> bool {
        (1..=self.config.total_steps).contains(&step)
    }

    /// Jumps to `step`. Returns `false` and leaves the state untouched if
    /// the step does not exist or, with an enforced gate, is not reachable.
    pub fn go_to_step(
        &mut self,
        step: u32,
    ) -> bool {
        if !self.in_range(step) {
            trace!(step, "ignoring jump to out-of-range step");
            return false;
        }
        if self.config.gate == NavigationGate::Enforced && !self.can_go_to_step(step) {
            trace!(step, current = self.current_step, "ignoring gated jump");
            return false;
        }

        self.current_step = step;
        self.visited_steps.insert(step);
        true
    }

    pub fn next_step(&mut self) -> bool {
        if self.current_step >= self.config.total_steps {
            return false;
        }
        if self.config.gate == NavigationGate::Enforced && !self.is_step_complete(self.current_step)
        {
            trace!(current = self.current_step, "ignoring advance past incomplete step");
            return false;
        }

        self.current_step += 1;
        self.visited_steps.insert(self.current_step);
        true
    }

    /// Moves back one step. The previous step is already visited.
    pub fn prev_step(&mut self) -> bool {
        if self.current_step <= 1 {
            return false;
        }

        self.current_step -= 1;
        true
    }

    /// Records `step` as valid. Idempotent; out-of-range steps are ignored.
    pub fn mark_step_complete(
        &mut self,
        step: u32,
    ) {
        if self.in_range(step) {
            self.completed_steps.insert(step);
        }
    }

    pub fn mark_step_incomplete(
        &mut self,
        step: u32,
    ) {
        self.completed_steps.remove(&step);
    }

    pub fn is_step_complete(
        &self,
        step: u32,
    ) -> bool {
        self.completed_steps.contains(&step)
    }

    pub fn is_step_visited(
        &self,
        step: u32,
    ) -> bool {
        self.visited_steps.contains(&step)
    }

    /// Past and current steps are always reachable; the step after the
    /// current one is reachable only once the current step is complete.
    pub fn can_go_to_step(
        &self,
        step: u32,
    ) -> bool {
        if !self.in_range(step) {
            return false;
        }
        step <= self.current_step
            || (step == self.current_step + 1 && self.is_step_complete(self.current_step))
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.config.total_steps
    }

    /// Percentage of the form reached, counting the current step.
    pub fn progress(&self) -> f64 {
        f64::from(self.current_step) / f64::from(self.config.total_steps) * 100.0
    }

    /// Returns to the state the wizard was created in.
    pub fn reset(&mut self) {
        self.current_step = self.config.initial_step;
        self.completed_steps.clear();
        self.visited_steps = BTreeSet::from([self.config.initial_step]);
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            current_step: self.current_step,
            total_steps: self.config.total_steps,
            completed_steps: self.completed_steps.iter().copied().collect(),
            visited_steps: self.visited_steps.iter().copied().collect(),
            is_first_step: self.is_first_step(),
            is_last_step: self.is_last_step(),
            progress: self.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn advisory(total_steps: u32) -> FormWizard {
        FormWizard::with_config(WizardConfig {
            gate: NavigationGate::Advisory,
            ..WizardConfig::new(total_steps)
        })
        .unwrap()
    }

    // =========================================================================
    // construction tests
    // =========================================================================

    #[test]
    fn new_wizard_starts_on_first_step() {
        let wizard = FormWizard::new(4).unwrap();

        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.is_first_step());
        assert!(!wizard.is_last_step());
        assert_eq!(wizard.visited_steps(), &BTreeSet::from([1]));
        assert!(wizard.completed_steps().is_empty());
    }

    #[test]
    fn zero_steps_is_rejected() {
        assert_eq!(FormWizard::new(0), Err(WizardError::NoSteps));
    }

    #[test]
    fn initial_step_outside_form_is_rejected() {
        let result = FormWizard::with_config(WizardConfig {
            initial_step: 5,
            ..WizardConfig::new(4)
        });

        assert_eq!(
            result,
            Err(WizardError::InitialStepOutOfRange {
                initial_step: 5,
                total_steps: 4,
            })
        );
    }

    #[test]
    fn custom_initial_step_is_visited() {
        let wizard = FormWizard::with_config(WizardConfig {
            initial_step: 3,
            ..WizardConfig::new(4)
        })
        .unwrap();

        assert_eq!(wizard.current_step(), 3);
        assert!(wizard.is_step_visited(3));
        assert!(!wizard.is_step_visited(1));
    }

    // =========================================================================
    // gating tests
    // =========================================================================

    #[test]
    fn next_step_is_gated_on_completion() {
        let mut wizard = FormWizard::new(4).unwrap();

        assert!(!wizard.can_go_to_step(2));
        wizard.mark_step_complete(1);
        assert!(wizard.can_go_to_step(2));

        assert!(wizard.go_to_step(2));
        assert_eq!(wizard.current_step(), 2);
        assert!(wizard.is_step_visited(2));
    }

    #[test]
    fn enforced_gate_blocks_jump_to_incomplete_next_step() {
        let mut wizard = FormWizard::new(4).unwrap();

        assert!(!wizard.go_to_step(2));
        assert!(!wizard.next_step());
        assert_eq!(wizard.current_step(), 1);
        assert!(!wizard.is_step_visited(2));
    }

    #[test]
    fn cannot_skip_more_than_one_step_ahead() {
        let mut wizard = FormWizard::new(4).unwrap();
        wizard.mark_step_complete(1);
        wizard.mark_step_complete(2);

        assert!(!wizard.can_go_to_step(3));
        assert!(!wizard.go_to_step(3));
    }

    #[test]
    fn past_steps_stay_reachable() {
        let mut wizard = FormWizard::new(4).unwrap();
        wizard.mark_step_complete(1);
        wizard.next_step();
        wizard.mark_step_complete(2);
        wizard.next_step();

        assert!(wizard.can_go_to_step(1));
        assert!(wizard.go_to_step(1));
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn advisory_gate_allows_any_in_range_jump() {
        let mut wizard = advisory(4);

        assert!(!wizard.can_go_to_step(4));
        assert!(wizard.go_to_step(4));
        assert_eq!(wizard.current_step(), 4);
        assert!(!wizard.next_step());
    }

    #[test]
    fn advisory_next_step_ignores_completion() {
        let mut wizard = advisory(3);

        assert!(wizard.next_step());
        assert_eq!(wizard.current_step(), 2);
        assert!(wizard.is_step_visited(2));
    }

    // =========================================================================
    // boundary tests
    // =========================================================================

    #[test]
    fn prev_step_on_first_step_is_noop() {
        let mut wizard = FormWizard::new(4).unwrap();
        let before = wizard.clone();

        assert!(!wizard.prev_step());
        assert_eq!(wizard, before);
    }

    #[test]
    fn next_step_on_last_step_is_noop() {
        let mut wizard = advisory(2);
        wizard.go_to_step(2);
        wizard.mark_step_complete(2);
        let before = wizard.clone();

        assert!(!wizard.next_step());
        assert_eq!(wizard, before);
        assert!(wizard.is_last_step());
    }

    #[test]
    fn out_of_range_jumps_are_ignored() {
        let mut wizard = advisory(4);

        assert!(!wizard.go_to_step(0));
        assert!(!wizard.go_to_step(5));
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.visited_steps(), &BTreeSet::from([1]));
    }

    #[test]
    fn prev_step_does_not_change_visited() {
        let mut wizard = advisory(3);
        wizard.go_to_step(3);
        let visited = wizard.visited_steps().clone();

        assert!(wizard.prev_step());
        assert_eq!(wizard.current_step(), 2);
        assert_eq!(wizard.visited_steps(), &visited);
        assert!(!wizard.is_step_visited(2));
    }

    // =========================================================================
    // completion tests
    // =========================================================================

    #[test]
    fn mark_step_complete_is_idempotent() {
        let mut once = FormWizard::new(4).unwrap();
        once.mark_step_complete(2);
        let mut twice = FormWizard::new(4).unwrap();
        twice.mark_step_complete(2);
        twice.mark_step_complete(2);

        assert_eq!(once, twice);
    }

    #[test]
    fn mark_step_incomplete_removes_completion() {
        let mut wizard = FormWizard::new(4).unwrap();
        wizard.mark_step_complete(1);
        wizard.mark_step_incomplete(1);

        assert!(!wizard.is_step_complete(1));
        assert!(!wizard.can_go_to_step(2));
    }

    #[test]
    fn completing_out_of_range_step_is_ignored() {
        let mut wizard = FormWizard::new(4).unwrap();
        wizard.mark_step_complete(9);

        assert!(wizard.completed_steps().is_empty());
    }

    // =========================================================================
    // progress / reset tests
    // =========================================================================

    #[test]
    fn progress_counts_current_step() {
        let mut wizard = advisory(4);
        assert_eq!(wizard.progress(), 25.0);

        wizard.go_to_step(4);
        assert_eq!(wizard.progress(), 100.0);
    }

    #[test]
    fn reset_restores_initial_snapshot() {
        let mut wizard = FormWizard::new(4).unwrap();
        let initial = wizard.snapshot();

        for step in 1..=3 {
            wizard.mark_step_complete(step);
            wizard.next_step();
        }
        wizard.prev_step();
        wizard.reset();

        assert_eq!(wizard.snapshot(), initial);
        assert_eq!(wizard, FormWizard::new(4).unwrap());
    }

    #[test]
    fn snapshot_lists_steps_in_order() {
        let mut wizard = FormWizard::new(3).unwrap();
        wizard.mark_step_complete(1);
        wizard.next_step();

        let snapshot = wizard.snapshot();

        assert_eq!(snapshot.current_step, 2);
        assert_eq!(snapshot.completed_steps, vec![1]);
        assert_eq!(snapshot.visited_steps, vec![1, 2]);
        assert!(!snapshot.is_first_step);
    }
}
