//! Sequenced shape morph between the normal and loading looks of a button
//!
//! A morph is a fixed list of [`MorphStep`]s. Each step either applies
//! instantly or starts a keyed layer animation; the sequence only moves on
//! once the layer reports that animation as finished. This keeps the
//! completion chain explicit instead of nesting callbacks.

use morph_gui::{FinishedAnimation, LayerId};
use std::collections::VecDeque;

/// Settled loading state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Normal,
    Loading,
}

/// One step of a morph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphStep {
    /// Fade the title out
    HideTitle,
    /// Animate the corner radius to half the height
    RoundCorners,
    /// Animate the width down to the height
    CollapseWidth,
    /// Show the spinner and start rotating it
    StartSpinner,
    /// Animate the width back to the normal width
    ExpandWidth,
    /// Animate the corner radius back to the configured radius
    RestoreCorners,
    /// Fade the title back in
    ShowTitle,
    /// Hide the spinner and stop its rotation
    StopSpinner,
}

impl MorphStep {
    /// Steps that take a button to `target`, in order
    pub fn sequence(target: LoadingState) -> &'static [MorphStep] {
        match target {
            LoadingState::Loading => &[
                MorphStep::HideTitle,
                MorphStep::RoundCorners,
                MorphStep::CollapseWidth,
                MorphStep::StartSpinner,
            ],
            LoadingState::Normal => &[
                MorphStep::ExpandWidth,
                MorphStep::RestoreCorners,
                MorphStep::ShowTitle,
                MorphStep::StopSpinner,
            ],
        }
    }

    /// Key of the layer animation started by this step
    pub fn animation_key(self) -> &'static str {
        match self {
            MorphStep::HideTitle | MorphStep::ShowTitle => "title_fade",
            MorphStep::RoundCorners | MorphStep::RestoreCorners => "corner_morph",
            MorphStep::CollapseWidth | MorphStep::ExpandWidth => "width_morph",
            MorphStep::StartSpinner | MorphStep::StopSpinner => "spinner",
        }
    }
}

/// What applying a step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Done immediately, continue with the next step
    Instant,
    /// Wait until `layer` reports the animation `key` as finished
    Animating { layer: LayerId, key: &'static str },
}

/// The thing being morphed
pub trait MorphTarget {
    fn apply_step(&mut self, step: MorphStep) -> StepOutcome;
}

/// Runner for one morph towards a target state
#[derive(Debug, Clone)]
pub struct MorphSequence {
    target: LoadingState,
    pending: VecDeque<MorphStep>,
    waiting: Option<(MorphStep, LayerId, &'static str)>,
}

impl MorphSequence {
    pub fn new(target: LoadingState) -> Self {
        Self {
            target,
            pending: MorphStep::sequence(target).iter().copied().collect(),
            waiting: None,
        }
    }

    pub fn target(&self) -> LoadingState {
        self.target
    }

    /// Step whose animation is currently running
    pub fn current_step(&self) -> Option<MorphStep> {
        self.waiting.as_ref().map(|(step, _, _)| *step)
    }

    /// Run steps until one has to wait for an animation
    ///
    /// `finished` are the animations that completed since the last call.
    /// Returns `true` once every step has completed.
    pub fn advance(&mut self, host: &mut impl MorphTarget, finished: &[FinishedAnimation]) -> bool {
        if let Some((step, layer, key)) = &self.waiting {
            let done = finished.iter().any(|f| &f.layer == layer && f.key == *key);
            if !done {
                return false;
            }
            log::trace!("morph step {:?} finished", step);
            self.waiting = None;
        }

        while let Some(step) = self.pending.pop_front() {
            log::trace!("morph step {:?} towards {:?}", step, self.target);
            match host.apply_step(step) {
                StepOutcome::Instant => {}
                StepOutcome::Animating { layer, key } => {
                    self.waiting = Some((step, layer, key));
                    return false;
                }
            }
        }

        true
    }
}
