use serde::Serialize;

use crate::instructions::InstructionStep;

/// Position within a recipe's steps.
///
/// `next` and `prev` clamp at the ends; there is no wraparound. An empty
/// step list is allowed and simply has no current step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepNavigator {
    steps: Vec<InstructionStep>,
    current: usize,
}

impl StepNavigator {
    pub fn new(steps: Vec<InstructionStep>) -> Self {
        Self { steps, current: 0 }
    }

    /// Replace the steps (a new recipe) and rewind to the first one.
    pub fn load(&mut self, steps: Vec<InstructionStep>) {
        self.steps = steps;
        self.current = 0;
    }

    /// Advance one step. Returns false when already on the last step.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.steps.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step. Returns false when already on the first step.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a zero-based step; out-of-range indexes leave the position alone.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.steps.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&InstructionStep> {
        self.steps.get(self.current)
    }

    /// "k of n", or None when there are no steps.
    pub fn progress(&self) -> Option<String> {
        if self.steps.is_empty() {
            return None;
        }
        Some(format!("{} of {}", self.current + 1, self.steps.len()))
    }

    pub fn steps(&self) -> &[InstructionStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }
}
