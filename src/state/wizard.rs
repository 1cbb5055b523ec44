//! Wizard step state machine

/// Tracks which step pane is visible.
///
/// The index is always within `0..step_count`; it only moves through the
/// transition methods, and gating on validation is the caller's job.
#[derive(Debug, Clone)]
pub struct Wizard {
    current: usize,
    step_count: usize,
}

impl Wizard {
    pub fn new(step_count: usize) -> Self {
        debug_assert!(step_count > 0);
        Self {
            current: 0,
            step_count,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.step_count
    }

    /// Move to the next step. Returns false when already on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move to the previous step. Returns false when already on the first.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump straight to a step, as when its tab is selected.
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.step_count {
            return false;
        }
        self.current = step;
        true
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}
