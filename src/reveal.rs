//! One-way reveal tracking for sections and cards.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Transition delay for the card at `index`, in milliseconds.
#[must_use]
pub fn stagger_delay(index: usize, step_ms: u32) -> u64 {
    u64::try_from(index).unwrap_or(u64::MAX).saturating_mul(u64::from(step_ms))
}

/// CSS `transition-delay` value for the card at `index`.
#[must_use]
pub fn stagger_delay_css(index: usize, step_ms: u32) -> String {
    format!("{}ms", stagger_delay(index, step_ms))
}

/// Revealed flags for a fixed set of observed elements.
///
/// Flags only ever go from hidden to revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealLedger {
    revealed: Vec<bool>,
}

impl RevealLedger {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { revealed: vec![false; len] }
    }

    /// Record a visibility report for element `index`.
    ///
    /// Returns `true` only when this report is the one that reveals it.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        if !intersecting || self.is_revealed(index) {
            return false;
        }
        let Some(flag) = self.revealed.get_mut(index) else {
            return false;
        };
        *flag = true;
        true
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}
