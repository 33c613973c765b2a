//! Preset selection list.

use crate::error::PomoError;
use crate::timer::preset::Preset;

/// Direction to move the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the first entry.
    Up,
    /// Towards the last entry.
    Down,
}

/// The preset list with its highlighted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    presets: Vec<Preset>,
    highlighted: usize,
}

impl Selector {
    /// Create a selector with the first preset highlighted.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` if `presets` is empty.
    pub fn new(presets: Vec<Preset>) -> Result<Self, PomoError> {
        if presets.is_empty() {
            return Err(PomoError::Config(
                "at least one preset must be configured".to_string(),
            ));
        }
        Ok(Self {
            presets,
            highlighted: 0,
        })
    }

    /// Build a selector whose highlight may point past the end of the list.
    #[cfg(test)]
    pub(crate) fn with_raw_highlight(presets: Vec<Preset>, highlighted: usize) -> Self {
        Self {
            presets,
            highlighted,
        }
    }

    /// All presets in display order.
    #[must_use]
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Index of the highlighted preset.
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Highlight a specific entry.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` if `index` is out of range.
    pub fn highlight(&mut self, index: usize) -> Result<(), PomoError> {
        if index >= self.presets.len() {
            return Err(PomoError::Config(format!(
                "preset index {index} out of range (have {})",
                self.presets.len()
            )));
        }
        self.highlighted = index;
        Ok(())
    }

    /// Move the highlight one entry, clamped to the list bounds.
    pub fn move_highlight(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                if self.highlighted > 0 {
                    self.highlighted -= 1;
                }
            }
            Direction::Down => {
                if self.highlighted + 1 < self.presets.len() {
                    self.highlighted += 1;
                }
            }
        }
    }

    /// Jump to the first entry.
    pub fn select_first(&mut self) {
        self.highlighted = 0;
    }

    /// Jump to the last entry.
    pub fn select_last(&mut self) {
        self.highlighted = self.presets.len().saturating_sub(1);
    }

    /// The highlighted preset, if the highlight points at one.
    #[must_use]
    pub fn confirm_selection(&self) -> Option<Preset> {
        self.presets.get(self.highlighted).copied()
    }
}
