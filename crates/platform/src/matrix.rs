//! Chained 8×8 LED panel bus abstraction.
//!
//! A MAX7219-style daisy chain: each panel is addressed by index, each column
//! or row takes an 8-bit mask. Only the animation engine writes pixel data
//! and only the input controller writes intensity, so the bus needs no lock.
//!
//! Panel wiring is physically reversed — panel 0 sits at the far end of the
//! chain. The animation engine maps logical columns onto physical addresses;
//! this trait stays strictly physical.

/// Animation mode for the panel chain.
///
/// Selected by the input controller, consumed by the animation engine. The
/// engine keeps its own copy of the last adopted mode so a change can reset
/// its step counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationMode {
    /// One lit column sweeping across the chain.
    #[default]
    VerticalSweep,
    /// One lit row sweeping panel by panel.
    HorizontalSweep,
    /// Random level-meter bars, redrawn every tick.
    Music,
    /// ECG-style trace with random blips shifting across the chain.
    Lifeline,
    /// Panels blanked.
    Off,
}

impl AnimationMode {
    /// Next mode in the cycle. Total — every variant has a successor.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            AnimationMode::VerticalSweep => AnimationMode::HorizontalSweep,
            AnimationMode::HorizontalSweep => AnimationMode::Music,
            AnimationMode::Music => AnimationMode::Lifeline,
            AnimationMode::Lifeline => AnimationMode::Off,
            AnimationMode::Off => AnimationMode::VerticalSweep,
        }
    }

    /// Stable tag for atomic storage. Inverse of [`from_tag`](Self::from_tag).
    #[must_use]
    pub fn to_tag(self) -> u8 {
        match self {
            AnimationMode::VerticalSweep => 0,
            AnimationMode::HorizontalSweep => 1,
            AnimationMode::Music => 2,
            AnimationMode::Lifeline => 3,
            AnimationMode::Off => 4,
        }
    }

    /// Decode a stored tag. Unknown tags fall back to the default mode
    /// rather than panicking; only [`to_tag`](Self::to_tag) values occur in
    /// practice.
    #[must_use]
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            1 => AnimationMode::HorizontalSweep,
            2 => AnimationMode::Music,
            3 => AnimationMode::Lifeline,
            4 => AnimationMode::Off,
            _ => AnimationMode::VerticalSweep,
        }
    }
}

/// LED panel chain driver.
pub trait LedDriver {
    /// Number of panels in the chain.
    fn panel_count(&self) -> usize;

    /// Blank every pixel of one panel.
    fn clear_panel(&mut self, panel: usize);

    /// Set one column of one panel; bit `n` of `bits` lights row `n`.
    fn set_column(&mut self, panel: usize, col: usize, bits: u8);

    /// Set one row of one panel; bit `n` of `bits` lights column `n`.
    fn set_row(&mut self, panel: usize, row: usize, bits: u8);

    /// Set one panel's intensity, `0..=15`.
    fn set_intensity(&mut self, panel: usize, level: u8);
}

/// Blank the whole chain.
pub fn clear_all<L: LedDriver>(driver: &mut L) {
    for panel in 0..driver.panel_count() {
        driver.clear_panel(panel);
    }
}

/// Apply one intensity level to the whole chain.
pub fn set_intensity_all<L: LedDriver>(driver: &mut L, level: u8) {
    for panel in 0..driver.panel_count() {
        driver.set_intensity(panel, level);
    }
}
