//! The five-mode animation state machine.
//!
//! Each tick clears the whole chain, adopts a newly-selected mode (resetting
//! the step counter), then draws one frame. Logical column `c` lives on
//! logical panel `c / 8`; the chain is wired in reverse, so logical panel `p`
//! is physical panel `count - 1 - p`. Music mode is the one exception and
//! addresses panels logically, so its bars run in the opposite direction.

use platform::config::{COLS_PER_PANEL, MAX_PANELS};
use platform::matrix::{clear_all, AnimationMode, LedDriver};
use platform::config::{MATRIX_MUSIC_PERIOD_MS, MATRIX_OFF_PERIOD_MS, MATRIX_PERIOD_MS};

use crate::rng::Rng;

/// Capacity of the lifeline shift register (one byte per logical column).
pub const MAX_COLUMNS: usize = MAX_PANELS * COLS_PER_PANEL;

/// Flat baseline byte of the lifeline trace (row 4 lit).
pub const LIFELINE_BASE: u8 = 0b0001_0000;

/// Rising/falling edge of a blip (ticks 3 and 1 of the countdown).
pub const BLIP_EDGE: u8 = 0b0011_0000;

/// Peak of a blip (tick 2 of the countdown).
pub const BLIP_PEAK: u8 = 0b0111_1000;

/// Tick period for `mode`, in milliseconds.
#[must_use]
pub fn period_ms(mode: AnimationMode) -> u64 {
    match mode {
        AnimationMode::Music => MATRIX_MUSIC_PERIOD_MS,
        AnimationMode::Off => MATRIX_OFF_PERIOD_MS,
        _ => MATRIX_PERIOD_MS,
    }
}

/// Animation state: adopted mode, step counter, lifeline register, PRNG.
pub struct AnimationEngine {
    active: AnimationMode,
    step: usize,
    lifeline: heapless::Vec<u8, MAX_COLUMNS>,
    blip_countdown: u8,
    rng: Rng,
}

impl AnimationEngine {
    /// Engine in the default mode at step zero.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            active: AnimationMode::VerticalSweep,
            step: 0,
            lifeline: heapless::Vec::new(),
            blip_countdown: 0,
            rng: Rng::new(seed),
        }
    }

    /// The mode the engine last adopted.
    #[must_use]
    pub fn active_mode(&self) -> AnimationMode {
        self.active
    }

    /// Current step counter.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Advance one frame: clear, adopt `selected` if it changed (resetting
    /// the step counter), draw.
    pub fn tick<L: LedDriver>(&mut self, selected: AnimationMode, driver: &mut L) {
        clear_all(driver);

        if selected != self.active {
            self.active = selected;
            self.step = 0;
        }

        match self.active {
            AnimationMode::VerticalSweep => self.vertical_sweep(driver),
            AnimationMode::HorizontalSweep => self.horizontal_sweep(driver),
            AnimationMode::Music => self.music(driver),
            AnimationMode::Lifeline => self.lifeline(driver),
            AnimationMode::Off => {} // per-tick clear already blanked the chain
        }
    }

    /// One lit column sweeping from the last logical column back to the
    /// first.
    #[allow(clippy::arithmetic_side_effects)] // Safety: col < total = panel_count * 8, so col / 8 < panel_count
    fn vertical_sweep<L: LedDriver>(&mut self, driver: &mut L) {
        let total = total_columns(driver);
        if total == 0 {
            return;
        }
        let col = total.saturating_sub(1).saturating_sub(self.step);
        let panel = driver.panel_count().saturating_sub(1) - col / COLS_PER_PANEL;
        driver.set_column(panel, col % COLS_PER_PANEL, 0xFF);
        self.advance(total);
    }

    /// One lit row per tick, 8 rows per panel, low-numbered panels last.
    #[allow(clippy::arithmetic_side_effects)] // Safety: step < total by advance(), so step / 8 < panel_count
    fn horizontal_sweep<L: LedDriver>(&mut self, driver: &mut L) {
        let total = total_columns(driver);
        if total == 0 {
            return;
        }
        let row = 7 - self.step % 8;
        let panel = driver.panel_count().saturating_sub(1) - self.step / 8;
        driver.set_row(panel, row, 0xFF);
        self.advance(total);
    }

    /// Random level-meter bars, no temporal memory between ticks.
    fn music<L: LedDriver>(&mut self, driver: &mut L) {
        let total = total_columns(driver);
        for col in 0..total {
            let height = self.rng.range(9);
            #[allow(clippy::cast_possible_truncation)] // height ≤ 8
            let bits = (1_u16 << height).wrapping_sub(1) as u8;
            driver.set_column(col / COLS_PER_PANEL, col % COLS_PER_PANEL, bits);
        }
    }

    /// ECG trace: shift the register toward column zero, then fill the
    /// newest column with either the next blip sample or the baseline.
    #[allow(clippy::arithmetic_side_effects)] // Safety: col < total <= panel_count * 8, so col / 8 < panel_count
    fn lifeline<L: LedDriver>(&mut self, driver: &mut L) {
        let total = total_columns(driver).min(MAX_COLUMNS);
        if total == 0 {
            return;
        }
        while self.lifeline.len() < total {
            let _ = self.lifeline.push(0);
        }
        let roll = self.rng.range(10);
        let data = self.lifeline.as_mut_slice();
        if let Some(window) = data.get_mut(..total) {
            lifeline_advance(window, &mut self.blip_countdown, roll);
        }

        let panels = driver.panel_count();
        for (col, &bits) in self.lifeline.iter().enumerate().take(total) {
            let panel = panels.saturating_sub(1) - col / COLS_PER_PANEL;
            driver.set_column(panel, col % COLS_PER_PANEL, bits);
        }
    }

    fn advance(&mut self, total: usize) {
        self.step = self.step.saturating_add(1);
        if self.step >= total {
            self.step = 0;
        }
    }
}

fn total_columns<L: LedDriver>(driver: &L) -> usize {
    driver.panel_count().saturating_mul(COLS_PER_PANEL)
}

/// Advance the lifeline shift register by one tick.
///
/// Shifts every value one position toward index 0 (discarding the oldest),
/// then fills the newest cell: a pending blip plays edge/peak/edge over the
/// 3-tick countdown; otherwise the baseline is inserted and `roll == 0`
/// (a 1-in-10 event) arms a new blip.
pub fn lifeline_advance(data: &mut [u8], blip_countdown: &mut u8, roll: u32) {
    let len = data.len();
    if len == 0 {
        return;
    }
    data.copy_within(1.., 0);

    let newest = match *blip_countdown {
        3 | 1 => {
            *blip_countdown = blip_countdown.saturating_sub(1);
            BLIP_EDGE
        }
        2 => {
            *blip_countdown = blip_countdown.saturating_sub(1);
            BLIP_PEAK
        }
        _ => {
            if roll == 0 {
                *blip_countdown = 3;
            }
            LIFELINE_BASE
        }
    };
    if let Some(last) = data.last_mut() {
        *last = newest;
    }
}
