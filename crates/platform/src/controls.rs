//! Front-panel controls: four momentary buttons and two analog pots.

/// Physical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Previous track.
    Previous,
    /// Play / pause toggle.
    Play,
    /// Next track.
    Next,
    /// Cycle the LED animation mode.
    Animation,
}

impl Button {
    /// All buttons, in debounce-timer order.
    pub const ALL: [Button; 4] = [
        Button::Previous,
        Button::Play,
        Button::Next,
        Button::Animation,
    ];

    /// Stable index into per-button timer tables.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Button::Previous => 0,
            Button::Play => 1,
            Button::Next => 2,
            Button::Animation => 3,
        }
    }
}

/// Raw front-panel sampling. Debouncing happens above this trait.
pub trait Controls {
    /// Whether `button` currently reads as pressed (active level already
    /// resolved by the implementation; pull-ups are not this layer's concern).
    fn is_pressed(&mut self, button: Button) -> bool;

    /// Raw volume pot reading, `0..=`[`ADC_MAX`](crate::config::ADC_MAX).
    fn volume_raw(&mut self) -> u16;

    /// Raw brightness pot reading, `0..=`[`ADC_MAX`](crate::config::ADC_MAX).
    fn brightness_raw(&mut self) -> u16;
}
