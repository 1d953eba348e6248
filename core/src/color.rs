use std::fmt;
use serde::{Deserialize, Serialize};

/// Fill color of a molecule. Green is always zero in the speed gradient,
/// but the channel is kept so any renderer can take the value as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Color of a molecule that hasn't been through a frame yet.
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }

    /// `#rrggbb`, the form canvas-like surfaces take as fill.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLUE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Position of `speed` on the gradient, clamped above at 1.
///
/// A non-positive reference can't normalize anything and puts every molecule at 0.
pub fn speed_ratio(speed: f64, reference_max_speed: f64) -> f64 {
    if !(reference_max_speed > 0.0) {
        return 0.0;
    }
    (speed / reference_max_speed).min(1.0)
}

/// Maps a speed to a blue (slow) .. red (fast) color relative to `reference_max_speed`.
pub fn color_for(speed: f64, reference_max_speed: f64) -> Rgb {
    let ratio = speed_ratio(speed, reference_max_speed);
    let red = (255.0 * ratio).round() as u8;
    let blue = (255.0 * (1.0 - ratio)).round() as u8;
    Rgb::new(red, 0, blue)
}
