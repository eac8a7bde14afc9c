//! Color selection for game output
//!
//! Decorative text is printed in a color picked from a fixed palette. The
//! pick goes through [`ColorSource`] so tests can pin it.

use colored::Color;
use rand::prelude::IndexedRandom;

/// The ten colors decorative text is drawn in
pub const PALETTE: [Color; 10] = [
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
];

/// Supplies the color for the next piece of decorative text
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Uniform random pick from [`PALETTE`] on every call
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomColors;

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        PALETTE
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(Color::White)
    }
}

/// Always the same color
#[derive(Debug, Clone, Copy)]
pub struct FixedColor(pub Color);

impl ColorSource for FixedColor {
    fn next_color(&mut self) -> Color {
        self.0
    }
}
