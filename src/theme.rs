//! Theme module for folio-tui
//!
//! Centralized color palette and styling constants for the dark
//! "terminal portfolio" aesthetic: deep background, green primary,
//! red accent for the Redis lane.

use ratatui::style::Color;
use ratatui::symbols::border;

/// Rounded border set used by every card in the UI
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color - near black (#0b0f0c)
pub const BG_PRIMARY: Color = Color::Rgb(11, 15, 12);

/// Secondary background color - card surfaces (#121812)
pub const BG_SECONDARY: Color = Color::Rgb(18, 24, 18);

/// Tertiary background color - highlighted cards (#1a231a)
pub const BG_TERTIARY: Color = Color::Rgb(26, 35, 26);

/// Subtle border color (#1f2a20)
pub const BORDER_SUBTLE: Color = Color::Rgb(31, 42, 32);

// ============================================================================
// Accent Colors - Green Primary / Red Secondary
// ============================================================================

/// Primary green accent (#4ade80)
pub const GREEN_PRIMARY: Color = Color::Rgb(74, 222, 128);

/// Dimmed green for secondary elements (#22794a)
pub const GREEN_DIM: Color = Color::Rgb(34, 121, 74);

/// Red accent - the Redis lane and error banners (#f87171)
pub const RED_ACCENT: Color = Color::Rgb(248, 113, 113);

/// Dimmed red (#9a3f3f)
pub const RED_DIM: Color = Color::Rgb(154, 63, 63);

// ============================================================================
// Status Colors
// ============================================================================

/// Success banner color (#22c55e)
pub const GREEN_SUCCESS: Color = Color::Rgb(34, 197, 94);

/// Amber for in-development badges (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Alternate between two colors on the animation tick.
///
/// Used for the typewriter caret and the "current position" dot; flips
/// roughly twice a second at the 100ms tick cadence.
pub fn pulse_color(tick: u64, bright: Color, dim: Color) -> Color {
    if (tick / 5) % 2 == 0 { bright } else { dim }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_color_alternates() {
        let a = pulse_color(0, GREEN_PRIMARY, GREEN_DIM);
        let b = pulse_color(5, GREEN_PRIMARY, GREEN_DIM);
        assert_ne!(a, b);
        assert_eq!(a, pulse_color(10, GREEN_PRIMARY, GREEN_DIM));
    }
}
