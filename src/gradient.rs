//! Two-stop gradient model.
//!
//! Exactly one stop is active at a time and receives subsequent color and
//! opacity edits. Stop positions are independent and may cross; the composed
//! description always lists start before end regardless of numeric order.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants;

/// Identifies one of the two gradient stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopId {
    Start,
    End,
}

/// A gradient color anchor: position along the axis plus a color
/// (opacity travels inside the color).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Percent along the gradient axis, 0–100.
    pub position: u8,
    pub color: Color,
}

impl GradientStop {
    /// Out-of-range positions are clamped.
    pub fn new(position: i32, color: Color) -> Self {
        Self {
            position: position.clamp(0, 100) as u8,
            color,
        }
    }
}

/// Editable state of a two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientState {
    pub start: GradientStop,
    pub end: GradientStop,
    /// Angle in degrees, 0–359.
    pub angle: u16,
    /// Which stop receives subsequent color/opacity edits.
    pub active: StopId,
}

impl Default for GradientState {
    /// White→black left-to-right gradient at 90°, start stop active.
    fn default() -> Self {
        Self {
            start: GradientStop::new(0, Color::rgb(255, 255, 255)),
            end: GradientStop::new(100, Color::rgb(0, 0, 0)),
            angle: constants::DEFAULT_ANGLE,
            active: StopId::Start,
        }
    }
}

impl GradientState {
    /// Switch which stop subsequent edits target. Always succeeds.
    pub fn set_active(&mut self, which: StopId) {
        self.active = which;
    }

    pub fn stop(&self, which: StopId) -> &GradientStop {
        match which {
            StopId::Start => &self.start,
            StopId::End => &self.end,
        }
    }

    fn stop_mut(&mut self, which: StopId) -> &mut GradientStop {
        match which {
            StopId::Start => &mut self.start,
            StopId::End => &mut self.end,
        }
    }

    /// The stop currently receiving edits.
    pub fn active_stop(&self) -> &GradientStop {
        self.stop(self.active)
    }

    /// Replace the active stop's RGB channels, keeping its opacity.
    pub fn update_active_color(&mut self, color: Color) {
        let stop = self.stop_mut(self.active);
        stop.color = stop.color.with_rgb_of(color);
    }

    /// Set the active stop's opacity percent, clamped to 0–100.
    pub fn update_active_opacity(&mut self, opacity: i32) {
        let stop = self.stop_mut(self.active);
        stop.color = stop.color.with_alpha(opacity);
    }

    /// Move a stop along the axis. Positions clamp to 0–100 but stops are
    /// never reordered: start may sit to the right of end.
    pub fn move_stop(&mut self, which: StopId, position: i32) {
        self.stop_mut(which).position = position.clamp(0, 100) as u8;
    }

    /// Set the gradient angle, wrapping into 0–359 (−10 becomes 350).
    pub fn set_angle(&mut self, degrees: i32) {
        self.angle = degrees.rem_euclid(360) as u16;
    }

    /// Composed description consumed by rendering. Stops are listed
    /// start-then-end regardless of their numeric positions.
    pub fn description(&self) -> GradientDescription {
        GradientDescription {
            angle: self.angle,
            stops: [self.start, self.end],
        }
    }
}

/// Linear-gradient description: angle plus the two stops in start/end order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientDescription {
    pub angle: u16,
    pub stops: [GradientStop; 2],
}

impl GradientDescription {
    /// CSS `linear-gradient(...)` form of the description.
    pub fn css(&self) -> String {
        let [start, end] = &self.stops;
        format!(
            "linear-gradient({}deg, {} {}%, {} {}%)",
            self.angle,
            start.color.rgba_string(),
            start.position,
            end.color.rgba_string(),
            end.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_only_touch_active_stop() {
        let mut state = GradientState::default();
        let end_before = state.end;
        state.set_active(StopId::Start);
        state.update_active_color(Color::rgb(255, 0, 0));
        state.update_active_opacity(40);
        state.move_stop(StopId::Start, 20);
        assert_eq!(state.end, end_before);
        assert_eq!(state.start.color.hex(), "FF0000");
        assert_eq!(state.start.color.alpha(), 40);
        assert_eq!(state.start.position, 20);
    }

    #[test]
    fn update_color_preserves_opacity() {
        let mut state = GradientState::default();
        state.update_active_opacity(30);
        state.update_active_color(Color::rgb(1, 2, 3));
        assert_eq!(state.active_stop().color.alpha(), 30);
    }

    #[test]
    fn stops_may_cross() {
        let mut state = GradientState::default();
        state.move_stop(StopId::Start, 80);
        state.move_stop(StopId::End, 30);
        assert_eq!(state.start.position, 80);
        assert_eq!(state.end.position, 30);
        // description order is still start-then-end
        let desc = state.description();
        assert_eq!(desc.stops[0].position, 80);
        assert_eq!(desc.stops[1].position, 30);
    }

    #[test]
    fn angle_wraps() {
        let mut state = GradientState::default();
        state.set_angle(370);
        assert_eq!(state.angle, 10);
        state.set_angle(-10);
        assert_eq!(state.angle, 350);
        state.set_angle(360);
        assert_eq!(state.angle, 0);
    }

    #[test]
    fn position_clamps() {
        let mut state = GradientState::default();
        state.move_stop(StopId::End, 180);
        assert_eq!(state.end.position, 100);
        state.move_stop(StopId::End, -5);
        assert_eq!(state.end.position, 0);
    }

    #[test]
    fn css_description() {
        let state = GradientState::default();
        assert_eq!(
            state.description().css(),
            "linear-gradient(90deg, rgb(255, 255, 255) 0%, rgb(0, 0, 0) 100%)"
        );
    }
}
