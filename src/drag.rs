//! Drag-gesture sessions tying pointer geometry to the controller.
//!
//! A session is created on pointer press, fed every move, and consumed on
//! release. Press, move, and release all apply the same mapping, so a plain
//! click behaves like a zero-length drag. Sessions are independent of any
//! input-event system; the host adapter feeds them whatever its event loop
//! delivers.

use log::trace;

use crate::controller::ColorPicker;
use crate::geometry::{self, Track};
use crate::gradient::StopId;

/// Pointer position in track-local logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Which control a drag session edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Hue,
    SaturationValue,
    Opacity,
    Stop(StopId),
}

/// A short-lived pointer-drag session over one control.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    target: DragTarget,
    track: Track,
}

impl DragSession {
    /// Begin a session for `target` over a track measured at press time.
    pub fn new(target: DragTarget, track: Track) -> Self {
        Self { target, track }
    }

    pub fn target(&self) -> DragTarget {
        self.target
    }

    /// Pointer press.
    pub fn start(&mut self, picker: &mut ColorPicker, point: Point) {
        self.apply(picker, point);
    }

    /// Pointer move while held. Positions past the track edges are fine;
    /// the geometry mapping clamps.
    pub fn update(&mut self, picker: &mut ColorPicker, point: Point) {
        self.apply(picker, point);
    }

    /// Pointer release; consumes the session.
    pub fn end(self, picker: &mut ColorPicker, point: Point) {
        self.apply(picker, point);
    }

    /// Map the pointer through the track geometry and push the result into
    /// the controller. Unmeasured geometry drops the update.
    fn apply(&self, picker: &mut ColorPicker, point: Point) {
        trace!("drag {:?} at ({}, {})", self.target, point.x, point.y);
        match self.target {
            DragTarget::Hue => {
                if let Ok(hue) = geometry::hue_from_x(point.x, self.track) {
                    picker.set_hue(hue as f64);
                }
            }
            DragTarget::SaturationValue => {
                if let Ok((saturation, value)) =
                    geometry::saturation_value_from_xy(point.x, point.y, self.track)
                {
                    picker.set_saturation_value(saturation as f64, value as f64);
                }
            }
            DragTarget::Opacity => {
                if let Ok(percent) = geometry::opacity_from_x(point.x, self.track) {
                    picker.set_opacity(percent as i32);
                }
            }
            DragTarget::Stop(which) => {
                if let Ok(position) = geometry::stop_position_from_x(point.x, self.track) {
                    picker.set_stop_position(which, position as i32);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;

    #[test]
    fn unmeasured_track_drops_updates() {
        let mut picker = ColorPicker::new(PickerConfig::default());
        let before = *picker.single();
        let mut session = DragSession::new(DragTarget::Opacity, Track::new(0.0, 0.0));
        session.start(&mut picker, Point { x: 10.0, y: 5.0 });
        session.end(&mut picker, Point { x: 20.0, y: 5.0 });
        assert_eq!(*picker.single(), before);
    }

    #[test]
    fn click_is_a_zero_length_drag() {
        let mut picker = ColorPicker::new(PickerConfig::default());
        let session = DragSession::new(DragTarget::Opacity, Track::new(214.0, 16.0));
        session.end(&mut picker, Point { x: 57.0, y: 8.0 });
        assert_eq!(picker.single().color.alpha(), 25);
    }
}
