//! Pointer geometry — maps pointer positions on measured tracks to picker
//! values and back.
//!
//! 1D tracks (hue, opacity, gradient stops) inset their usable range by the
//! handle radius on both ends so the handle stays fully visible at the
//! extremes; the 2D saturation/value area uses its full rect. Forward
//! mappings round to the nearest integer value, so a round trip through an
//! inverse loses at most half a unit. Drags may continue past the widget
//! edges: every mapping clamps.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

/// Track layout as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub width: f64,
    pub height: f64,
    /// Half-size of the draggable handle in the same units as `width`.
    pub handle_radius: f64,
}

impl Track {
    /// Track with the default handle radius.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            handle_radius: constants::HANDLE_RADIUS,
        }
    }

    pub fn with_handle_radius(mut self, handle_radius: f64) -> Self {
        self.handle_radius = handle_radius;
        self
    }

    /// Width left for the handle center to travel on 1D tracks.
    fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.handle_radius
    }

    /// False until the host has measured a real layout.
    fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Geometry that cannot be mapped yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The track is unmeasured (zero-sized, or too narrow for its handle).
    /// Callers recover by dropping the update or using
    /// [`constants::DEFAULT_HANDLE_OFFSET`].
    #[error("track geometry unavailable")]
    Unavailable,
}

fn usable_1d(track: Track) -> Result<f64, GeometryError> {
    let usable = track.usable_width();
    if !track.is_measured() || usable <= 0.0 {
        return Err(GeometryError::Unavailable);
    }
    Ok(usable)
}

/// Map a clamped x across the inset track onto 0–360 degrees.
///
/// The right edge produces 360, which is deliberately not wrapped to 0 so
/// the handle renders at the end of the track rather than snapping back.
pub fn hue_from_x(x: f64, track: Track) -> Result<u16, GeometryError> {
    let usable = usable_1d(track)?;
    let left = x.clamp(track.handle_radius, track.width - track.handle_radius);
    Ok((((left - track.handle_radius) / usable) * 360.0).round() as u16)
}

/// Handle x for a stored hue; exact inverse of [`hue_from_x`] aside from
/// rounding. Unmeasured tracks yield the default handle offset.
pub fn x_from_hue(hue: f64, track: Track) -> f64 {
    let Ok(usable) = usable_1d(track) else {
        return constants::DEFAULT_HANDLE_OFFSET;
    };
    if hue >= 360.0 {
        return track.width - track.handle_radius;
    }
    (hue.rem_euclid(360.0) / 360.0) * usable + track.handle_radius
}

/// Map a clamped x across the inset track onto 0–100 percent.
pub fn percent_from_x(x: f64, track: Track) -> Result<u8, GeometryError> {
    let usable = usable_1d(track)?;
    let left = x.clamp(track.handle_radius, track.width - track.handle_radius);
    Ok((((left - track.handle_radius) / usable) * 100.0).round() as u8)
}

/// Handle x for a stored percent; inverse of [`percent_from_x`].
pub fn x_from_percent(percent: f64, track: Track) -> f64 {
    let Ok(usable) = usable_1d(track) else {
        return constants::DEFAULT_HANDLE_OFFSET;
    };
    (percent.clamp(0.0, 100.0) / 100.0) * usable + track.handle_radius
}

/// Opacity slider mapping: the shared percent mapping under its own name.
pub fn opacity_from_x(x: f64, track: Track) -> Result<u8, GeometryError> {
    percent_from_x(x, track)
}

pub fn x_from_opacity(opacity: f64, track: Track) -> f64 {
    x_from_percent(opacity, track)
}

/// Gradient-stop position mapping along the gradient bar.
pub fn stop_position_from_x(x: f64, track: Track) -> Result<u8, GeometryError> {
    percent_from_x(x, track)
}

pub fn x_from_stop_position(position: f64, track: Track) -> f64 {
    x_from_percent(position, track)
}

/// Map a pointer position in the 2D area onto (saturation, value) percents.
/// Saturation grows left→right, value grows bottom→top; both clamp.
pub fn saturation_value_from_xy(
    x: f64,
    y: f64,
    track: Track,
) -> Result<(u8, u8), GeometryError> {
    if !track.is_measured() {
        return Err(GeometryError::Unavailable);
    }
    let left = x.clamp(0.0, track.width);
    let top = y.clamp(0.0, track.height);
    let saturation = ((left / track.width) * 100.0).round() as u8;
    let value = (((1.0 - top / track.height).clamp(0.0, 1.0)) * 100.0).round() as u8;
    Ok((saturation, value))
}

/// Pointer position for stored (saturation, value) percents; inverse of
/// [`saturation_value_from_xy`]. Unmeasured tracks yield the origin.
pub fn xy_from_saturation_value(saturation: f64, value: f64, track: Track) -> (f64, f64) {
    if !track.is_measured() {
        return (0.0, 0.0);
    }
    (
        (saturation.clamp(0.0, 100.0) / 100.0) * track.width,
        (1.0 - value.clamp(0.0, 100.0) / 100.0) * track.height,
    )
}
