//! Host-facing configuration.

use serde::{Deserialize, Serialize};

use crate::color::SingleState;
use crate::constants;
use crate::gradient::GradientState;
use crate::mode::PickerStyle;

/// Preferred popup placement. Pure data — the crate never positions
/// anything; hosts forward this to their own positioning utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    Auto,
    Top,
    TopStart,
    TopEnd,
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    Right,
}

/// Trigger swatch shape when the picker is shown as a popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopupShape {
    Square,
    Round,
}

/// Widget configuration supplied by the host at mount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Which kinds the picker offers; `Both` adds the solid/gradient tabs.
    pub style: PickerStyle,
    pub as_popup: bool,
    pub popup_shape: PopupShape,
    pub initial_single: SingleState,
    pub initial_gradient: GradientState,
    /// When false, opacity controls are absent and opacity edits are ignored.
    pub opacity_enabled: bool,
    pub placement: Placement,
    pub z_index: u32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            style: PickerStyle::Both,
            as_popup: false,
            popup_shape: PopupShape::Square,
            initial_single: SingleState::default(),
            initial_gradient: GradientState::default(),
            opacity_enabled: true,
            placement: Placement::Auto,
            z_index: constants::DEFAULT_Z_INDEX,
        }
    }
}
