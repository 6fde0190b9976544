//! Solid/gradient and basic/advanced mode switching.
//!
//! A small two-axis state machine. Kind requests are validated against the
//! configured capability; a request the configuration does not permit is
//! ignored, not an error.

use log::debug;
use serde::{Deserialize, Serialize};

/// Which picker kinds the host configuration permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerStyle {
    Single,
    Gradient,
    Both,
}

/// The picker kind currently being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerKind {
    Single,
    Gradient,
}

/// Palette-swatch selection vs continuous slider editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    Basic,
    Advanced,
}

/// Combined mode snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerMode {
    pub kind: PickerKind,
    pub edit: EditMode,
}

/// Two-axis mode switch.
#[derive(Debug, Clone)]
pub struct ModeSwitch {
    style: PickerStyle,
    kind: PickerKind,
    edit: EditMode,
}

impl ModeSwitch {
    /// Initial kind follows the configured style: a gradient-only picker
    /// opens in gradient mode, everything else opens in single mode.
    pub fn new(style: PickerStyle) -> Self {
        let kind = match style {
            PickerStyle::Gradient => PickerKind::Gradient,
            PickerStyle::Single | PickerStyle::Both => PickerKind::Single,
        };
        Self {
            style,
            kind,
            edit: EditMode::Basic,
        }
    }

    pub fn mode(&self) -> PickerMode {
        PickerMode {
            kind: self.kind,
            edit: self.edit,
        }
    }

    pub fn kind(&self) -> PickerKind {
        self.kind
    }

    pub fn edit(&self) -> EditMode {
        self.edit
    }

    /// Whether the configured style permits the given kind.
    pub fn allows(&self, kind: PickerKind) -> bool {
        match self.style {
            PickerStyle::Both => true,
            PickerStyle::Single => kind == PickerKind::Single,
            PickerStyle::Gradient => kind == PickerKind::Gradient,
        }
    }

    /// Request a kind switch. Returns whether the kind actually changed;
    /// requests the configuration does not permit are ignored.
    pub fn request_kind(&mut self, kind: PickerKind) -> bool {
        if !self.allows(kind) {
            debug!("kind request {kind:?} not permitted by {:?}", self.style);
            return false;
        }
        if self.kind == kind {
            return false;
        }
        debug!("kind {:?} -> {kind:?}", self.kind);
        self.kind = kind;
        true
    }

    /// Basic → Advanced, triggered by the palette's `advance` swatch.
    pub fn enter_advanced(&mut self) -> bool {
        if self.edit == EditMode::Advanced {
            return false;
        }
        self.edit = EditMode::Advanced;
        true
    }

    /// Advanced → Basic, triggered by the explicit back action.
    pub fn go_back(&mut self) -> bool {
        if self.edit == EditMode::Basic {
            return false;
        }
        self.edit = EditMode::Basic;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_kind_follows_style() {
        assert_eq!(ModeSwitch::new(PickerStyle::Single).kind(), PickerKind::Single);
        assert_eq!(
            ModeSwitch::new(PickerStyle::Gradient).kind(),
            PickerKind::Gradient
        );
        assert_eq!(ModeSwitch::new(PickerStyle::Both).kind(), PickerKind::Single);
    }

    #[test]
    fn single_only_ignores_gradient_requests() {
        let mut mode = ModeSwitch::new(PickerStyle::Single);
        assert!(!mode.request_kind(PickerKind::Gradient));
        assert_eq!(mode.kind(), PickerKind::Single);
    }

    #[test]
    fn both_allows_toggling() {
        let mut mode = ModeSwitch::new(PickerStyle::Both);
        assert!(mode.request_kind(PickerKind::Gradient));
        assert_eq!(mode.kind(), PickerKind::Gradient);
        assert!(mode.request_kind(PickerKind::Single));
        // no-op request reports no change
        assert!(!mode.request_kind(PickerKind::Single));
    }

    #[test]
    fn advanced_round_trip() {
        let mut mode = ModeSwitch::new(PickerStyle::Both);
        assert_eq!(mode.edit(), EditMode::Basic);
        assert!(mode.enter_advanced());
        assert!(!mode.enter_advanced());
        assert_eq!(mode.edit(), EditMode::Advanced);
        assert!(mode.go_back());
        assert_eq!(mode.edit(), EditMode::Basic);
    }
}
