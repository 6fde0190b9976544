//! Picker state controller — reconciles host props with edited state and
//! decides when to notify.
//!
//! Two entry-point families keep the prop/state synchronization loop-free:
//!
//! - notifying mutations (user gestures) emit exactly one `change` event
//!   carrying a full snapshot, plus the matching `update:single` /
//!   `update:gradient` event;
//! - silent syncs (`sync_single` / `sync_gradient`, the host pushing new
//!   props) overwrite state unconditionally and emit nothing.
//!
//! Breaking that asymmetry reintroduces the host↔widget feedback cycle.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::color::{Color, Hsv, SingleState};
use crate::config::PickerConfig;
use crate::gradient::{GradientState, StopId};
use crate::inputs;
use crate::mode::{ModeSwitch, PickerKind, PickerMode};
use crate::palette::Swatch;

/// Full-state snapshot delivered with every change notification. Only the
/// side being edited is populated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub is_gradient: bool,
    pub single: Option<SingleState>,
    pub gradient: Option<GradientState>,
}

type ChangeListener = Box<dyn FnMut(&ChangeEvent)>;
type SingleListener = Box<dyn FnMut(&SingleState)>;
type GradientListener = Box<dyn FnMut(&GradientState)>;

/// The picker controller: owns the editable state, the mode switch, and the
/// registered listeners. One instance per widget; nothing is shared.
pub struct ColorPicker {
    config: PickerConfig,
    mode: ModeSwitch,
    single: SingleState,
    gradient: GradientState,
    /// Last hue the user committed. `Color` cannot represent hue for
    /// achromatic colors, so the controller remembers it across gray.
    hue_memory: f64,
    change_listeners: Vec<ChangeListener>,
    single_listeners: Vec<SingleListener>,
    gradient_listeners: Vec<GradientListener>,
}

impl ColorPicker {
    pub fn new(config: PickerConfig) -> Self {
        let mode = ModeSwitch::new(config.style);
        let single = config.initial_single;
        let gradient = config.initial_gradient;
        let mut picker = Self {
            config,
            mode,
            single,
            gradient,
            hue_memory: 0.0,
            change_listeners: Vec::new(),
            single_listeners: Vec::new(),
            gradient_listeners: Vec::new(),
        };
        picker.hue_memory = picker.active_color().to_hsv().hue;
        picker
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn mode(&self) -> PickerMode {
        self.mode.mode()
    }

    pub fn is_gradient(&self) -> bool {
        self.mode.kind() == PickerKind::Gradient
    }

    pub fn single(&self) -> &SingleState {
        &self.single
    }

    pub fn gradient(&self) -> &GradientState {
        &self.gradient
    }

    /// The color currently being edited: the solid color, or the active
    /// gradient stop's color.
    pub fn active_color(&self) -> Color {
        match self.mode.kind() {
            PickerKind::Single => self.single.color,
            PickerKind::Gradient => self.gradient.active_stop().color,
        }
    }

    /// Opacity percent of the color currently being edited.
    pub fn opacity(&self) -> u8 {
        self.active_color().alpha()
    }

    /// HSV view of the active color with hue kept stable across achromatic
    /// colors (saturation or value 0 would otherwise collapse hue to 0).
    pub fn displayed_hsv(&self) -> Hsv {
        let hsv = self.active_color().to_hsv();
        if hsv.saturation == 0.0 || hsv.value == 0.0 {
            Hsv {
                hue: self.hue_memory,
                ..hsv
            }
        } else {
            hsv
        }
    }

    // ── Listeners ──────────────────────────────────────────────────────

    /// Register a `change` listener. Fired exactly once per user-gesture
    /// mutation, never for host prop syncs.
    pub fn on_change(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.change_listeners.push(Box::new(listener));
    }

    /// Register an `update:single` listener.
    pub fn on_single_update(&mut self, listener: impl FnMut(&SingleState) + 'static) {
        self.single_listeners.push(Box::new(listener));
    }

    /// Register an `update:gradient` listener.
    pub fn on_gradient_update(&mut self, listener: impl FnMut(&GradientState) + 'static) {
        self.gradient_listeners.push(Box::new(listener));
    }

    // ── Silent sync: host → picker ─────────────────────────────────────

    /// Overwrite solid state from a host prop push. Emits nothing.
    pub fn sync_single(&mut self, state: SingleState) {
        debug!("prop sync single {}", state.color);
        self.single = state;
        self.remember_hue(state.color);
    }

    /// Overwrite gradient state from a host prop push. Emits nothing.
    pub fn sync_gradient(&mut self, state: GradientState) {
        debug!("prop sync gradient");
        self.gradient = state;
        self.remember_hue(state.active_stop().color);
    }

    // ── Mode transitions (silent) ──────────────────────────────────────

    /// Switch between solid and gradient editing. Ignored when the
    /// configured style does not offer the requested kind.
    pub fn switch_kind(&mut self, kind: PickerKind) -> bool {
        let switched = self.mode.request_kind(kind);
        if switched {
            self.hue_memory = self.active_color().to_hsv().hue;
        }
        switched
    }

    /// Leave advanced editing (the "back" action).
    pub fn go_back(&mut self) -> bool {
        self.mode.go_back()
    }

    // ── Notifying mutations: user gestures ─────────────────────────────

    /// Replace the edited color's RGB channels, keeping its opacity.
    pub fn set_color(&mut self, color: Color) {
        self.put_rgb(color);
        self.notify();
    }

    /// Set the edited color's opacity. A no-op when the configuration has
    /// opacity disabled.
    pub fn set_opacity(&mut self, opacity: i32) {
        if !self.config.opacity_enabled {
            return;
        }
        self.put_alpha(opacity);
        self.notify();
    }

    /// Set the hue of the edited color, keeping saturation/value.
    ///
    /// Saturation and value floor at 1% so a hue edit on an achromatic color
    /// produces a visible change.
    pub fn set_hue(&mut self, hue: f64) {
        let current = self.displayed_hsv();
        let saturation = if current.saturation == 0.0 {
            1.0
        } else {
            current.saturation
        };
        let value = if current.value == 0.0 { 1.0 } else { current.value };
        let color = Color::from_hsv(
            Hsv {
                hue,
                saturation,
                value,
            },
            self.opacity() as i32,
        );
        self.hue_memory = hue;
        self.put_rgb(color);
        self.notify();
    }

    /// Set saturation/value of the edited color, keeping the displayed hue.
    pub fn set_saturation_value(&mut self, saturation: f64, value: f64) {
        let hue = self.displayed_hsv().hue;
        let color = Color::from_hsv(Hsv::new(hue, saturation, value), self.opacity() as i32);
        self.put_rgb(color);
        self.notify();
    }

    /// Apply a basic-palette swatch: a color swatch sets color and full
    /// opacity, the transparent swatch sets opacity 0, and the advance
    /// sentinel only switches into advanced editing (no state change, no
    /// notification).
    pub fn apply_swatch(&mut self, swatch: Swatch) {
        match swatch {
            Swatch::Advance => {
                self.mode.enter_advanced();
            }
            Swatch::Transparent => {
                self.put_rgb(Color::rgb(0, 0, 0));
                self.put_alpha(0);
                self.notify();
            }
            Swatch::Color(hex) => {
                let Ok(color) = Color::parse(hex) else {
                    return;
                };
                self.put_rgb(color);
                self.put_alpha(color.alpha() as i32);
                self.notify();
            }
        }
    }

    /// Set the gradient angle in degrees; wraps into 0–359. Ignored in
    /// solid mode.
    pub fn set_angle(&mut self, degrees: i32) {
        if !self.is_gradient() {
            return;
        }
        self.gradient.set_angle(degrees);
        self.notify();
    }

    /// Drag a gradient stop to a new position. The dragged stop becomes the
    /// active one, as grabbing a stop selects it. Ignored in solid mode.
    pub fn set_stop_position(&mut self, which: StopId, position: i32) {
        if !self.is_gradient() {
            return;
        }
        self.gradient.set_active(which);
        self.gradient.move_stop(which, position);
        self.notify();
    }

    /// Select which gradient stop receives subsequent edits. A pure state
    /// transition: always succeeds, emits nothing.
    pub fn set_active_stop(&mut self, which: StopId) {
        self.gradient.set_active(which);
        self.remember_hue(self.gradient.active_stop().color);
    }

    // ── Text-field commits (validated on blur) ─────────────────────────

    /// Commit the hex text field. Sets both color and opacity when the text
    /// parses; invalid text is discarded with no state change and no
    /// notification. Returns whether the commit was accepted.
    pub fn commit_hex_field(&mut self, input: &str) -> bool {
        match Color::parse(input) {
            Ok(color) => {
                self.put_rgb(color);
                self.put_alpha(color.alpha() as i32);
                self.notify();
                true
            }
            Err(err) => {
                debug!("hex commit ignored: {err}");
                false
            }
        }
    }

    /// Commit the opacity text field (`"25"` / `"25%"`).
    pub fn commit_opacity_field(&mut self, input: &str) -> bool {
        if !self.config.opacity_enabled {
            return false;
        }
        match inputs::parse_percent(input) {
            Some(percent) => {
                self.put_alpha(percent);
                self.notify();
                true
            }
            None => {
                debug!("opacity commit ignored: {input:?}");
                false
            }
        }
    }

    /// Commit the angle text field (`"90"` / `"90°"`).
    pub fn commit_angle_field(&mut self, input: &str) -> bool {
        if !self.is_gradient() {
            return false;
        }
        match inputs::parse_degrees(input) {
            Some(degrees) => {
                self.gradient.set_angle(degrees);
                self.notify();
                true
            }
            None => {
                debug!("angle commit ignored: {input:?}");
                false
            }
        }
    }

    // ── Internals ──────────────────────────────────────────────────────

    fn put_rgb(&mut self, color: Color) {
        match self.mode.kind() {
            PickerKind::Single => {
                self.single.color = self.single.color.with_rgb_of(color);
            }
            PickerKind::Gradient => self.gradient.update_active_color(color),
        }
        self.remember_hue(color);
    }

    fn put_alpha(&mut self, alpha: i32) {
        match self.mode.kind() {
            PickerKind::Single => {
                self.single.color = self.single.color.with_alpha(alpha);
            }
            PickerKind::Gradient => self.gradient.update_active_opacity(alpha),
        }
    }

    fn remember_hue(&mut self, color: Color) {
        let hsv = color.to_hsv();
        if hsv.saturation > 0.0 && hsv.value > 0.0 {
            self.hue_memory = hsv.hue;
        }
    }

    /// Fire `update:*` and `change` for the side being edited — exactly one
    /// `change` per mutation.
    fn notify(&mut self) {
        if self.is_gradient() {
            let snapshot = self.gradient;
            trace!("notify gradient {}", snapshot.description().css());
            for listener in &mut self.gradient_listeners {
                listener(&snapshot);
            }
            let event = ChangeEvent {
                is_gradient: true,
                single: None,
                gradient: Some(snapshot),
            };
            for listener in &mut self.change_listeners {
                listener(&event);
            }
        } else {
            let snapshot = self.single;
            trace!("notify single {}", snapshot.color);
            for listener in &mut self.single_listeners {
                listener(&snapshot);
            }
            let event = ChangeEvent {
                is_gradient: false,
                single: Some(snapshot),
                gradient: None,
            };
            for listener in &mut self.change_listeners {
                listener(&event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{EditMode, PickerStyle};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_picker(config: PickerConfig) -> (ColorPicker, Rc<Cell<usize>>) {
        let mut picker = ColorPicker::new(config);
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        picker.on_change(move |_| seen.set(seen.get() + 1));
        (picker, count)
    }

    #[test]
    fn every_mutation_emits_exactly_once() {
        let (mut picker, count) = counting_picker(PickerConfig::default());
        picker.set_color(Color::rgb(10, 20, 30));
        picker.set_opacity(40);
        picker.set_hue(120.0);
        picker.set_saturation_value(50.0, 50.0);
        picker.commit_hex_field("#abcdef");
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn prop_sync_is_silent() {
        let (mut picker, count) = counting_picker(PickerConfig::default());
        picker.sync_single(SingleState::new(Color::rgb(1, 2, 3)));
        picker.sync_gradient(GradientState::default());
        assert_eq!(count.get(), 0);
        assert_eq!(picker.single().color, Color::rgb(1, 2, 3));
    }

    #[test]
    fn hue_memory_survives_achromatic_colors() {
        let mut picker = ColorPicker::new(PickerConfig::default());
        picker.set_hue(200.0);
        // drop to white: saturation 0, hue would be lost without memory
        picker.set_saturation_value(0.0, 100.0);
        assert_eq!(picker.displayed_hsv().hue, 200.0);
    }

    #[test]
    fn hue_edit_on_white_floors_saturation() {
        let mut picker = ColorPicker::new(PickerConfig::default());
        picker.sync_single(SingleState::new(Color::rgb(255, 255, 255)));
        picker.set_hue(0.0);
        // no longer pure white, so the hue edit is observable
        let hsv = picker.single().color.to_hsv();
        assert!(hsv.saturation > 0.0);
    }

    #[test]
    fn opacity_disabled_ignores_edits() {
        let config = PickerConfig {
            opacity_enabled: false,
            ..PickerConfig::default()
        };
        let (mut picker, count) = counting_picker(config);
        picker.set_opacity(10);
        assert!(!picker.commit_opacity_field("10"));
        assert_eq!(picker.opacity(), 100);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn invalid_commits_keep_prior_state() {
        let (mut picker, count) = counting_picker(PickerConfig::default());
        let before = *picker.single();
        assert!(!picker.commit_hex_field("#zzz"));
        assert!(!picker.commit_opacity_field("lots"));
        assert_eq!(*picker.single(), before);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn advance_swatch_switches_mode_without_notifying() {
        let (mut picker, count) = counting_picker(PickerConfig::default());
        picker.apply_swatch(Swatch::Advance);
        assert_eq!(picker.mode().edit, EditMode::Advanced);
        assert_eq!(count.get(), 0);
        assert!(picker.go_back());
        assert_eq!(picker.mode().edit, EditMode::Basic);
    }

    #[test]
    fn transparent_swatch_zeroes_opacity() {
        let (mut picker, count) = counting_picker(PickerConfig::default());
        picker.apply_swatch(Swatch::Transparent);
        assert_eq!(picker.single().color.alpha(), 0);
        assert_eq!(picker.single().color.hex(), "000000");
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn gradient_edits_route_to_active_stop() {
        let mut picker = ColorPicker::new(PickerConfig {
            style: PickerStyle::Gradient,
            ..PickerConfig::default()
        });
        picker.set_active_stop(StopId::End);
        picker.set_color(Color::rgb(9, 9, 9));
        assert_eq!(picker.gradient().end.color.hex(), "090909");
        // start untouched
        assert_eq!(picker.gradient().start.color.hex(), "FFFFFF");
    }

    #[test]
    fn angle_field_commits_wrap() {
        let mut picker = ColorPicker::new(PickerConfig {
            style: PickerStyle::Gradient,
            ..PickerConfig::default()
        });
        assert!(picker.commit_angle_field("370"));
        assert_eq!(picker.gradient().angle, 10);
        assert!(picker.commit_angle_field("-10°"));
        assert_eq!(picker.gradient().angle, 350);
    }

    #[test]
    fn solid_mode_ignores_gradient_gestures() {
        let (mut picker, count) = counting_picker(PickerConfig {
            style: PickerStyle::Single,
            ..PickerConfig::default()
        });
        picker.set_angle(45);
        picker.set_stop_position(StopId::End, 30);
        assert_eq!(count.get(), 0);
    }
}
