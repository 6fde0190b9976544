//! # colorpicker-core
//!
//! Framework-agnostic core for a solid/gradient color-picker widget: the
//! pointer-geometry math, color model, two-stop gradient model, and the
//! state controller that reconciles host props with user edits.
//!
//! Rendering, event delivery, and popup positioning stay in the host. The
//! host measures its tracks, feeds pointer events through [`DragSession`],
//! pushes prop updates with the silent `sync_*` methods, and listens for
//! `change` events — which fire exactly once per user gesture and never for
//! a prop push, so the two directions cannot feed back into each other.
//!
//! ```rust
//! use colorpicker_core::{
//!     ColorPicker, DragSession, DragTarget, PickerConfig, Point, Track,
//! };
//!
//! let mut picker = ColorPicker::new(PickerConfig::default());
//! picker.on_change(|event| {
//!     if let Some(single) = &event.single {
//!         println!("color is now {}", single.color);
//!     }
//! });
//!
//! // The host delivers pointer events for the opacity slider:
//! let mut session = DragSession::new(DragTarget::Opacity, Track::new(214.0, 16.0));
//! session.start(&mut picker, Point { x: 110.0, y: 8.0 });
//! session.update(&mut picker, Point { x: 80.0, y: 8.0 });
//! session.end(&mut picker, Point { x: 57.0, y: 8.0 });
//! assert_eq!(picker.single().color.alpha(), 25);
//! ```

mod color;
mod config;
mod constants;
mod controller;
mod drag;
pub mod geometry;
mod gradient;
mod inputs;
mod math;
mod mode;
mod names;
mod palette;

pub use color::{Color, Hsv, ParseError, SingleState};
pub use config::{PickerConfig, Placement, PopupShape};
pub use constants::{DEFAULT_HANDLE_OFFSET, HANDLE_RADIUS};
pub use controller::{ChangeEvent, ColorPicker};
pub use drag::{DragSession, DragTarget, Point};
pub use geometry::{GeometryError, Track};
pub use gradient::{GradientDescription, GradientState, GradientStop, StopId};
pub use inputs::{parse_degrees, parse_percent};
pub use mode::{EditMode, PickerKind, PickerMode, PickerStyle};
pub use palette::{Swatch, DEFAULT_PALETTE};
