//! Minimal host: drives the picker from code and prints what it emits.
//!
//! Run with `RUST_LOG=debug` to watch the controller's transitions.

use colorpicker_core::{
    Color, ColorPicker, DragSession, DragTarget, PickerConfig, PickerKind, Point, StopId, Track,
};

fn main() {
    env_logger::init();

    let mut picker = ColorPicker::new(PickerConfig::default());
    picker.on_change(|event| {
        if let Some(single) = &event.single {
            println!("change: {} @ {}%", single.color, single.color.alpha());
        }
        if let Some(gradient) = &event.gradient {
            println!("change: {}", gradient.description().css());
        }
    });

    // Solid edits
    picker.set_color(Color::parse("#3B82F6").unwrap());
    picker.commit_opacity_field("80%");

    // A drag across the hue slider
    let track = Track::new(214.0, 16.0);
    let mut session = DragSession::new(DragTarget::Hue, track);
    session.start(&mut picker, Point { x: 7.0, y: 8.0 });
    session.update(&mut picker, Point { x: 107.0, y: 8.0 });
    session.end(&mut picker, Point { x: 207.0, y: 8.0 });

    // Gradient edits
    picker.switch_kind(PickerKind::Gradient);
    picker.set_stop_position(StopId::End, 30);
    picker.commit_angle_field("135°");
}
