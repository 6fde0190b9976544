//! Basic-mode palette: the fixed swatch grid shown before the user opens
//! the advanced sliders.

/// A palette cell. `Advance` is the sentinel cell that switches the picker
/// into advanced editing instead of applying a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Color(&'static str),
    Transparent,
    Advance,
}

use Swatch::Color as C;

/// The default 6×9 palette, top row to bottom row.
pub const DEFAULT_PALETTE: [[Swatch; 9]; 6] = [
    [
        C("#fcc02e"),
        C("#f67c01"),
        C("#e64a19"),
        C("#d81b43"),
        C("#8e24aa"),
        C("#512da7"),
        C("#1f87e8"),
        C("#008781"),
        C("#05a045"),
    ],
    [
        C("#fed835"),
        C("#fb8c00"),
        C("#f5511e"),
        C("#eb1d4e"),
        C("#9c28b1"),
        C("#5d35b0"),
        C("#2097f3"),
        C("#029688"),
        C("#4cb050"),
    ],
    [
        C("#ffeb3c"),
        C("#ffa727"),
        C("#fe5722"),
        C("#eb4165"),
        C("#aa47bc"),
        C("#673bb7"),
        C("#42a5f6"),
        C("#26a59a"),
        C("#83c683"),
    ],
    [
        C("#fff176"),
        C("#ffb74e"),
        C("#ff8a66"),
        C("#f1627e"),
        C("#b968c7"),
        C("#7986cc"),
        C("#64b5f6"),
        C("#80cbc4"),
        C("#a5d6a7"),
    ],
    [
        C("#fff59c"),
        C("#ffcc80"),
        C("#ffab91"),
        C("#fb879e"),
        C("#cf93d9"),
        C("#9ea8db"),
        C("#90caf8"),
        C("#b2dfdc"),
        C("#c8e6ca"),
    ],
    [
        Swatch::Transparent,
        C("#ffffff"),
        C("#dedede"),
        C("#a9a9a9"),
        C("#4b4b4b"),
        C("#353535"),
        C("#212121"),
        C("#000000"),
        Swatch::Advance,
    ],
];
