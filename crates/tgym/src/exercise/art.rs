//! ASCII-art frame tables, contracted (index 0) to expanded.

use tgym_core::{Frame, FrameSet};

pub const GLUTE_FRAMES: &[Frame] = &[
    // contracted
    &[
        "    ╭─────╮    ",
        "   ╱  ╭─╮  ╲   ",
        "  ╱  ╱   ╲  ╲  ",
        " ╱  ╱  ●  ╲  ╲ ",
        "╱  ╱       ╲  ╲",
        "╲  ╲       ╱  ╱",
        " ╲  ╲     ╱  ╱ ",
        "  ╲  ╲___╱  ╱  ",
        "   ╲_______╱   ",
    ],
    // engaging
    &[
        "     ╭─────╮     ",
        "   ╭─╱  ╭─╮  ╲─╮   ",
        "  ╱  ╱  ╱   ╲  ╲  ╲  ",
        " ╱  ╱  ╱  ●  ╲  ╲  ╲ ",
        "╱  ╱  ╱       ╲  ╲  ╲",
        "╲  ╲  ╲       ╱  ╱  ╱",
        " ╲  ╲  ╲     ╱  ╱  ╱ ",
        "  ╲  ╲  ╲___╱  ╱  ╱  ",
        "   ╲─╲_______╱─╱   ",
    ],
    // balanced
    &[
        "      ╭──────╮      ",
        "   ╭──╱   ╭─╮   ╲──╮   ",
        "  ╱   ╱   ╱   ╲   ╲   ╲  ",
        " ╱   ╱   ╱  ●  ╲   ╲   ╲ ",
        "╱   ╱   ╱       ╲   ╲   ╲",
        "╲   ╲   ╲       ╱   ╱   ╱",
        " ╲   ╲   ╲     ╱   ╱   ╱ ",
        "  ╲   ╲   ╲___╱   ╱   ╱  ",
        "   ╲──╲_________╱──╱   ",
    ],
    // engaged
    &[
        "       ╭───────╮       ",
        "   ╭───╱    ╭─╮    ╲───╮   ",
        "  ╱    ╱    ╱   ╲    ╲    ╲  ",
        " ╱    ╱    ╱  ●  ╲    ╲    ╲ ",
        "╱    ╱    ╱       ╲    ╲    ╲",
        "╲    ╲    ╲       ╱    ╱    ╱",
        " ╲    ╲    ╲     ╱    ╱    ╱ ",
        "  ╲    ╲    ╲___╱    ╱    ╱  ",
        "   ╲───╲___________╱───╱   ",
    ],
    // peak
    &[
        "        ╭────────╮        ",
        "   ╭────╱     ╭─╮     ╲────╮   ",
        "  ╱     ╱     ╱   ╲     ╲     ╲  ",
        " ╱     ╱     ╱  ●  ╲     ╲     ╲ ",
        "╱     ╱     ╱       ╲     ╲     ╲",
        "╲     ╲     ╲       ╱     ╱     ╱",
        " ╲     ╲     ╲     ╱     ╱     ╱ ",
        "  ╲     ╲     ╲___╱     ╱     ╱  ",
        "   ╲────╲_____________╱────╱   ",
    ],
];

pub const LUNG_FRAMES: &[Frame] = &[
    // exhaled
    &[
        "           ╭─────╮           ",
        "         ╱         ╲         ",
        "       ╱    ╭───╮    ╲       ",
        "      ╱    ╱  ○  ╲    ╲      ",
        "     ╱    ╱       ╲    ╲     ",
        "    ╱    ╱    ♡    ╲    ╲    ",
        "   ╱    ╱           ╲    ╲   ",
        "  ╱    ╱             ╲    ╲  ",
        " ╱____╱               ╲____╲ ",
        "╱_____________________╲",
    ],
    // beginning to fill
    &[
        "          ╭───────╮          ",
        "        ╱           ╲        ",
        "      ╱    ╭─────╮    ╲      ",
        "     ╱    ╱   ○   ╲    ╲     ",
        "    ╱    ╱         ╲    ╲    ",
        "   ╱    ╱     ♡     ╲    ╲   ",
        "  ╱    ╱             ╲    ╲  ",
        " ╱    ╱               ╲    ╲ ",
        "╱____╱                 ╲____╲",
        "╱_______________________╲",
    ],
    // filling
    &[
        "         ╭─────────╮         ",
        "       ╱             ╲       ",
        "     ╱    ╭───────╮    ╲     ",
        "    ╱    ╱    ○    ╲    ╲    ",
        "   ╱    ╱           ╲    ╲   ",
        "  ╱    ╱      ♡      ╲    ╲  ",
        " ╱    ╱               ╲    ╲ ",
        "╱    ╱                 ╲    ╲",
        "╲____╱                 ╲____╱",
        "╲_________________________╱",
    ],
    // full
    &[
        "        ╭───────────╮        ",
        "      ╱               ╲      ",
        "    ╱    ╭─────────╮    ╲    ",
        "   ╱    ╱     ○     ╲    ╲   ",
        "  ╱    ╱             ╲    ╲  ",
        " ╱    ╱       ♡       ╲    ╲ ",
        "╱    ╱                 ╲    ╲",
        "╲    ╱                 ╲    ╱",
        "╲____╱                 ╲____╱",
        "╲___________________________╱",
    ],
    // peak
    &[
        "       ╭─────────────╮       ",
        "     ╱                 ╲     ",
        "   ╱    ╭───────────╮    ╲   ",
        "  ╱    ╱      ○      ╲    ╲  ",
        " ╱    ╱               ╲    ╲ ",
        "╱    ╱        ♡        ╲    ╲",
        "╲    ╱                 ╲    ╱",
        "╲   ╱                   ╲   ╱",
        "╲___╱                   ╲___╱",
        "╲_____________________________╱",
    ],
];

/// Glute frames for the strength exercise.
pub const GLUTE: FrameSet = match FrameSet::new(GLUTE_FRAMES) {
    Ok(set) => set,
    Err(_) => panic!("glute frame table is empty"),
};

/// Lung frames for the breathing exercise. Every frame has a `♡` line.
pub const LUNG: FrameSet = match FrameSet::new(LUNG_FRAMES) {
    Ok(set) => set,
    Err(_) => panic!("lung frame table is empty"),
};

/// Heart glyph in [`LUNG`] frames that the pulse replaces.
pub const HEART_GLYPH: &str = "♡";
