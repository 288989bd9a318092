//! Color mapping for group tags and highlights.

use ratatui::style::Color;
use schulte_core::ColorTag;

pub fn group_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Black => Color::White, // dark terminals invert the palette
        ColorTag::Green => Color::Green,
        ColorTag::Red => Color::Red,
        ColorTag::Blue => Color::Blue,
        ColorTag::Magenta => Color::Magenta,
        ColorTag::Brown => Color::Yellow,
    }
}

pub const HIGHLIGHT_BG: Color = Color::DarkGray;
pub const CORRECT_BG: Color = Color::Rgb(20, 60, 20);
pub const HOVER_BG: Color = Color::Rgb(45, 45, 45);
pub const TRACED_FG: Color = Color::DarkGray;
