use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::TrueColor { r: 96, g: 165, b: 250 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MUTED: Color = Color::TrueColor { r: 100, g: 116, b: 139 };

pub const IPV4_ADDR: Color = Color::TrueColor { r: 74, g: 222, b: 128 };
pub const RANGE: Color = Color::TrueColor { r: 191, g: 219, b: 254 };

pub const OK: Color = Color::Green;
pub const FAIL: Color = Color::Red;
pub const LINK_UP: Color = Color::BrightGreen;
pub const LINK_DOWN: Color = Color::BrightBlack;
