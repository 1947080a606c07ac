use std::fmt;

/// ANSI foreground colors used by the severity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red = 31,
    White = 37,
}

impl Color {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// ANSI text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal = 0,
    Bold = 1,
}

impl Weight {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Color and weight applied to one emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub weight: Weight,
}

impl Style {
    pub const fn new(color: Color, weight: Weight) -> Self {
        Self { color, weight }
    }
}

/// Renders the opening SGR sequence, e.g. `ESC[1;31m`.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{};{}m", self.weight.code(), self.color.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_sgr() {
        assert_eq!(Color::Red.code(), 31);
        assert_eq!(Color::White.code(), 37);
        assert_eq!(Weight::Normal.code(), 0);
        assert_eq!(Weight::Bold.code(), 1);
    }

    #[test]
    fn display_is_escape_sequence() {
        let style = Style::new(Color::Red, Weight::Bold);
        assert_eq!(style.to_string(), "\x1b[1;31m");
    }
}
