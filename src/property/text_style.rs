//! Text style flag set with `Bold | Underlined` text forms.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Style flags applied to rendered text.
    ///
    /// The empty set is the regular style and serializes as `Regular`.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TextStyle: u8 {
        const BOLD = 1;
        const ITALIC = 1 << 1;
        const UNDERLINED = 1 << 2;
        const STRIKE_THROUGH = 1 << 3;
    }
}

impl TextStyle {
    /// Look up a single flag name (case-insensitive).
    ///
    /// `Regular` maps to the empty set. Returns `None` for unknown names.
    pub fn from_flag_name(name: &str) -> Option<TextStyle> {
        let lower = name.to_ascii_lowercase();
        Some(match lower.as_str() {
            "regular" => TextStyle::empty(),
            "bold" => TextStyle::BOLD,
            "italic" => TextStyle::ITALIC,
            "underlined" => TextStyle::UNDERLINED,
            "strikethrough" => TextStyle::STRIKE_THROUGH,
            _ => return None,
        })
    }
}

impl fmt::Display for TextStyle {
    /// The theme-format text form: flag names joined by ` | `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Regular");
        }
        let mut first = true;
        let mut emit = |f: &mut fmt::Formatter<'_>, name: &str| -> fmt::Result {
            if !first {
                write!(f, " | ")?;
            }
            first = false;
            write!(f, "{name}")
        };
        if self.contains(TextStyle::BOLD) {
            emit(f, "Bold")?;
        }
        if self.contains(TextStyle::ITALIC) {
            emit(f, "Italic")?;
        }
        if self.contains(TextStyle::UNDERLINED) {
            emit(f, "Underlined")?;
        }
        if self.contains(TextStyle::STRIKE_THROUGH) {
            emit(f, "StrikeThrough")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_regular() {
        assert_eq!(TextStyle::empty().to_string(), "Regular");
        assert_eq!(TextStyle::from_flag_name("Regular"), Some(TextStyle::empty()));
    }

    #[test]
    fn single_flags() {
        assert_eq!(TextStyle::from_flag_name("bold"), Some(TextStyle::BOLD));
        assert_eq!(TextStyle::from_flag_name("ITALIC"), Some(TextStyle::ITALIC));
        assert_eq!(TextStyle::from_flag_name("Underlined"), Some(TextStyle::UNDERLINED));
        assert_eq!(TextStyle::from_flag_name("StrikeThrough"), Some(TextStyle::STRIKE_THROUGH));
    }

    #[test]
    fn unknown_flag() {
        assert!(TextStyle::from_flag_name("Blinking").is_none());
    }

    #[test]
    fn display_combined() {
        let style = TextStyle::BOLD | TextStyle::UNDERLINED;
        assert_eq!(style.to_string(), "Bold | Underlined");
    }

    #[test]
    fn display_single() {
        assert_eq!(TextStyle::ITALIC.to_string(), "Italic");
    }

    #[test]
    fn display_all() {
        let all = TextStyle::all();
        assert_eq!(all.to_string(), "Bold | Italic | Underlined | StrikeThrough");
    }
}
