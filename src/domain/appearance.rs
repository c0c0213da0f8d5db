use std::fmt;

/// Light or dark window theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn from_stored(raw: &str) -> Self {
        if raw.trim() == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highlight colour used for the final price and focused inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Green,
    Red,
}

impl Accent {
    pub const ALL: [Accent; 2] = [Accent::Green, Accent::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Green => "green",
            Accent::Red => "red",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Accent::Green => "#00ff88",
            Accent::Red => "#ff4444",
        }
    }

    pub fn from_stored(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|accent| accent.as_str() == raw.trim())
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parsing() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored("purple"), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_accent_parsing() {
        assert_eq!(Accent::from_stored("red"), Some(Accent::Red));
        assert_eq!(Accent::from_stored(" green "), Some(Accent::Green));
        assert_eq!(Accent::from_stored("#00ff88"), None);
    }
}
