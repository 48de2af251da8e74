use std::fmt;

/// Romanization convention
///
/// Both schemes share the same tables. They only differ in which half of a
/// [`Spelling`] is read when a glyph has two accepted spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Velthuis-style input for `devnag`. Uses the primary spelling.
    Velthuis,
    /// Wikner-style input for `skt`. Uses the alternate spelling.
    Wikner,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Velthuis => write!(f, "velthuis"),
            Scheme::Wikner => write!(f, "wikner"),
        }
    }
}

/// A primary spelling and an alternate one
///
/// Most glyphs have a single spelling, stored in both slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spelling {
    pub primary: &'static str,
    pub alternate: &'static str,
}

impl Spelling {
    pub const fn one(spelling: &'static str) -> Self {
        Self {
            primary: spelling,
            alternate: spelling,
        }
    }

    pub const fn two(primary: &'static str, alternate: &'static str) -> Self {
        Self { primary, alternate }
    }

    #[inline]
    pub fn pick(&self, scheme: Scheme) -> &'static str {
        match scheme {
            Scheme::Velthuis => self.primary,
            Scheme::Wikner => self.alternate,
        }
    }
}

#[cfg(test)]
mod ut {
    use super::*;

    #[test]
    fn test_pick_single() {
        let s = Spelling::one("kh");
        assert_eq!("kh", s.pick(Scheme::Velthuis));
        assert_eq!("kh", s.pick(Scheme::Wikner));
    }

    #[test]
    fn test_pick_pair() {
        let s = Spelling::two(".R", ".r.r");
        assert_eq!(".R", s.pick(Scheme::Velthuis));
        assert_eq!(".r.r", s.pick(Scheme::Wikner));
    }
}
