use crate::glyph::Scheme;
use std::fmt;

/// The preprocessor family to produce input for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Velthuis `devnag`
    Devnag,
    /// Wikner `skt`
    Skt,
}

const SUFFIX: &str = "}";

impl Target {
    /// Markup tag, also the input file extension
    pub fn tag(&self) -> &'static str {
        match self {
            Target::Devnag => "dn",
            Target::Skt => "skt",
        }
    }

    pub fn scheme(&self) -> Scheme {
        match self {
            Target::Devnag => Scheme::Velthuis,
            Target::Skt => Scheme::Wikner,
        }
    }

    /// Command used when none is configured
    pub fn default_command(&self) -> &'static str {
        match self {
            Target::Devnag => "devnag",
            Target::Skt => "./skt",
        }
    }

    /// What the preprocessor output starts with
    pub fn output_prefix(&self) -> &'static str {
        match self {
            Target::Devnag => r"\def\DevnagVersion{2.17}{\dn ",
            Target::Skt => r"{\skt ",
        }
    }

    /// Wrap text in the target's markup, e.g. `{\dn text}`
    pub fn wrap(&self, text: &str) -> String {
        format!(r"{{\{} {text}}}", self.tag())
    }

    /// Take the typeset fragment out of the preprocessor output.
    ///
    /// Returns `None` if the output is not wrapped as expected.
    pub fn strip<'a>(&self, output: &'a str) -> Option<&'a str> {
        output
            .strip_prefix(self.output_prefix())
            .and_then(|s| s.strip_suffix(SUFFIX))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
