#![forbid(unsafe_code)]

//! The static table of restricted characters
//!
//! Each restriction names one disallowed character (or character class),
//! the codepoint label shown to the user, an ASCII replacement hint and a
//! severity. Declaration order is significant: the scanner applies rules in
//! this order and the reporter lists ignored rules in this order.

use crate::types::Severity;
use std::fmt;

/// A disallowed character or character class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Restriction {
    EmDash,
    EnDash,
    LeftDoubleQuote,
    RightDoubleQuote,
    LeftSingleQuote,
    RightSingleQuote,
    HorizontalEllipsis,
    Bullet,
    Emoji,
    Arrow,
}

impl Restriction {
    /// Every restriction, in declaration order
    pub const ALL: [Restriction; 10] = [
        Restriction::EmDash,
        Restriction::EnDash,
        Restriction::LeftDoubleQuote,
        Restriction::RightDoubleQuote,
        Restriction::LeftSingleQuote,
        Restriction::RightSingleQuote,
        Restriction::HorizontalEllipsis,
        Restriction::Bullet,
        Restriction::Emoji,
        Restriction::Arrow,
    ];

    /// Returns all restrictions in declaration order
    pub fn all() -> impl Iterator<Item = Restriction> {
        Self::ALL.into_iter()
    }

    /// Human-readable rule name
    pub fn name(&self) -> &'static str {
        match self {
            Restriction::EmDash => "Em Dash",
            Restriction::EnDash => "En Dash",
            Restriction::LeftDoubleQuote => "Left Double Quote",
            Restriction::RightDoubleQuote => "Right Double Quote",
            Restriction::LeftSingleQuote => "Left Single Quote",
            Restriction::RightSingleQuote => "Right Single Quote",
            Restriction::HorizontalEllipsis => "Horizontal Ellipsis",
            Restriction::Bullet => "Bullet Character",
            Restriction::Emoji => "Emoji",
            Restriction::Arrow => "Arrow Character",
        }
    }

    /// Regex source matching the restricted codepoint(s)
    pub fn pattern(&self) -> &'static str {
        match self {
            Restriction::EmDash => r"\x{2014}",
            Restriction::EnDash => r"\x{2013}",
            Restriction::LeftDoubleQuote => r"\x{201C}",
            Restriction::RightDoubleQuote => r"\x{201D}",
            Restriction::LeftSingleQuote => r"\x{2018}",
            Restriction::RightSingleQuote => r"\x{2019}",
            Restriction::HorizontalEllipsis => r"\x{2026}",
            Restriction::Bullet => r"\x{2022}",
            Restriction::Emoji => {
                r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]"
            }
            Restriction::Arrow => r"[\x{2190}-\x{21FF}]",
        }
    }

    /// Codepoint label shown next to the rule name
    pub fn unicode(&self) -> &'static str {
        match self {
            Restriction::EmDash => "U+2014",
            Restriction::EnDash => "U+2013",
            Restriction::LeftDoubleQuote => "U+201C",
            Restriction::RightDoubleQuote => "U+201D",
            Restriction::LeftSingleQuote => "U+2018",
            Restriction::RightSingleQuote => "U+2019",
            Restriction::HorizontalEllipsis => "U+2026",
            Restriction::Bullet => "U+2022",
            Restriction::Emoji => "Various",
            Restriction::Arrow => "U+2190-21FF",
        }
    }

    /// Suggested ASCII replacement
    pub fn replacement(&self) -> &'static str {
        match self {
            Restriction::EmDash => "colon (:), comma (,), semicolon (;), or period (.)",
            Restriction::EnDash => "hyphen (-)",
            Restriction::LeftDoubleQuote | Restriction::RightDoubleQuote => "straight quote (\")",
            Restriction::LeftSingleQuote | Restriction::RightSingleQuote => {
                "straight apostrophe (')"
            }
            Restriction::HorizontalEllipsis => "three periods (...)",
            Restriction::Bullet => "markdown list (-)",
            Restriction::Emoji => "remove entirely",
            Restriction::Arrow => "ASCII arrow (->)",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Restriction::Arrow => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
