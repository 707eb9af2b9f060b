#![forbid(unsafe_code)]

//! Ignore categories and the per-run ignore set
//!
//! Categories are the user-facing names accepted by `--ignore=`. Each maps to
//! a constant set of restrictions; the set is resolved once per run.

use crate::rules::Restriction;
use std::collections::BTreeSet;
use std::fmt;

/// A user-facing group of restrictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Emojis,
    EmDash,
    EnDash,
    SmartQuotes,
    Ellipsis,
    Bullet,
    Arrow,
}

impl Category {
    /// Every category, in table order
    pub const ALL: [Category; 7] = [
        Category::Emojis,
        Category::EmDash,
        Category::EnDash,
        Category::SmartQuotes,
        Category::Ellipsis,
        Category::Bullet,
        Category::Arrow,
    ];

    /// Returns all categories in table order
    pub fn all() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter()
    }

    /// The key accepted on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Category::Emojis => "emojis",
            Category::EmDash => "em-dash",
            Category::EnDash => "en-dash",
            Category::SmartQuotes => "smart-quotes",
            Category::Ellipsis => "ellipsis",
            Category::Bullet => "bullet",
            Category::Arrow => "arrow",
        }
    }

    /// Restrictions covered by this category
    pub fn restrictions(&self) -> &'static [Restriction] {
        match self {
            Category::Emojis => &[Restriction::Emoji],
            Category::EmDash => &[Restriction::EmDash],
            Category::EnDash => &[Restriction::EnDash],
            Category::SmartQuotes => &[
                Restriction::LeftDoubleQuote,
                Restriction::RightDoubleQuote,
                Restriction::LeftSingleQuote,
                Restriction::RightSingleQuote,
            ],
            Category::Ellipsis => &[Restriction::HorizontalEllipsis],
            Category::Bullet => &[Restriction::Bullet],
            Category::Arrow => &[Restriction::Arrow],
        }
    }

    /// Parses a category token, ignoring case and surrounding whitespace
    pub fn parse(token: &str) -> Option<Category> {
        let token = token.trim().to_lowercase();
        Self::all().find(|category| category.key() == token)
    }

    /// Comma-separated list of valid keys, for help and warning text
    pub fn valid_keys() -> String {
        Self::all()
            .map(|category| category.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Restrictions excluded from a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    restrictions: BTreeSet<Restriction>,
}

/// Outcome of resolving an `--ignore=` value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedIgnore {
    pub set: IgnoreSet,
    /// Non-empty tokens that named no category, lowercased and trimmed
    pub unknown: Vec<String>,
}

impl IgnoreSet {
    /// Creates an empty ignore set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an ignore set covering the given categories
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut set = Self::new();
        for category in categories {
            set.insert_category(category);
        }
        set
    }

    /// Resolves a raw comma-separated category list
    ///
    /// Unknown tokens are collected rather than rejected; empty tokens
    /// (e.g. from a trailing comma) are dropped silently.
    pub fn resolve(raw: &str) -> ResolvedIgnore {
        let mut resolved = ResolvedIgnore::default();

        for token in raw.split(',') {
            let token = token.trim().to_lowercase();
            match Category::parse(&token) {
                Some(category) => resolved.set.insert_category(category),
                None if !token.is_empty() => resolved.unknown.push(token),
                None => {}
            }
        }

        resolved
    }

    fn insert_category(&mut self, category: Category) {
        self.restrictions
            .extend(category.restrictions().iter().copied());
    }

    pub fn contains(&self, restriction: Restriction) -> bool {
        self.restrictions.contains(&restriction)
    }

    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.restrictions.len()
    }

    /// Ignored restrictions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Restriction> + '_ {
        self.restrictions.iter().copied()
    }

    /// Categories with at least one ignored member, in table order
    pub fn categories(&self) -> Vec<Category> {
        Category::all()
            .filter(|category| {
                category
                    .restrictions()
                    .iter()
                    .any(|restriction| self.contains(*restriction))
            })
            .collect()
    }
}
