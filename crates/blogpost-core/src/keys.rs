//! Closed key sets for post types (templates) and topics (content records).
//!
//! Both enums parse from their CLI key via [`FromStr`]. An unknown key yields the
//! matching [`BlogPostError`] variant listing every valid key, so callers never
//! need to build that message themselves.

use std::fmt;
use std::str::FromStr;

use crate::error::BlogPostError;

/// Structural shape of a post. Each variant owns one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PostType {
    /// Introduction, learning points, benefits, conclusion.
    Introductory,
    /// Principles, implementation steps, risks and mitigation.
    Strategy,
    /// Market trends, indicators, recommendations.
    Analysis,
}

impl PostType {
    /// Every post type, in the order they are listed to users.
    pub const ALL: [PostType; 3] = [Self::Introductory, Self::Strategy, Self::Analysis];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Introductory => "introductory",
            Self::Strategy => "strategy",
            Self::Analysis => "analysis",
        }
    }

    /// Resolve a post type by key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == key)
    }

    /// Comma-separated list of valid keys, as shown in error messages.
    pub fn available() -> String {
        join_keys(Self::ALL.iter().map(Self::as_str))
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostType {
    type Err = BlogPostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| BlogPostError::UnsupportedTemplate {
            key: s.to_string(),
            available: Self::available(),
        })
    }
}

/// Subject matter of a post. Each variant owns one content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    BondInvesting,
    Diversification,
    RiskManagement,
    MarketAnalysis,
}

impl Topic {
    /// Every topic, in the order they are listed to users.
    pub const ALL: [Topic; 4] = [
        Self::BondInvesting,
        Self::Diversification,
        Self::RiskManagement,
        Self::MarketAnalysis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BondInvesting => "bond_investing",
            Self::Diversification => "diversification",
            Self::RiskManagement => "risk_management",
            Self::MarketAnalysis => "market_analysis",
        }
    }

    /// Resolve a topic by key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == key)
    }

    /// Comma-separated list of valid keys, as shown in error messages.
    pub fn available() -> String {
        join_keys(Self::ALL.iter().map(Self::as_str))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = BlogPostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| BlogPostError::UnsupportedContent {
            key: s.to_string(),
            available: Self::available(),
        })
    }
}

fn join_keys<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.collect::<Vec<_>>().join(", ")
}
