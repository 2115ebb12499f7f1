//! Compile-time embedded post templates and topic content.
//!
//! Each constant loads a file from the crate's `templates/` directory via [`include_str!`].
//! The paths are relative to this source file (`crates/blogpost-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.

use crate::keys::{PostType, Topic};

// -------------------------------------------------------
// Post templates
// -------------------------------------------------------

pub const INTRODUCTORY: &str = include_str!("../../templates/posts/introductory.md.tmpl");
pub const STRATEGY: &str = include_str!("../../templates/posts/strategy.md.tmpl");
pub const ANALYSIS: &str = include_str!("../../templates/posts/analysis.md.tmpl");

// -------------------------------------------------------
// Topic content records (flat JSON objects of strings)
// -------------------------------------------------------

pub const BOND_INVESTING: &str = include_str!("../../templates/topics/bond_investing.json");
pub const DIVERSIFICATION: &str = include_str!("../../templates/topics/diversification.json");
pub const RISK_MANAGEMENT: &str = include_str!("../../templates/topics/risk_management.json");
pub const MARKET_ANALYSIS: &str = include_str!("../../templates/topics/market_analysis.json");

/// Template body for a post type.
pub fn template_source(post_type: PostType) -> &'static str {
    match post_type {
        PostType::Introductory => INTRODUCTORY,
        PostType::Strategy => STRATEGY,
        PostType::Analysis => ANALYSIS,
    }
}

/// Raw JSON for a topic's content record.
pub fn topic_source(topic: Topic) -> &'static str {
    match topic {
        Topic::BondInvesting => BOND_INVESTING,
        Topic::Diversification => DIVERSIFICATION,
        Topic::RiskManagement => RISK_MANAGEMENT,
        Topic::MarketAnalysis => MARKET_ANALYSIS,
    }
}
