//! Document assembly: pair one post template with one topic's content record.
//!
//! [`DocumentAssembler`] compiles every template of a [`Catalog`] once at construction
//! and is read-only afterwards, so a single instance can serve any number of calls,
//! from any number of threads. Assembly is a pure function of its two keys: it never
//! logs, never retries, and returns either a complete [`Document`] or a typed error.

use std::fmt;

use crate::catalog::{Catalog, ContentRecord};
use crate::error::{BlogPostError, Result};
use crate::keys::{PostType, Topic};
use crate::templates::renderer::TemplateRenderer;

/// A fully substituted blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    post_type: PostType,
    topic: Topic,
    body: String,
}

impl Document {
    pub fn post_type(&self) -> PostType {
        self.post_type
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }

    pub fn into_string(self) -> String {
        self.body
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

/// Owns the compiled templates and the topic records.
pub struct DocumentAssembler {
    renderer: TemplateRenderer,
    catalog: Catalog,
}

impl DocumentAssembler {
    /// Build an assembler over the built-in catalog.
    pub fn new() -> Result<Self> {
        Self::from_catalog(Catalog::builtin()?)
    }

    /// Build an assembler over a custom catalog, compiling each template once.
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        let mut renderer = TemplateRenderer::new();
        for (post_type, body) in catalog.templates() {
            renderer.register(post_type.as_str(), body)?;
        }
        tracing::debug!(
            templates = catalog.templates().count(),
            topics = catalog.topics().count(),
            "document assembler ready"
        );
        Ok(Self { renderer, catalog })
    }

    /// Assemble a post from its string keys.
    ///
    /// The template key is checked before the content key. Unknown keys fail with
    /// [`BlogPostError::UnsupportedTemplate`] / [`BlogPostError::UnsupportedContent`];
    /// a placeholder without a matching field fails with [`BlogPostError::MissingField`].
    pub fn assemble(&self, template_key: &str, content_key: &str) -> Result<Document> {
        let post_type: PostType = template_key.parse()?;
        let topic: Topic = content_key.parse()?;
        self.render(post_type, topic)
    }

    /// Assemble a post from already-parsed keys.
    pub fn render(&self, post_type: PostType, topic: Topic) -> Result<Document> {
        let name = post_type.as_str();
        if !self.renderer.has_template(name) {
            return Err(BlogPostError::UnsupportedTemplate {
                key: name.to_string(),
                available: join(self.post_types().map(|t| t.as_str())),
            });
        }
        let record = self
            .catalog
            .topic(topic)
            .ok_or_else(|| BlogPostError::UnsupportedContent {
                key: topic.as_str().to_string(),
                available: join(self.topics().map(|(t, _)| t.as_str())),
            })?;

        let body = self.renderer.render(name, record)?;
        Ok(Document {
            post_type,
            topic,
            body,
        })
    }

    /// Render every (post type, topic) pair, stopping at the first failure.
    ///
    /// Returns the number of documents rendered. Use this to check the catalog eagerly
    /// instead of waiting for a bad pairing to surface on a real call.
    pub fn verify_all(&self) -> Result<usize> {
        let mut rendered = 0;
        for post_type in self.post_types() {
            for (topic, _) in self.topics() {
                self.render(post_type, topic)?;
                rendered += 1;
            }
        }
        Ok(rendered)
    }

    /// Post types with a registered template.
    pub fn post_types(&self) -> impl Iterator<Item = PostType> + '_ {
        self.catalog.templates().map(|(post_type, _)| post_type)
    }

    /// Topics with a content record.
    pub fn topics(&self) -> impl Iterator<Item = (Topic, &ContentRecord)> {
        self.catalog.topics()
    }
}

fn join<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assembler() -> DocumentAssembler {
        DocumentAssembler::new().unwrap()
    }

    #[test]
    fn test_every_pair_assembles_without_placeholders() {
        let assembler = assembler();
        for post_type in PostType::ALL {
            for topic in Topic::ALL {
                let doc = assembler
                    .assemble(post_type.as_str(), topic.as_str())
                    .unwrap();
                assert!(!doc.as_str().contains("{{"), "{post_type}/{topic} left a placeholder");
                assert!(!doc.as_str().contains("}}"), "{post_type}/{topic} left a placeholder");
                assert_eq!(doc.post_type(), post_type);
                assert_eq!(doc.topic(), topic);
            }
        }
    }

    #[test]
    fn test_verify_all_counts_every_pair() {
        assert_eq!(assembler().verify_all().unwrap(), 12);
    }

    #[test]
    fn test_introductory_bond_investing() {
        let doc = assembler().assemble("introductory", "bond_investing").unwrap();
        let text = doc.as_str();
        assert!(text.starts_with("# Introduction to Bond Investing\n"));
        assert!(text.contains(
            "## What You Will Learn\n\
             - Understanding bond basics and terminology\n\
             - Different types of bonds available\n\
             - How to evaluate bond investments\n\
             - Building a diversified bond portfolio\n"
        ));
    }

    #[test]
    fn test_analysis_market_analysis() {
        let doc = assembler().assemble("analysis", "market_analysis").unwrap();
        let text = doc.to_string();
        assert!(text.contains("# Market Analysis: Fixed Income Market Analysis"));
        assert!(text.contains(
            "- Position for anticipated rate changes\n\
             - Identify value in mispriced sectors\n\
             - Monitor global economic correlations\n\
             - Consider alternative data sources"
        ));
        assert!(!text.contains('{'));
        assert!(!text.contains('}'));
    }

    #[test]
    fn test_strategy_sections_in_template_order() {
        let text = assembler()
            .assemble("strategy", "diversification")
            .unwrap()
            .into_string();
        let positions: Vec<usize> = [
            "# Diversification in Fixed Income: A Comprehensive Strategy",
            "## Core Principles",
            "## Step-by-Step Implementation",
            "## Potential Risks and Mitigation",
            "## Conclusion",
        ]
        .iter()
        .map(|heading| text.find(heading).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("1. Define target allocation percentages\n"));
    }

    #[test]
    fn test_unknown_topic_is_unsupported_content() {
        let err = assembler().assemble("strategy", "nonexistent_topic").unwrap_err();
        match err {
            BlogPostError::UnsupportedContent { ref key, ref available } => {
                assert_eq!(key, "nonexistent_topic");
                for topic in ["bond_investing", "diversification", "risk_management", "market_analysis"] {
                    assert!(available.contains(topic));
                }
            }
            other => panic!("expected UnsupportedContent, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_template_is_unsupported_for_any_topic() {
        let assembler = assembler();
        for topic in ["bond_investing", "nonexistent_topic", ""] {
            let err = assembler.assemble("newsletter", topic).unwrap_err();
            assert!(
                matches!(err, BlogPostError::UnsupportedTemplate { ref key, .. } if key == "newsletter"),
                "template key should be checked first, got {err:?}"
            );
        }
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let assembler = assembler();
        let first = assembler.assemble("analysis", "risk_management").unwrap();
        let second = assembler.assemble("analysis", "risk_management").unwrap();
        assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_field_is_reported_by_name() {
        let record: ContentRecord = [("topic", "Municipal Bonds")].into_iter().collect();
        let catalog = Catalog::new()
            .with_template(PostType::Introductory, "# {{topic}}\n\n{{intro_text}}\n")
            .with_topic(Topic::BondInvesting, record);
        let assembler = DocumentAssembler::from_catalog(catalog).unwrap();

        let err = assembler.render(PostType::Introductory, Topic::BondInvesting).unwrap_err();
        match err {
            BlogPostError::MissingField { template, field } => {
                assert_eq!(template, "introductory");
                assert_eq!(field, "intro_text");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
        assert!(assembler.verify_all().is_err());
    }

    #[test]
    fn test_custom_catalog_without_entries() {
        let catalog = Catalog::new().with_template(PostType::Strategy, "{{topic}}");
        let assembler = DocumentAssembler::from_catalog(catalog).unwrap();

        let err = assembler.render(PostType::Analysis, Topic::MarketAnalysis).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported template: analysis (available: strategy)"
        );

        let err = assembler.render(PostType::Strategy, Topic::MarketAnalysis).unwrap_err();
        assert!(matches!(err, BlogPostError::UnsupportedContent { .. }));
        assert_eq!(assembler.verify_all().unwrap(), 0);
    }

    #[test]
    fn test_assembler_is_shareable_across_threads() {
        let assembler = std::sync::Arc::new(assembler());
        let handles: Vec<_> = Topic::ALL
            .into_iter()
            .map(|topic| {
                let assembler = std::sync::Arc::clone(&assembler);
                std::thread::spawn(move || assembler.render(PostType::Introductory, topic).unwrap())
            })
            .collect();
        for handle in handles {
            let doc = handle.join().unwrap();
            assert!(doc.as_str().starts_with("# Introduction to "));
        }
    }
}
