//! The two lookup tables behind document assembly: post type → template body, and
//! topic → content record.
//!
//! [`Catalog::builtin`] loads the tables from the files embedded in
//! [`crate::templates::embedded`]. Custom catalogs can be built with
//! [`Catalog::with_template`] and [`Catalog::with_topic`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BlogPostError, Result};
use crate::keys::{PostType, Topic};
use crate::templates::embedded;

/// Field name holding a topic's display title.
pub const TITLE_FIELD: &str = "topic";

/// One topic's material: placeholder name → replacement text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRecord {
    fields: BTreeMap<String, String>,
}

impl ContentRecord {
    /// Parse a record from a flat JSON object of strings.
    pub fn from_json(name: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BlogPostError::ContentParse {
            name: name.to_string(),
            source: e,
        })
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Display title, taken from the `topic` field.
    pub fn title(&self) -> Option<&str> {
        self.get(TITLE_FIELD)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContentRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Immutable template and topic tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: BTreeMap<PostType, String>,
    topics: BTreeMap<Topic, ContentRecord>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog compiled into the binary: every post type and every topic.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new();
        for post_type in PostType::ALL {
            catalog = catalog.with_template(post_type, embedded::template_source(post_type));
        }
        for topic in Topic::ALL {
            let record = ContentRecord::from_json(topic.as_str(), embedded::topic_source(topic))?;
            tracing::debug!(topic = %topic, fields = record.len(), "loaded content record");
            catalog = catalog.with_topic(topic, record);
        }
        Ok(catalog)
    }

    pub fn with_template(mut self, post_type: PostType, body: impl Into<String>) -> Self {
        self.templates.insert(post_type, body.into());
        self
    }

    pub fn with_topic(mut self, topic: Topic, record: ContentRecord) -> Self {
        self.topics.insert(topic, record);
        self
    }

    pub fn template(&self, post_type: PostType) -> Option<&str> {
        self.templates.get(&post_type).map(String::as_str)
    }

    pub fn topic(&self, topic: Topic) -> Option<&ContentRecord> {
        self.topics.get(&topic)
    }

    pub fn templates(&self) -> impl Iterator<Item = (PostType, &str)> {
        self.templates.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn topics(&self) -> impl Iterator<Item = (Topic, &ContentRecord)> {
        self.topics.iter().map(|(k, v)| (*k, v))
    }
}
