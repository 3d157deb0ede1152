//! Structured query types produced by the external query parser.
//!
//! The natural-language parser/tokenizer lives outside this crate; it hands
//! over a [`ParsedQuery`] (tokens, extracted entities, modifiers, and concept
//! tags) which the lexical scorer and the dynamic weighting layer consume as
//! read-only input.

use serde::{Deserialize, Serialize};

/// A parsed search query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Original query text.
    pub raw: String,
    /// Lowercased token sequence.
    pub tokens: Vec<String>,
    /// Entities the parser extracted from the query.
    pub entities: QueryEntities,
    /// Negation and emphasis modifiers.
    pub modifiers: QueryModifiers,
    /// High-level concept tags (e.g. "hiring", "networking").
    pub concept_tags: Vec<String>,
}

impl ParsedQuery {
    /// Create a query from raw text and its tokens.
    pub fn new<S: Into<String>>(raw: S, tokens: Vec<String>) -> Self {
        Self {
            raw: raw.into(),
            tokens,
            entities: QueryEntities::default(),
            modifiers: QueryModifiers::default(),
            concept_tags: Vec::new(),
        }
    }

    /// Set the extracted entities.
    pub fn with_entities(mut self, entities: QueryEntities) -> Self {
        self.entities = entities;
        self
    }

    /// Set the concept tags.
    pub fn with_concept_tags(mut self, tags: Vec<String>) -> Self {
        self.concept_tags = tags;
        self
    }
}

/// Entities extracted from a query by the external parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryEntities {
    /// Company names.
    pub companies: Vec<String>,
    /// Role or title names.
    pub roles: Vec<String>,
    /// School names.
    pub schools: Vec<String>,
    /// Skill names.
    pub skills: Vec<String>,
    /// Numeric mentions (e.g. years of experience).
    pub numeric_mentions: Vec<f64>,
}

impl QueryEntities {
    /// Total number of named entities, numeric mentions excluded.
    pub fn named_count(&self) -> usize {
        self.companies.len() + self.roles.len() + self.schools.len() + self.skills.len()
    }

    /// Whether the parser extracted nothing at all.
    pub fn is_empty(&self) -> bool {
        self.named_count() == 0 && self.numeric_mentions.is_empty()
    }
}

/// Negation and emphasis modifiers attached to a query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryModifiers {
    /// Terms the user negated ("not", "except").
    pub negations: Vec<String>,
    /// Terms the user emphasized ("must", "only").
    pub emphasized: Vec<String>,
}
