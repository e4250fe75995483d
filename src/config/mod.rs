// src/config/mod.rs
pub mod types;

pub use types::{Config, DocstampToml};

use regex::Regex;

use crate::annotate::{MemberKind, Visibility};

pub const CONFIG_FILE: &str = "docstamp.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config and layers in `docstamp.toml` when present.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config();
        config
    }

    pub fn load_local_config(&mut self) {
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
            self.parse_toml(&content);
        }
    }

    /// Merges a `docstamp.toml` document into this config. Malformed
    /// documents are ignored; the file is advisory, not authoritative.
    pub fn parse_toml(&mut self, content: &str) {
        let Ok(doc) = toml::from_str::<DocstampToml>(content) else {
            return;
        };

        if !doc.annotate.comments.is_empty() {
            self.comments = doc.annotate.comments;
        }
        if !doc.annotate.visibilities.is_empty() {
            self.visibilities = parse_visibilities(&doc.annotate.visibilities);
        }
        if !doc.annotate.kinds.is_empty() {
            self.kinds = parse_kinds(&doc.annotate.kinds);
        }
        self.include_patterns = compile_patterns(&doc.files.include);
        self.exclude_patterns = compile_patterns(&doc.files.exclude);
    }
}

/// Normalizes visibility tokens. Unknown tokens are dropped: the filter
/// sets are additive allow-lists, not validation surfaces.
#[must_use]
pub fn parse_visibilities(tokens: &[String]) -> Vec<Visibility> {
    tokens.iter().filter_map(|t| Visibility::parse(t)).collect()
}

/// Normalizes kind tokens, dropping unknown ones.
#[must_use]
pub fn parse_kinds(tokens: &[String]) -> Vec<MemberKind> {
    tokens.iter().filter_map(|t| MemberKind::parse(t)).collect()
}

fn compile_patterns(patterns: &[String]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| Regex::new(p).ok()).collect()
}
