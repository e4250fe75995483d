use serde::Deserialize;

use crate::annotate::{MemberKind, Visibility};

/// Effective runtime configuration: what to write, what to match,
/// where to look.
#[derive(Debug, Clone)]
pub struct Config {
    pub comments: Vec<String>,
    pub visibilities: Vec<Visibility>,
    pub kinds: Vec<MemberKind>,
    pub include_patterns: Vec<regex::Regex>,
    pub exclude_patterns: Vec<regex::Regex>,
    pub recursive: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comments: Vec::new(),
            visibilities: vec![Visibility::Public],
            kinds: vec![
                MemberKind::Method,
                MemberKind::Property,
                MemberKind::ClassConstant,
            ],
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            recursive: true,
            dry_run: false,
            verbose: false,
        }
    }
}

/// On-disk shape of `docstamp.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct DocstampToml {
    #[serde(default)]
    pub annotate: AnnotateSection,
    #[serde(default)]
    pub files: FilesSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnnotateSection {
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default)]
    pub visibilities: Vec<String>,
    #[serde(default)]
    pub kinds: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilesSection {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}
