use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Working directory the tool runs in
    #[serde(default = "default_target")]
    pub target: PathBuf,

    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    #[serde(default)]
    pub dry_run: bool,

    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,

    #[serde(default)]
    pub tool: ToolConfig,

    #[serde(default)]
    pub standards: LanguageStandards,

    #[serde(default)]
    pub sources: Sources,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ToolConfig {
    #[serde(default = "default_tool_binary")]
    pub binary: PathBuf,

    /// Value passed as `--checks=...`
    #[serde(default)]
    pub checks: Option<String>,

    /// Extra arguments placed before the source file
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            binary: default_tool_binary(),
            checks: None,
            args: Vec::new(),
        }
    }
}

/// Language standard per source language; `None` disables checking that language
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct LanguageStandards {
    #[serde(default = "default_c_standard")]
    pub c: Option<String>,

    #[serde(default = "default_cpp_standard")]
    pub cpp: Option<String>,
}

impl Default for LanguageStandards {
    fn default() -> Self {
        Self {
            c: default_c_standard(),
            cpp: default_cpp_standard(),
        }
    }
}

impl LanguageStandards {
    pub fn for_language(&self, language: Language) -> Option<&str> {
        match language {
            Language::C => self.c.as_deref(),
            Language::Cpp => self.cpp.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Sources {
    #[serde(default = "default_source_paths")]
    pub paths: Vec<PathBuf>,

    #[serde(default = "default_source_include")]
    pub include: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            paths: default_source_paths(),
            include: default_source_include(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    Cpp,
}

impl Language {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "cpp" | "cxx" => Some(Language::Cpp),
            "c" => Some(Language::C),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::C => write!(f, "c"),
            Language::Cpp => write!(f, "c++"),
        }
    }
}
