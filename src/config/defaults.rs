use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_target() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_concurrency() -> usize {
    4
}

pub fn default_report_dir() -> PathBuf {
    PathBuf::from("reports")
}

pub fn default_timeout_sec() -> u64 {
    120
}

pub fn default_tool_binary() -> PathBuf {
    PathBuf::from("clang-tidy")
}

pub fn default_c_standard() -> Option<String> {
    Some("c11".to_string())
}

pub fn default_cpp_standard() -> Option<String> {
    Some("c++17".to_string())
}

pub fn default_source_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

pub fn default_source_include() -> Vec<String> {
    vec![
        "**/*.c".to_string(),
        "**/*.cpp".to_string(),
        "**/*.cxx".to_string(),
    ]
}
