// Inclusion policy for repository walks
//
// Decides which directories are descended into and which files are worth
// downloading. Names and extensions are fixed; sizes come from `Limits`.

use super::types::ContentItem;

/// Directory names never descended into (build output, dependencies, VCS)
pub const DENIED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "coverage", ".next"];

/// File names always considered important regardless of extension
pub const IMPORTANT_FILES: &[&str] = &[
    "README.md",
    "package.json",
    "requirements.txt",
    "Cargo.toml",
    "go.mod",
];

/// Source, documentation and config extensions worth reading
pub const IMPORTANT_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".js", ".jsx", ".py", ".java", ".cpp", ".c", ".h", ".go", ".rs", ".rb", ".php",
    ".md", ".json", ".yaml", ".yml",
];

pub fn is_denied_dir(name: &str) -> bool {
    DENIED_DIRS.contains(&name)
}

/// Name-based check only; size is checked separately.
pub fn is_important_file(name: &str) -> bool {
    IMPORTANT_FILES.contains(&name) || IMPORTANT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Whether a file entry should be downloaded
pub fn should_download(item: &ContentItem, max_file_size: u64) -> bool {
    is_important_file(&item.name) && item.size < max_file_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::ContentType;

    fn file(name: &str, size: u64) -> ContentItem {
        ContentItem {
            name: name.to_string(),
            path: name.to_string(),
            item_type: ContentType::File,
            size,
            download_url: Some(format!("https://raw.example/{name}")),
        }
    }

    #[test]
    fn test_denied_dirs() {
        for name in ["node_modules", ".git", "dist", "build", "coverage", ".next"] {
            assert!(is_denied_dir(name), "{name} should be denied");
        }
        assert!(!is_denied_dir("src"));
        assert!(!is_denied_dir("builds"));
    }

    #[test]
    fn test_important_by_name_and_extension() {
        assert!(is_important_file("README.md"));
        assert!(is_important_file("requirements.txt"));
        assert!(is_important_file("go.mod"));
        assert!(is_important_file("main.rs"));
        assert!(is_important_file("config.yml"));
        assert!(!is_important_file("notes.txt"));
        assert!(!is_important_file("logo.png"));
        assert!(!is_important_file("Makefile"));
    }

    #[test]
    fn test_size_boundary() {
        assert!(should_download(&file("lib.rs", 99_999), 100_000));
        assert!(!should_download(&file("lib.rs", 100_000), 100_000));
        assert!(!should_download(&file("image.png", 10), 100_000));
    }
}
