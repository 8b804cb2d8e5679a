//! Module discovery and the resource-file naming policy.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use walkdir::WalkDir;

/// Subdirectory of a module that holds its resource documents.
pub(crate) const RESOURCES_DIR: &str = "resources";
/// Subdirectory of a module that receives generated sources.
pub(crate) const GEN_DIR: &str = "gen";
/// Resource file extension consulted in scan mode.
const RESOURCE_EXTENSION: &str = "resx";

/// Access level of a generated accessor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// `pub` — the resource file stem carried the `public.` prefix.
    Public,
    /// `pub(crate)` — every other stem.
    Internal,
}

impl Access {
    /// Infix spliced into the resource-set identifier for public types.
    pub(crate) fn identifier_infix(self) -> &'static str {
        match self {
            Access::Public => "public.",
            Access::Internal => "",
        }
    }
}

/// Everything the generator needs for one resource file.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Path of the resource document to parse.
    pub file_path: PathBuf,
    /// Module (grouping) name; first component of the resource-set identifier.
    pub module_name: String,
    /// Possibly dotted class name, post naming policy.
    pub class_name: String,
    /// Access level from the naming policy.
    pub access: Access,
}

/// Naming policy: derives the access level and class name from a file stem.
///
/// A case-insensitive `public.` prefix makes the type public and is stripped;
/// any other stem names an internal type, unchanged.
pub(crate) fn classify_stem(stem: &str) -> (Access, &str) {
    const PREFIX: &str = "public.";
    match stem.get(..PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(PREFIX) && stem.len() > PREFIX.len() => {
            (Access::Public, &stem[PREFIX.len()..])
        }
        _ => (Access::Internal, stem),
    }
}

/// How candidate files inside a `resources` directory are matched.
#[derive(Debug, Clone)]
pub(crate) enum FileFilter {
    /// Scan mode: every `*.resx` file.
    Extension,
    /// Single-file mode: exactly this file name.
    Name(OsString),
}

impl FileFilter {
    fn matches(&self, path: &Path) -> bool {
        match self {
            FileFilter::Extension => path.extension().is_some_and(|ext| ext == RESOURCE_EXTENSION),
            FileFilter::Name(name) => path.file_name().is_some_and(|file| file == name.as_os_str()),
        }
    }
}

/// Single-file mode: the module directory is the grandparent of the file
/// (`<module>/resources/<file>`).
pub(crate) fn module_dir_of(file_path: &Path) -> Result<PathBuf> {
    file_path
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("{} has no containing module directory", file_path.display()))
}

/// Subdirectories of `parent`, sorted by path. Each is a candidate module.
pub(crate) fn candidate_modules(parent: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(parent).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("failed to list {}", parent.display()))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Matching resource files directly inside `resources_dir`, sorted by path.
pub(crate) fn resource_files(resources_dir: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(resources_dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("failed to list {}", resources_dir.display()))?;
        if entry.file_type().is_file() && filter.matches(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Derives the generation request for one resource file inside `module_dir`.
pub(crate) fn request_for(module_dir: &Path, file_path: PathBuf) -> Result<GenerationRequest> {
    let module_name = module_dir
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("module directory {} has no usable name", module_dir.display()))?
        .to_string();
    let stem = file_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| anyhow!("resource file {} has no usable stem", file_path.display()))?;
    let (access, class_name) = classify_stem(stem);
    Ok(GenerationRequest {
        module_name,
        class_name: class_name.to_string(),
        access,
        file_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_prefix_is_stripped_case_insensitively() {
        assert_eq!(classify_stem("public.Greeting"), (Access::Public, "Greeting"));
        assert_eq!(classify_stem("PUBLIC.Greeting"), (Access::Public, "Greeting"));
        assert_eq!(classify_stem("Public.Full.Name"), (Access::Public, "Full.Name"));
    }

    #[test]
    fn anything_else_stays_internal_and_unchanged() {
        assert_eq!(classify_stem("Greeting"), (Access::Internal, "Greeting"));
        assert_eq!(classify_stem("publicGreeting"), (Access::Internal, "publicGreeting"));
        assert_eq!(classify_stem("Nested.Name"), (Access::Internal, "Nested.Name"));
        // A bare prefix names nothing.
        assert_eq!(classify_stem("public."), (Access::Internal, "public."));
    }

    #[test]
    fn module_dir_is_the_grandparent() {
        let module = module_dir_of(Path::new("Greeter/resources/public.Messages.resx")).unwrap();
        assert_eq!(module, Path::new("Greeter"));
        assert!(module_dir_of(Path::new("public.Messages.resx")).is_err());
    }

    #[test]
    fn request_derivation_uses_the_naming_policy() {
        let request = request_for(
            Path::new("/tree/Greeter"),
            PathBuf::from("/tree/Greeter/resources/public.Messages.resx"),
        )
        .unwrap();
        assert_eq!(request.module_name, "Greeter");
        assert_eq!(request.class_name, "Messages");
        assert_eq!(request.access, Access::Public);
    }

    #[test]
    fn extension_filter_only_matches_resx() {
        let filter = FileFilter::Extension;
        assert!(filter.matches(Path::new("res/Strings.resx")));
        assert!(!filter.matches(Path::new("res/Strings.resx.bak")));
        assert!(!filter.matches(Path::new("res/notes.txt")));
    }
}
