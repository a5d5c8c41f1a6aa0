//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Plan the project structure from the configuration
//! 2. Write it to the filesystem
//!
//! Rendering is pure (see `domain::cmake`); all I/O goes through the
//! `Filesystem` port.

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{FsEntry, ProjectConfig, ProjectStructure, cmake},
    error::ForgeResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate the starter project under `output_root`.
    ///
    /// This is the main use case - materialises
    /// `<output_root>/<project_name>` with its `src` and `test` trees.
    #[instrument(skip_all, fields(project = %config.project_name(), output = %output_root.as_ref().display()))]
    pub fn scaffold(
        &self,
        config: &ProjectConfig,
        output_root: impl AsRef<Path>,
    ) -> ForgeResult<()> {
        info!("Generating CMake starter project");

        let structure = plan_structure(config, output_root.as_ref());
        structure.validate()?;

        self.write_structure(&structure)?;

        info!("Generation completed successfully");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write the structure to the filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure) -> ForgeResult<()> {
        if self.filesystem.exists(structure.root()) {
            return Err(ApplicationError::ProjectExists {
                path: structure.root().to_path_buf(),
            }
            .into());
        }

        match self.write_all(structure) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(structure.root());
                Err(e)
            }
        }
    }

    /// Write all entries in the structure.
    fn write_all(&self, structure: &ProjectStructure) -> ForgeResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for entry in &structure.entries {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&structure.root().join(dir))?;
                }
                FsEntry::File(file) => {
                    let path = structure.root().join(&file.path);
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

/// Build the materialisation plan for a config.
///
/// Directory entries come first so the tree exists before any file write;
/// file order then follows the generated documents.
pub fn plan_structure(config: &ProjectConfig, output_root: &Path) -> ProjectStructure {
    let src = Path::new(config.source_dir());
    let test = Path::new(config.tests_dir());

    let mut structure = ProjectStructure::new(output_root.join(config.project_name()));
    structure.add_directory(src);
    structure.add_directory(test);

    structure.add_file(src.join("main.cpp"), cmake::main_cpp());
    for case in config.test_case_names() {
        structure.add_file(test.join(format!("{case}.cpp")), cmake::test_stub());
    }

    structure.add_file("CMakeLists.txt", cmake::root_cmake(config));
    structure.add_file(src.join("CMakeLists.txt"), cmake::src_cmake(config));
    structure.add_file(test.join("CMakeLists.txt"), cmake::test_cmake(config));

    structure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_contains_two_dirs_and_six_files() {
        let config = ProjectConfig::default();
        let structure = plan_structure(&config, Path::new("/out"));

        assert_eq!(structure.entry_count(), 8);
        assert_eq!(structure.directories().count(), 2);
        assert_eq!(structure.files().count(), 6);
        assert!(structure.validate().is_ok());
    }

    #[test]
    fn plan_root_includes_project_name() {
        let config = ProjectConfig::new("MyApp", "3.14", false).unwrap();
        let structure = plan_structure(&config, Path::new("/out"));
        assert_eq!(structure.root(), Path::new("/out/MyApp"));
    }

    #[test]
    fn plan_places_files_in_expected_directories() {
        let config = ProjectConfig::default();
        let structure = plan_structure(&config, Path::new("."));

        let paths: Vec<String> = structure
            .files()
            .map(|f| f.path.display().to_string())
            .collect();

        assert!(paths.contains(&"src/main.cpp".to_string()));
        assert!(paths.contains(&"CMakeLists.txt".to_string()));
        assert!(paths.contains(&"src/CMakeLists.txt".to_string()));
        assert!(paths.contains(&"test/CMakeLists.txt".to_string()));
        assert!(paths.contains(&"test/test_case1.cpp".to_string()));
        assert!(paths.contains(&"test/test_case2.cpp".to_string()));
    }

    #[test]
    fn plan_test_stubs_are_empty() {
        let config = ProjectConfig::default();
        let structure = plan_structure(&config, Path::new("."));
        for file in structure.files() {
            if file.path.extension().is_some_and(|e| e == "cpp")
                && file.path.starts_with("test")
            {
                assert!(file.is_empty());
            }
        }
    }
}
