use crate::config::ResolverConfig;
use crate::mesh::{import_meshes, MeshImportReport, MeshImporter};
use crate::resolver::resolve_scan;
use crate::scanner::{scan_directory, ScanError};
use log::{debug, error, info};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use texlink_assets::ClassificationResult;
use texlink_util::path::ExpandError;
use texlink_util::profile::Measure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("No texture folder was selected")]
    NoSelection,
}

/// Why a single selected folder could not be processed.
#[derive(Debug, Error)]
pub enum FolderError {
    #[error("Failed to expand folder path: {0}")]
    Expand(#[from] ExpandError),
    #[error("Error finding files: {0}")]
    Scan(#[from] ScanError),
}

/// Outcome of processing one texture folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderReport {
    pub directory: PathBuf,
    pub material: String,
    pub classification: ClassificationResult,
    pub meshes: MeshImportReport,
}

pub type FolderOutcome = Result<FolderReport, FolderError>;

/// Name for the material created from a folder: its last component with
/// spaces turned into underscores.
pub fn material_name(directory: &Path) -> String {
    directory
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("material")
        .replace(' ', "_")
}

/// Scan one folder, import the meshes found there, then classify its textures.
pub fn process_folder<I>(
    directory: &Path,
    config: &ResolverConfig,
    importer: &mut I,
) -> Result<FolderReport, ScanError>
where
    I: MeshImporter + ?Sized,
{
    let _measure = Measure::new(format!("Processed {}", directory.display()));

    let scan = scan_directory(directory, config)?;
    let meshes = if config.import_meshes {
        import_meshes(&scan.meshes, importer)
    } else {
        if !scan.meshes.is_empty() {
            debug!("Mesh import disabled, leaving {} mesh(es)", scan.meshes.len());
        }
        MeshImportReport::default()
    };
    let classification = resolve_scan(&scan);

    let material = material_name(&scan.directory);
    info!(
        "Material {}: {} channel(s) assigned from {}",
        material,
        classification.len(),
        scan.directory.display()
    );

    Ok(FolderReport {
        directory: scan.directory,
        material,
        classification,
        meshes,
    })
}

fn process_entry<E, I>(
    entry: &str,
    config: &ResolverConfig,
    expand: &E,
    importer: &mut I,
) -> FolderOutcome
where
    E: Fn(&str) -> Result<PathBuf, ExpandError>,
    I: MeshImporter + ?Sized,
{
    let directory = expand(entry)?;
    debug!("Expanded {} to {}", entry, directory.display());
    Ok(process_folder(&directory, config, importer)?)
}

/// Process every selected folder in turn, each one as a separate run.
/// Entries are expanded with `expand` first. A folder that cannot be expanded
/// or listed fails on its own, the remaining folders are still processed.
pub fn process_selection<E, I>(
    selection: &[String],
    config: &ResolverConfig,
    expand: E,
    importer: &mut I,
) -> Result<Vec<FolderOutcome>, RunError>
where
    E: Fn(&str) -> Result<PathBuf, ExpandError>,
    I: MeshImporter + ?Sized,
{
    if selection.is_empty() {
        return Err(RunError::NoSelection);
    }

    let mut outcomes = Vec::with_capacity(selection.len());
    for entry in selection {
        let outcome = process_entry(entry, config, &expand, importer);
        if let Err(e) = &outcome {
            error!("{}: {}", entry, e);
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Final status shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// At least one folder was connected
    Connected {
        folders: usize,
        folders_failed: usize,
        assignments: usize,
        meshes_imported: usize,
        meshes_failed: usize,
    },
    /// Every selected folder failed
    Failed { folders_failed: usize },
    NoSelection,
}

impl RunStatus {
    pub fn from_outcome(outcome: &Result<Vec<FolderOutcome>, RunError>) -> RunStatus {
        let outcomes = match outcome {
            Ok(outcomes) => outcomes,
            Err(RunError::NoSelection) => return RunStatus::NoSelection,
        };

        let reports: Vec<&FolderReport> = outcomes.iter().filter_map(|o| o.as_ref().ok()).collect();
        let folders_failed = outcomes.len() - reports.len();
        if reports.is_empty() {
            return RunStatus::Failed { folders_failed };
        }

        RunStatus::Connected {
            folders: reports.len(),
            folders_failed,
            assignments: reports.iter().map(|r| r.classification.len()).sum(),
            meshes_imported: reports.iter().map(|r| r.meshes.imported.len()).sum(),
            meshes_failed: reports.iter().map(|r| r.meshes.failed.len()).sum(),
        }
    }

    /// A missing selection counts as success, any failed folder does not.
    pub fn is_success(&self) -> bool {
        match self {
            RunStatus::Connected { folders_failed, .. } => *folders_failed == 0,
            RunStatus::Failed { .. } => false,
            RunStatus::NoSelection => true,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            RunStatus::Connected {
                folders,
                folders_failed,
                assignments,
                meshes_imported,
                meshes_failed,
            } => format!(
                "{} folder(s) connected, {} failed, {} channel(s), {} mesh(es) imported, {} failed",
                folders, folders_failed, assignments, meshes_imported, meshes_failed
            ),
            RunStatus::Failed { folders_failed } => format!("{} folder(s) failed", folders_failed),
            RunStatus::NoSelection => "nothing to do".to_string(),
        }
    }
}

impl Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Connected { folders_failed: 0, .. } => {
                write!(f, "Textures have been successfully connected!")
            }
            RunStatus::Connected { .. } => write!(f, "Some texture folders could not be connected."),
            RunStatus::Failed { .. } => write!(f, "No texture folder could be connected."),
            RunStatus::NoSelection => write!(f, "No texture folder was selected."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshImportError;
    use std::fs;
    use texlink_assets::channel::ChannelId;
    use texlink_assets::MeshAsset;
    use texlink_util::path::expand_with;

    #[derive(Default)]
    struct FailFirstImporter {
        calls: usize,
    }

    impl MeshImporter for FailFirstImporter {
        fn import_mesh(&mut self, mesh: &MeshAsset) -> Result<(), MeshImportError> {
            self.calls += 1;
            if self.calls == 1 {
                Err(MeshImportError::new(mesh, "unsupported version"))
            } else {
                Ok(())
            }
        }
    }

    fn sorted() -> ResolverConfig {
        ResolverConfig {
            sort_listing: true,
            ..Default::default()
        }
    }

    fn make_folder(root: &Path, name: &str, files: &[&str]) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), b"").unwrap();
        }
        dir
    }

    fn as_is(entry: &str) -> Result<PathBuf, ExpandError> {
        Ok(PathBuf::from(entry))
    }

    #[test]
    fn test_material_name() {
        assert_eq!(material_name(Path::new("/library/Old Wood/")), "Old_Wood");
        assert_eq!(material_name(Path::new("/library/Bark")), "Bark");
        assert_eq!(material_name(Path::new("/")), "material");
    }

    #[test]
    fn test_process_folder() {
        let root = tempfile::tempdir().unwrap();
        let dir = make_folder(
            root.path(),
            "Mossy Rock",
            &[
                "Rock_Albedo.png",
                "Rock_Normal.png",
                "a_broken.fbx",
                "b_rock.obj",
                "notes.txt",
            ],
        );
        let mut importer = FailFirstImporter::default();

        let report = process_folder(&dir, &sorted(), &mut importer).unwrap();

        assert_eq!(report.material, "Mossy_Rock");
        assert_eq!(
            report.classification.channels(),
            vec![ChannelId::BaseColor, ChannelId::Normal]
        );
        assert_eq!(importer.calls, 2);
        assert_eq!(report.meshes.failed.len(), 1);
        assert_eq!(report.meshes.imported.len(), 1);
        assert_eq!(report.meshes.imported[0].name, "b_rock.obj");
    }

    #[test]
    fn test_relative_folder_gives_absolute_texture_paths() {
        let root = tempfile::tempdir_in(".").unwrap();
        let dir = make_folder(root.path(), "Wood", &["Wood_Albedo.png"]);
        assert!(dir.is_relative());
        let mut importer = FailFirstImporter::default();

        let report = process_folder(&dir, &sorted(), &mut importer).unwrap();

        assert_eq!(report.material, "Wood");
        assert!(report.directory.is_absolute());
        let texture = &report.classification.get(ChannelId::BaseColor).unwrap().texture;
        assert!(texture.path.is_absolute());
        assert_eq!(texture.path, std::path::absolute(dir.join("Wood_Albedo.png")).unwrap());
    }

    #[test]
    fn test_mesh_import_can_be_disabled() {
        let root = tempfile::tempdir().unwrap();
        let dir = make_folder(root.path(), "Tree", &["Tree.fbx", "Tree_Color.jpg"]);
        let config = ResolverConfig {
            import_meshes: false,
            ..sorted()
        };
        let mut importer = FailFirstImporter::default();

        let report = process_folder(&dir, &config, &mut importer).unwrap();

        assert_eq!(importer.calls, 0);
        assert_eq!(report.meshes.attempted(), 0);
        assert_eq!(report.classification.len(), 1);
    }

    #[test]
    fn test_selection_with_variables() {
        let root = tempfile::tempdir().unwrap();
        make_folder(root.path(), "Wood", &["Wood_Albedo.png", "Wood_AO.png"]);
        make_folder(root.path(), "Stone", &["Stone_Opacity.tga"]);
        let root_str = root.path().to_str().unwrap().to_string();
        let expand = |entry: &str| {
            expand_with(entry, |name| (name == "LIB").then(|| root_str.clone()))
        };

        let selection = vec!["$LIB/Wood/".to_string(), "${LIB}/Stone".to_string()];
        let mut importer = FailFirstImporter::default();
        let outcome = process_selection(&selection, &sorted(), expand, &mut importer);

        let outcomes = outcome.as_ref().unwrap();
        assert_eq!(outcomes.len(), 2);
        let wood = outcomes[0].as_ref().unwrap();
        assert_eq!(wood.material, "Wood");
        assert_eq!(wood.classification.len(), 2);
        let stone = outcomes[1].as_ref().unwrap();
        assert_eq!(stone.material, "Stone");
        assert_eq!(stone.classification.channels(), vec![ChannelId::Opacity]);

        let status = RunStatus::from_outcome(&outcome);
        assert_eq!(
            status,
            RunStatus::Connected {
                folders: 2,
                folders_failed: 0,
                assignments: 3,
                meshes_imported: 0,
                meshes_failed: 0,
            }
        );
        assert!(status.is_success());
        assert_eq!(status.to_string(), "Textures have been successfully connected!");
    }

    #[test]
    fn test_empty_selection() {
        let mut importer = FailFirstImporter::default();
        let outcome = process_selection(&[], &ResolverConfig::default(), as_is, &mut importer);
        assert!(matches!(outcome, Err(RunError::NoSelection)));

        let status = RunStatus::from_outcome(&outcome);
        assert_eq!(status, RunStatus::NoSelection);
        assert!(status.is_success());
        assert_eq!(status.to_string(), "No texture folder was selected.");
    }

    #[test]
    fn test_missing_folder_does_not_drop_other_folders() {
        let root = tempfile::tempdir().unwrap();
        let good = make_folder(root.path(), "Bark", &["Bark_Albedo.png", "x.fbx", "y.obj"]);
        let selection = vec![
            good.to_str().unwrap().to_string(),
            root.path().join("gone").to_str().unwrap().to_string(),
        ];
        let mut importer = FailFirstImporter::default();

        let outcome = process_selection(&selection, &sorted(), as_is, &mut importer);

        let outcomes = outcome.as_ref().unwrap();
        assert_eq!(outcomes.len(), 2);
        let bark = outcomes[0].as_ref().unwrap();
        assert_eq!(bark.material, "Bark");
        assert_eq!(bark.meshes.attempted(), 2);
        assert!(matches!(outcomes[1], Err(FolderError::Scan(_))));

        let status = RunStatus::from_outcome(&outcome);
        assert_eq!(
            status,
            RunStatus::Connected {
                folders: 1,
                folders_failed: 1,
                assignments: 1,
                meshes_imported: 1,
                meshes_failed: 1,
            }
        );
        assert!(!status.is_success());
        assert_eq!(status.to_string(), "Some texture folders could not be connected.");
    }

    #[test]
    fn test_every_folder_failing() {
        let mut importer = FailFirstImporter::default();
        let outcome = process_selection(
            &["$NOPE/tex".to_string()],
            &ResolverConfig::default(),
            |s: &str| expand_with(s, |_| None),
            &mut importer,
        );

        let outcomes = outcome.as_ref().unwrap();
        assert!(matches!(outcomes[0], Err(FolderError::Expand(_))));
        let status = RunStatus::from_outcome(&outcome);
        assert_eq!(status, RunStatus::Failed { folders_failed: 1 });
        assert!(!status.is_success());
    }
}
