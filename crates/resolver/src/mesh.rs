use log::{info, warn};
use std::path::PathBuf;
use texlink_assets::MeshAsset;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Error importing {}: {reason}", .path.display())]
pub struct MeshImportError {
    pub path: PathBuf,
    pub reason: String,
}

impl MeshImportError {
    pub fn new(mesh: &MeshAsset, reason: impl Into<String>) -> Self {
        MeshImportError {
            path: mesh.path.clone(),
            reason: reason.into(),
        }
    }
}

/// Scene side of mesh handling. Receives one mesh file per call.
pub trait MeshImporter {
    fn import_mesh(&mut self, mesh: &MeshAsset) -> Result<(), MeshImportError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshImportReport {
    pub imported: Vec<MeshAsset>,
    pub failed: Vec<MeshImportError>,
}

impl MeshImportReport {
    pub fn attempted(&self) -> usize {
        self.imported.len() + self.failed.len()
    }
}

/// Hand every mesh to the importer in order.
/// A failed import is logged and recorded, the remaining meshes are still tried.
pub fn import_meshes<I>(meshes: &[MeshAsset], importer: &mut I) -> MeshImportReport
where
    I: MeshImporter + ?Sized,
{
    let mut report = MeshImportReport::default();
    for mesh in meshes {
        match importer.import_mesh(mesh) {
            Ok(()) => {
                info!("Imported mesh {}", mesh.path.display());
                report.imported.push(mesh.clone());
            }
            Err(e) => {
                warn!("{}", e);
                report.failed.push(e);
            }
        }
    }

    report
}

/// Importer that accepts a mesh if it is a readable regular file.
/// Accepted meshes end up in [`MeshImportReport::imported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCheckImporter;

impl MeshImporter for FileCheckImporter {
    fn import_mesh(&mut self, mesh: &MeshAsset) -> Result<(), MeshImportError> {
        let metadata =
            std::fs::metadata(&mesh.path).map_err(|e| MeshImportError::new(mesh, e.to_string()))?;
        if !metadata.is_file() {
            return Err(MeshImportError::new(mesh, "not a regular file"));
        }
        std::fs::File::open(&mesh.path).map_err(|e| MeshImportError::new(mesh, e.to_string()))?;

        Ok(())
    }
}
