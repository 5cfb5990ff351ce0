use crate::config::{ReadMode, ResolverConfig};
use log::{debug, info};
use std::path::{Path, PathBuf};
use texlink_assets::{MeshAsset, TextureFile};
use texlink_util::profile::Measure;
use thiserror::Error;

pub const IMAGE_EXTENSIONS: [&str; 4] = ["exr", "jpg", "png", "tga"];
pub const MESH_EXTENSIONS: [&str; 2] = ["fbx", "obj"];

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Cannot list directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Mesh,
}

/// Kind of the file judging by its extension only.
/// The comparison is case-sensitive, `Albedo.PNG` is not an image.
pub fn file_kind(name: &str) -> Option<FileKind> {
    let extension = Path::new(name).extension()?.to_str()?;
    if IMAGE_EXTENSIONS.contains(&extension) {
        Some(FileKind::Image)
    } else if MESH_EXTENSIONS.contains(&extension) {
        Some(FileKind::Mesh)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub directory: PathBuf,
    pub images: Vec<TextureFile>,
    pub meshes: Vec<MeshAsset>,
}

impl ScanResult {
    pub fn image_names(&self) -> Vec<&str> {
        self.images.iter().map(|i| i.name.as_str()).collect()
    }
}

/// Split a listing into images and meshes, keeping the listing order.
/// Anything else is dropped.
pub fn partition<I>(directory: &Path, names: I) -> ScanResult
where
    I: IntoIterator<Item = String>,
{
    let mut images = Vec::new();
    let mut meshes = Vec::new();
    for name in names {
        match file_kind(&name) {
            Some(FileKind::Image) => {
                let path = directory.join(&name);
                images.push(TextureFile::new(name, path));
            }
            Some(FileKind::Mesh) => {
                let path = directory.join(&name);
                meshes.push(MeshAsset::new(name, path));
            }
            None => debug!("Ignoring {}", name),
        }
    }

    ScanResult {
        directory: directory.to_path_buf(),
        images,
        meshes,
    }
}

fn access_error(directory: &Path, source: std::io::Error) -> ScanError {
    ScanError::DirectoryAccess {
        path: directory.to_path_buf(),
        source,
    }
}

/// Collect names of regular files under the directory.
/// In recursive mode the names are relative to `directory`.
fn list_files(directory: &Path, read_mode: ReadMode) -> Result<Vec<String>, ScanError> {
    let metadata = std::fs::metadata(directory).map_err(|e| access_error(directory, e))?;
    if !metadata.is_dir() {
        return Err(access_error(
            directory,
            std::io::Error::other("not a directory"),
        ));
    }

    let mut names = Vec::new();
    match read_mode {
        ReadMode::Flat => {
            let entries = std::fs::read_dir(directory).map_err(|e| access_error(directory, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| access_error(directory, e))?;
                if !entry.path().is_file() {
                    continue;
                }
                match entry.file_name().into_string() {
                    Ok(name) => names.push(name),
                    Err(name) => debug!("Skipping non UTF-8 file name {:?}", name),
                }
            }
        }
        ReadMode::Recursive => {
            for entry in walkdir::WalkDir::new(directory).min_depth(1) {
                let entry = entry.map_err(|e| access_error(directory, e.into()))?;
                if !entry.path().is_file() {
                    continue;
                }
                let relative = entry.path().strip_prefix(directory).unwrap_or(entry.path());
                match relative.to_str() {
                    Some(name) => names.push(name.to_string()),
                    None => debug!("Skipping non UTF-8 file name {:?}", relative),
                }
            }
        }
    }

    Ok(names)
}

/// List the directory and partition its files into textures and meshes.
/// A relative directory is resolved against the working directory first, so
/// every path in the result is absolute.
/// Fails without a partial result if the directory cannot be read.
pub fn scan_directory(directory: &Path, config: &ResolverConfig) -> Result<ScanResult, ScanError> {
    let _measure = Measure::new(format!("Scanned {}", directory.display()));

    let directory = std::path::absolute(directory).map_err(|e| access_error(directory, e))?;
    let mut names = list_files(&directory, config.read_mode)?;
    if config.sort_listing {
        names.sort();
    }

    let result = partition(&directory, names);
    info!(
        "Found {} texture(s) and {} mesh(es) in {}",
        result.images.len(),
        result.meshes.len(),
        directory.display()
    );
    Ok(result)
}
