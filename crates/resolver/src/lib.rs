pub mod apply;
pub mod config;
pub mod mesh;
pub mod pipeline;
pub mod resolver;
pub mod rules;
pub mod scanner;

pub use apply::{apply_classification, MaterialHost, ParameterSheet};
pub use config::{ConfigError, ReadMode, ResolverConfig};
pub use mesh::{import_meshes, FileCheckImporter, MeshImportError, MeshImportReport, MeshImporter};
pub use pipeline::{
    material_name, process_folder, process_selection, FolderError, FolderOutcome, FolderReport,
    RunError, RunStatus,
};
pub use resolver::{resolve, resolve_scan};
pub use scanner::{scan_directory, ScanError, ScanResult};
