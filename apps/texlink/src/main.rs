use anyhow::Context;
use clap::Parser;
use log::{error, info, LevelFilter};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use texlink_assets::material::texture_parameter;
use texlink_resolver::{
    apply_classification, process_selection, FileCheckImporter, FolderReport, ParameterSheet,
    ReadMode, ResolverConfig, RunStatus,
};
use texlink_util::path::{expand_path, split_selection};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Texture folders to connect, taken as written
    folders: Vec<String>,

    /// Folders picked together as one `;`-joined list, as a file picker returns them
    #[arg(long, value_name = "LIST")]
    selection: Option<String>,

    /// TOML file with resolver settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Look for textures in subfolders too
    #[arg(short, long)]
    recursive: bool,

    /// Do not hand mesh files to the importer
    #[arg(long)]
    no_meshes: bool,

    /// Sort folder listings by name
    #[arg(short, long)]
    sort: bool,

    /// Write the material parameters to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More output, repeat for trace logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct SheetFile {
    materials: Vec<ParameterSheet>,
}

fn load_config(cli: &Cli) -> anyhow::Result<ResolverConfig> {
    let mut config = match &cli.config {
        Some(path) => ResolverConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ResolverConfig::default(),
    };

    if cli.recursive {
        config.read_mode = ReadMode::Recursive;
    }
    if cli.no_meshes {
        config.import_meshes = false;
    }
    if cli.sort {
        config.sort_listing = true;
    }

    Ok(config)
}

fn build_sheet(report: &FolderReport, imports: Vec<PathBuf>) -> ParameterSheet {
    for assignment in report.classification.iter() {
        info!(
            "{}: {} -> {}",
            report.material,
            assignment.texture.name,
            texture_parameter(assignment.channel)
        );
    }

    let mut sheet = ParameterSheet::new(report.material.clone(), report.directory.clone());
    apply_classification(&report.classification, &mut sheet);
    sheet.imports = imports;
    sheet
}

fn selected_folders(cli: &Cli) -> Vec<String> {
    let mut selection = cli.folders.clone();
    if let Some(list) = &cli.selection {
        selection.extend(split_selection(list));
    }
    selection
}

fn run(cli: &Cli) -> anyhow::Result<(RunStatus, SheetFile)> {
    let config = load_config(cli)?;
    let selection = selected_folders(cli);

    let outcome = process_selection(
        &selection,
        &config,
        |entry: &str| expand_path(entry),
        &mut FileCheckImporter,
    );
    let status = RunStatus::from_outcome(&outcome);

    let mut sheets = SheetFile::default();
    for report in outcome.iter().flatten().flatten() {
        let imports = report.meshes.imported.iter().map(|m| m.path.clone()).collect();
        sheets.materials.push(build_sheet(report, imports));
    }

    Ok((status, sheets))
}

fn write_sheets(cli: &Cli, sheets: &SheetFile) -> anyhow::Result<()> {
    if sheets.materials.is_empty() {
        return Ok(());
    }

    let text = toml::to_string(sheets).context("Failed to serialize material parameters")?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Material parameters written to {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = common::logging::init(level) {
        eprintln!("Failed to set up logging: {}", e);
    }

    let result = run(&cli).and_then(|(status, sheets)| {
        write_sheets(&cli, &sheets)?;
        Ok(status)
    });

    match result {
        Ok(status) if status.is_success() => info!("{} ({})", status, status.summary()),
        Ok(status) => {
            error!("{} ({})", status, status.summary());
            std::process::exit(1);
        }
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(1);
        }
    }
}
