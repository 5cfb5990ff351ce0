use crate::rules::classify;
use crate::scanner::ScanResult;
use log::{debug, warn};
use std::path::Path;
use texlink_assets::{ChannelAssignment, ClassificationResult, TextureFile};

/// Assign texture files to material channels.
///
/// Files are visited in the given order and each one goes to the first rule
/// that matches its file name. A file matching no rule is skipped. When two
/// files land on the same channel the later one replaces the earlier one.
/// Paths are built by joining `base` with the file name.
pub fn resolve<S: AsRef<str>>(files: &[S], base: &Path) -> ClassificationResult {
    let mut result = ClassificationResult::new();

    for file in files {
        let name = file.as_ref();
        // Only the file name takes part in matching, not the folders above it
        let key = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name);

        let Some(rule) = classify(key) else {
            debug!("No channel matches {}", name);
            continue;
        };

        debug!("{} -> {}", name, rule.channel);
        let assignment = ChannelAssignment {
            channel: rule.channel,
            texture: TextureFile::new(name.to_string(), base.join(name)),
            flags: rule.flags.to_vec(),
        };
        if let Some(previous) = result.assign(assignment) {
            warn!(
                "{} replaces {} on the {} channel",
                name, previous.texture.name, rule.channel
            );
        }
    }

    result
}

pub fn resolve_scan(scan: &ScanResult) -> ClassificationResult {
    resolve(&scan.image_names(), &scan.directory)
}
