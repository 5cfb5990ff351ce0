use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use texlink_assets::material::{flag_parameter, texture_parameter, ParameterValue};
use texlink_assets::ClassificationResult;

/// Material node living in the host application.
/// Parameters are addressed by their host names.
pub trait MaterialHost {
    fn set_parameter(&mut self, name: &str, value: ParameterValue);
}

/// Write every assignment into the host: the texture path first, then the
/// flags it implies. Returns the number of parameters written.
pub fn apply_classification<H>(result: &ClassificationResult, host: &mut H) -> usize
where
    H: MaterialHost + ?Sized,
{
    let mut written = 0;
    for assignment in result.iter() {
        let path = assignment.texture.path.to_string_lossy().into_owned();
        debug!("Setting {} to {}", texture_parameter(assignment.channel), path);
        host.set_parameter(
            texture_parameter(assignment.channel),
            ParameterValue::Path(path),
        );
        written += 1;

        for flag in &assignment.flags {
            host.set_parameter(flag_parameter(*flag), ParameterValue::Toggle(true));
            written += 1;
        }
    }

    written
}

/// In-memory material that records what would be set on the host node.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSheet {
    pub material: String,
    pub directory: PathBuf,
    #[serde(default)]
    pub imports: Vec<PathBuf>,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterValue>,
}

impl ParameterSheet {
    pub fn new(material: String, directory: PathBuf) -> Self {
        ParameterSheet {
            material,
            directory,
            imports: Vec::new(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters.get(name)
    }
}

impl MaterialHost for ParameterSheet {
    fn set_parameter(&mut self, name: &str, value: ParameterValue) {
        self.parameters.insert(name.to_string(), value);
    }
}
