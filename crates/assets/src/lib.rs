use crate::channel::{AuxFlag, ChannelId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod channel;
pub mod material;

/// Image file found in a texture folder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureFile {
    pub name: String,
    pub path: PathBuf,
}

impl TextureFile {
    pub fn new(name: String, path: PathBuf) -> TextureFile {
        TextureFile { name, path }
    }
}

/// Mesh or scene file found next to the textures.
/// Only the location is known, the content is never read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeshAsset {
    pub name: String,
    pub path: PathBuf,
}

impl MeshAsset {
    pub fn new(name: String, path: PathBuf) -> MeshAsset {
        MeshAsset { name, path }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChannelAssignment {
    pub channel: ChannelId,
    pub texture: TextureFile,
    pub flags: Vec<AuxFlag>,
}

/// Channel assignments of one resolver run, one per channel at most.
/// Assignments are kept in channel order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassificationResult {
    assignments: Vec<ChannelAssignment>,
}

impl ClassificationResult {
    pub fn new() -> ClassificationResult {
        ClassificationResult::default()
    }

    /// Store the assignment, replacing the previous one for the same channel.
    /// The replaced assignment is returned.
    pub fn assign(&mut self, assignment: ChannelAssignment) -> Option<ChannelAssignment> {
        match self
            .assignments
            .binary_search_by_key(&assignment.channel, |a| a.channel)
        {
            Ok(index) => Some(std::mem::replace(&mut self.assignments[index], assignment)),
            Err(index) => {
                self.assignments.insert(index, assignment);
                None
            }
        }
    }

    pub fn get(&self, channel: ChannelId) -> Option<&ChannelAssignment> {
        self.assignments.iter().find(|a| a.channel == channel)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelAssignment> {
        self.assignments.iter()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn channels(&self) -> Vec<ChannelId> {
        self.assignments.iter().map(|a| a.channel).collect()
    }
}

impl IntoIterator for ClassificationResult {
    type Item = ChannelAssignment;
    type IntoIter = std::vec::IntoIter<ChannelAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.into_iter()
    }
}
