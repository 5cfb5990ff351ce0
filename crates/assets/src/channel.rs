use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Input slot of a physically-based material.
/// The set is closed; adding a channel means adding a rule and a host parameter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChannelId {
    BaseColor,
    Roughness,
    Normal,
    Occlusion,
    Displacement,
    Metallic,
    Emissive,
    Opacity,
}

impl ChannelId {
    pub const ALL: [ChannelId; 8] = [
        ChannelId::BaseColor,
        ChannelId::Roughness,
        ChannelId::Normal,
        ChannelId::Occlusion,
        ChannelId::Displacement,
        ChannelId::Metallic,
        ChannelId::Emissive,
        ChannelId::Opacity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChannelId::BaseColor => "base color",
            ChannelId::Roughness => "roughness",
            ChannelId::Normal => "normal",
            ChannelId::Occlusion => "occlusion",
            ChannelId::Displacement => "displacement",
            ChannelId::Metallic => "metallic",
            ChannelId::Emissive => "emissive",
            ChannelId::Opacity => "opacity",
        }
    }
}

impl Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Secondary toggle implied by assigning a texture to a channel.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuxFlag {
    EnableBaseColorTexture,
    EnableRoughnessTexture,
    EnableBumpAndNormal,
    FlipNormalY,
    EnableOcclusionTexture,
    EnableDisplacement,
    EnableMetallicTexture,
    EnableEmissiveTexture,
    EnableOpacityTexture,
}

impl Display for AuxFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuxFlag::EnableBaseColorTexture => "enable-base-color-texture",
            AuxFlag::EnableRoughnessTexture => "enable-roughness-texture",
            AuxFlag::EnableBumpAndNormal => "enable-bump-and-normal",
            AuxFlag::FlipNormalY => "flip-Y-on-normal",
            AuxFlag::EnableOcclusionTexture => "enable-occlusion-texture",
            AuxFlag::EnableDisplacement => "enable-displacement",
            AuxFlag::EnableMetallicTexture => "enable-metallic-texture",
            AuxFlag::EnableEmissiveTexture => "enable-emissive-texture",
            AuxFlag::EnableOpacityTexture => "enable-opacity-texture",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_channels_are_distinct_and_ordered() {
        let mut sorted = ChannelId::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, ChannelId::ALL.to_vec());
    }

    #[test]
    fn test_display() {
        assert_eq!(ChannelId::BaseColor.to_string(), "base color");
        assert_eq!(AuxFlag::FlipNormalY.to_string(), "flip-Y-on-normal");
    }
}
