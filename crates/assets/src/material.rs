use crate::channel::{AuxFlag, ChannelId};
use serde::{Deserialize, Serialize};

// Parameter names of the principled material node. These are the host's
// identifiers and must not change.

pub fn texture_parameter(channel: ChannelId) -> &'static str {
    match channel {
        ChannelId::BaseColor => "basecolor_texture",
        ChannelId::Roughness => "rough_texture",
        ChannelId::Normal => "baseNormal_texture",
        ChannelId::Occlusion => "occlusion_texture",
        ChannelId::Displacement => "dispTex_texture",
        ChannelId::Metallic => "metallic_texture",
        ChannelId::Emissive => "emissive_texture",
        ChannelId::Opacity => "opacity_texture",
    }
}

pub fn flag_parameter(flag: AuxFlag) -> &'static str {
    match flag {
        AuxFlag::EnableBaseColorTexture => "basecolor_useTexture",
        AuxFlag::EnableRoughnessTexture => "rough_useTexture",
        AuxFlag::EnableBumpAndNormal => "baseBumpAndNormal_enable",
        AuxFlag::FlipNormalY => "baseNormal_flipY",
        AuxFlag::EnableOcclusionTexture => "occlusion_useTexture",
        AuxFlag::EnableDisplacement => "dispTex_enable",
        AuxFlag::EnableMetallicTexture => "metallic_useTexture",
        AuxFlag::EnableEmissiveTexture => "emissive_useTexture",
        AuxFlag::EnableOpacityTexture => "opacity_useTexture",
    }
}

/// Value written into a named material parameter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ParameterValue {
    Path(String),
    Toggle(bool),
}
