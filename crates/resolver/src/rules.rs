use texlink_assets::channel::{AuxFlag, ChannelId};

/// Keyword rule mapping a texture filename to a material channel.
#[derive(Debug)]
pub struct ChannelRule {
    pub channel: ChannelId,
    pub keywords: &'static [&'static str],
    pub flags: &'static [AuxFlag],
}

impl ChannelRule {
    /// Case-sensitive substring test against any of the keywords.
    pub fn matches(&self, name: &str) -> bool {
        self.keywords.iter().any(|keyword| name.contains(keyword))
    }
}

/// Rules in precedence order. The first matching rule decides the channel,
/// later rules are not consulted.
pub static RULES: [ChannelRule; 8] = [
    ChannelRule {
        channel: ChannelId::BaseColor,
        keywords: &["Albedo", "Base", "Color"],
        flags: &[AuxFlag::EnableBaseColorTexture],
    },
    ChannelRule {
        channel: ChannelId::Roughness,
        keywords: &["Roughness"],
        flags: &[AuxFlag::EnableRoughnessTexture],
    },
    ChannelRule {
        channel: ChannelId::Normal,
        keywords: &["Normal", "Bump"],
        flags: &[AuxFlag::EnableBumpAndNormal, AuxFlag::FlipNormalY],
    },
    ChannelRule {
        channel: ChannelId::Occlusion,
        keywords: &["AO"],
        flags: &[AuxFlag::EnableOcclusionTexture],
    },
    ChannelRule {
        channel: ChannelId::Displacement,
        keywords: &["Displacement"],
        flags: &[AuxFlag::EnableDisplacement],
    },
    ChannelRule {
        channel: ChannelId::Metallic,
        keywords: &["Metalness", "Metallic"],
        flags: &[AuxFlag::EnableMetallicTexture],
    },
    ChannelRule {
        channel: ChannelId::Emissive,
        keywords: &["Emissive"],
        flags: &[AuxFlag::EnableEmissiveTexture],
    },
    ChannelRule {
        channel: ChannelId::Opacity,
        keywords: &["Opacity"],
        flags: &[AuxFlag::EnableOpacityTexture],
    },
];

pub fn classify(name: &str) -> Option<&'static ChannelRule> {
    RULES.iter().find(|rule| rule.matches(name))
}
