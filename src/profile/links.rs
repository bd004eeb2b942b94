//! Outbound social links shown in the contact panel.

use crate::storage::config::LinkSettings;

/// Kind of profile a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialKind {
    /// Source-code host (GitHub)
    SourceHost,
    /// Professional network (LinkedIn)
    ProfessionalNetwork,
    /// Social feed (Twitter)
    SocialFeed,
}

impl SocialKind {
    /// Label shown on the link.
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::SourceHost => "GitHub",
            SocialKind::ProfessionalNetwork => "LinkedIn",
            SocialKind::SocialFeed => "Twitter",
        }
    }
}

/// A link opened in a new browsing context. Reachability is never checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

impl SocialLink {
    /// Build the three contact links, in display order.
    pub fn from_settings(settings: &LinkSettings) -> Vec<SocialLink> {
        vec![
            SocialLink {
                kind: SocialKind::SourceHost,
                url: settings.github.clone(),
            },
            SocialLink {
                kind: SocialKind::ProfessionalNetwork,
                url: settings.linkedin.clone(),
            },
            SocialLink {
                kind: SocialKind::SocialFeed,
                url: settings.twitter.clone(),
            },
        ]
    }
}
