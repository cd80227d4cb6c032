// SPDX-License-Identifier: MPL-2.0
//! Record types for the static content catalog.
//!
//! These types carry no UI handles: colors are plain [`Rgb`] triples and
//! images are [`AssetRef`] identifiers that the presentation layer maps to
//! whatever it can draw.

use std::fmt;

/// An sRGB color as declared in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Build-time identifier of a bundled image.
///
/// The catalog only names assets; loading and decoding belong to the asset
/// pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetRef(pub &'static str);

/// Progress of a project or document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Completed,
    InProgress,
    Archived,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Completed, Status::InProgress, Status::Archived];

    /// Badge background for this status. Badge text is always white.
    #[must_use]
    pub const fn badge_color(self) -> Rgb {
        match self {
            Status::Completed => Rgb::hex(0x10b981),
            Status::InProgress => Rgb::hex(0xf59e0b),
            Status::Archived => Rgb::hex(0x6b7280),
        }
    }

    /// Fluent message key of the badge label.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Status::Completed => "status-completed",
            Status::InProgress => "status-in-progress",
            Status::Archived => "status-archived",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Completed => "Completed",
            Status::InProgress => "In Progress",
            Status::Archived => "Archived",
        };
        f.write_str(label)
    }
}

/// A profile on another platform, listed on the contact screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub color: Rgb,
    pub description: &'static str,
}

impl SocialLink {
    /// Whether tapping this link asks for confirmation before opening the
    /// mail client.
    #[must_use]
    pub fn is_email(&self) -> bool {
        self.id == "email"
    }
}

/// A repository shown on the GitHub tab of the projects screen.
#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    /// Symbol drawn in place of a cover image.
    pub image: &'static str,
    pub github: &'static str,
    pub status: Status,
}

/// An academic document shown on the school tab of the projects screen.
#[derive(Debug, PartialEq, Eq)]
pub struct Document {
    pub id: u32,
    pub title: &'static str,
    pub subject: &'static str,
    pub description: &'static str,
    pub image: AssetRef,
    pub kind: &'static str,
    pub semester: &'static str,
    pub status: Status,
}

/// An email address offered in the home screen's email chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailContact {
    pub address: &'static str,
}

impl EmailContact {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.address)
    }
}

/// Visual weight of a group of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Primary,
    Secondary,
    Tertiary,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub tier: SkillTier,
    pub skills: &'static [&'static str],
}

/// Biography shown in the home screen header and about section.
#[derive(Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub about: &'static str,
    pub picture: AssetRef,
    pub github_url: &'static str,
    pub personal_email: EmailContact,
    pub university_email: EmailContact,
    pub skills: &'static [SkillGroup],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_hex_splits_channels() {
        assert_eq!(Rgb::hex(0x8b5cf6), Rgb::new(0x8b, 0x5c, 0xf6));
        assert_eq!(Rgb::hex(0x8b5cf6).to_string(), "#8b5cf6");
    }

    #[test]
    fn status_colors_are_distinct() {
        for (i, a) in Status::ALL.iter().enumerate() {
            for b in &Status::ALL[i + 1..] {
                assert_ne!(a.badge_color(), b.badge_color());
            }
        }
    }

    #[test]
    fn status_display_matches_labels() {
        assert_eq!(Status::InProgress.to_string(), "In Progress");
        assert_eq!(Status::Completed.badge_color(), Rgb::hex(0x10b981));
    }

    #[test]
    fn email_contact_builds_mailto_uri() {
        let contact = EmailContact {
            address: "someone@example.com",
        };
        assert_eq!(contact.mailto(), "mailto:someone@example.com");
    }
}
