//! Skill entries shown in the skills panel.

use super::ProfileError;

/// Proficiency percentage in the range 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    /// Highest representable level.
    pub const MAX: u8 = 100;

    /// Create a level, rejecting values above 100.
    pub const fn new(percent: u8) -> Result<Self, ProfileError> {
        if percent > Self::MAX {
            return Err(ProfileError::LevelOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    /// Level as a whole percentage.
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Level as a fraction of a full bar (0.0-1.0).
    pub fn fraction(self) -> f32 {
        self.0 as f32 / Self::MAX as f32
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Technology a skill badge stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillIcon {
    JavaScript,
    React,
    NextJs,
    TailwindCss,
    TypeScript,
    NodeJs,
}

impl SkillIcon {
    /// Short text drawn inside the badge.
    pub fn monogram(&self) -> &'static str {
        match self {
            SkillIcon::JavaScript => "JS",
            SkillIcon::React => "Re",
            SkillIcon::NextJs => "N",
            SkillIcon::TailwindCss => "Tw",
            SkillIcon::TypeScript => "TS",
            SkillIcon::NodeJs => "No",
        }
    }

    /// Brand color as RGB.
    pub fn brand_rgb(&self) -> [u8; 3] {
        match self {
            SkillIcon::JavaScript => [247, 223, 30],
            SkillIcon::React => [97, 218, 251],
            SkillIcon::NextJs => [20, 20, 20],
            SkillIcon::TailwindCss => [6, 182, 212],
            SkillIcon::TypeScript => [49, 120, 198],
            SkillIcon::NodeJs => [51, 153, 51],
        }
    }
}

/// A named capability with a display proficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: SkillIcon,
    pub level: Level,
}

const fn skill(name: &'static str, icon: SkillIcon, percent: u8) -> Skill {
    let level = match Level::new(percent) {
        Ok(level) => level,
        Err(_) => panic!("skill level must be within 0-100"),
    };
    Skill { name, icon, level }
}

/// The skills panel, in display order.
pub static SKILLS: [Skill; 6] = [
    skill("JavaScript", SkillIcon::JavaScript, 90),
    skill("React", SkillIcon::React, 85),
    skill("Next.js", SkillIcon::NextJs, 80),
    skill("Tailwind CSS", SkillIcon::TailwindCss, 75),
    skill("TypeScript", SkillIcon::TypeScript, 70),
    skill("Node.js", SkillIcon::NodeJs, 65),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_rejects_above_hundred() {
        assert_eq!(Level::new(101), Err(ProfileError::LevelOutOfRange(101)));
        assert_eq!(Level::new(100).map(Level::percent), Ok(100));
        assert_eq!(Level::new(0).map(Level::percent), Ok(0));
    }

    #[test]
    fn test_level_fraction() {
        let level = Level::new(75).unwrap();
        assert!((level.fraction() - 0.75).abs() < f32::EPSILON);
        assert_eq!(level.to_string(), "75%");
    }

    #[test]
    fn test_skills_are_distinct() {
        for (i, a) in SKILLS.iter().enumerate() {
            for b in SKILLS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
                assert_ne!(a.icon, b.icon);
            }
        }
    }
}
