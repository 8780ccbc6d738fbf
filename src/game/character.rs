// Playable character record and the fixed preset tables.

use glam::Vec2;

use crate::engine::Rgb;

pub const DEFAULT_SPEED: f32 = 5.0;
pub const DEFAULT_EXTENT: f32 = 32.0;
pub const SPAWN_POSITION: Vec2 = Vec2::new(400.0, 300.0);
pub const CUSTOM_DESCRIPTION: &str = "A custom hero created by the player";

/// The player avatar as handed from selection/customizer to gameplay.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub name: String,
    pub description: String,
    pub body_color: Rgb,
    pub eye_color: Rgb,
    /// Top-left corner in playfield pixels.
    pub position: Vec2,
    pub extent: f32,
    pub speed: f32,
}

impl Character {
    /// A character at the default spawn point with default size and speed.
    pub fn new(name: impl Into<String>, description: impl Into<String>, body_color: Rgb, eye_color: Rgb) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            body_color,
            eye_color,
            position: SPAWN_POSITION,
            extent: DEFAULT_EXTENT,
            speed: DEFAULT_SPEED,
        }
    }
}

/// One row of the preset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub color: Rgb,
    pub description: &'static str,
}

impl Preset {
    pub fn to_character(&self) -> Character {
        Character::new(self.name, self.description, self.color, Rgb::BLACK)
    }
}

pub static PRESETS: &[Preset] = &[
    Preset {
        name: "Knight",
        color: Rgb::new(50, 100, 200),
        description: "A brave warrior with strong defense",
    },
    Preset {
        name: "Mage",
        color: Rgb::new(150, 50, 200),
        description: "A powerful spellcaster with magical abilities",
    },
    Preset {
        name: "Ranger",
        color: Rgb::new(50, 200, 100),
        description: "A swift archer with high speed",
    },
];

/// Preset by index, `None` when out of range.
pub fn preset_character(index: usize) -> Option<Character> {
    PRESETS.get(index).map(Preset::to_character)
}

// ============================================================================
// CUSTOMIZER TABLES
// ============================================================================

/// Named body colour the customizer can jump to with the digit keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: &'static str,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeColor {
    pub name: &'static str,
    pub color: Rgb,
}

pub static COLOR_PRESETS: &[ColorPreset] = &[
    ColorPreset { name: "Knight", color: Rgb::new(50, 100, 200) },
    ColorPreset { name: "Mage", color: Rgb::new(150, 50, 200) },
    ColorPreset { name: "Ranger", color: Rgb::new(50, 200, 100) },
    ColorPreset { name: "Custom", color: Rgb::new(128, 128, 128) },
];

pub static EYE_COLORS: &[EyeColor] = &[
    EyeColor { name: "Blue", color: Rgb::new(100, 150, 255) },
    EyeColor { name: "Green", color: Rgb::new(100, 255, 150) },
    EyeColor { name: "Brown", color: Rgb::new(139, 69, 19) },
    EyeColor { name: "Red", color: Rgb::new(255, 100, 100) },
    EyeColor { name: "Purple", color: Rgb::new(200, 100, 255) },
    EyeColor { name: "Yellow", color: Rgb::new(255, 255, 100) },
];

pub static NAME_PREFIXES: &[&str] = &[
    "Shadow", "Thunder", "Storm", "Fire", "Ice", "Wind", "Star", "Moon", "Sun", "Dragon",
];

pub static NAME_SUFFIXES: &[&str] = &[
    "blade", "walker", "runner", "striker", "dancer", "seeker", "rider", "slayer", "knight", "mage",
];

/// Immutable lookup data injected into the customizer.
///
/// `color_presets` and `eye_colors` must be non-empty; the last colour
/// preset doubles as the starting body colour.
#[derive(Debug, Clone, Copy)]
pub struct CustomizerTables {
    pub color_presets: &'static [ColorPreset],
    pub eye_colors: &'static [EyeColor],
    pub name_prefixes: &'static [&'static str],
    pub name_suffixes: &'static [&'static str],
}

impl Default for CustomizerTables {
    fn default() -> Self {
        Self {
            color_presets: COLOR_PRESETS,
            eye_colors: EYE_COLORS,
            name_prefixes: NAME_PREFIXES,
            name_suffixes: NAME_SUFFIXES,
        }
    }
}

impl CustomizerTables {
    pub fn starting_color(&self) -> Rgb {
        self.color_presets.last().map_or(Rgb::new(128, 128, 128), |p| p.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_build_named_characters() {
        let knight = preset_character(0);
        assert_eq!(knight.as_ref().map(|c| c.name.as_str()), Some("Knight"));
        assert_eq!(preset_character(2).map(|c| c.body_color), Some(Rgb::new(50, 200, 100)));
        assert_eq!(preset_character(3), None);
    }

    #[test]
    fn preset_characters_use_defaults() {
        let Some(mage) = preset_character(1) else {
            panic!("mage preset missing");
        };
        assert_eq!(mage.position, Vec2::new(400.0, 300.0));
        assert_eq!(mage.extent, 32.0);
        assert_eq!(mage.speed, 5.0);
        assert_eq!(mage.eye_color, Rgb::BLACK);
    }

    #[test]
    fn default_tables_match_expected_sizes() {
        let tables = CustomizerTables::default();
        assert_eq!(tables.color_presets.len(), 4);
        assert_eq!(tables.eye_colors.len(), 6);
        assert_eq!(tables.starting_color(), Rgb::new(128, 128, 128));
    }
}
