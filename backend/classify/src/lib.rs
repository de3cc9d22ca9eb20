//! Species-name to display glyph lookup.
//!
//! Best-effort and presentation-only: the species names coming out of the
//! model are free text in any language, so matching is fuzzy and a miss
//! falls back to a generic glyph. The tables are plain data so a caller can
//! swap in a localized set without touching the analysis pipeline.

use once_cell::sync::Lazy;

/// One curated name → glyph mapping.
#[derive(Debug, Clone, Copy)]
pub struct GlyphEntry {
    pub name: &'static str,
    pub glyph: &'static str,
}

/// An ordered lookup table with a fixed fallback glyph.
///
/// Lookup order: exact case-insensitive match first, then the first entry
/// whose name is a substring of the species name (in table-definition
/// order), then the fallback.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    entries: Vec<GlyphEntry>,
    fallback: &'static str,
}

impl GlyphTable {
    pub fn new(entries: Vec<GlyphEntry>, fallback: &'static str) -> Self {
        Self { entries, fallback }
    }

    /// Resolve a free-text species name to a glyph.
    pub fn classify(&self, species: &str) -> &'static str {
        let needle = species.trim().to_lowercase();

        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(&needle))
        {
            return entry.glyph;
        }

        if let Some(entry) = self.entries.iter().find(|e| needle.contains(e.name)) {
            return entry.glyph;
        }

        self.fallback
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}

macro_rules! glyphs {
    ($(($name:literal, $glyph:literal)),* $(,)?) => {
        vec![$(GlyphEntry { name: $name, glyph: $glyph }),*]
    };
}

static ANIMAL_GLYPHS: Lazy<GlyphTable> = Lazy::new(|| {
    // Entry names are lowercase; substring matching relies on it.
    GlyphTable::new(
        glyphs![
            ("lion", "🦁"),
            ("tiger", "🐅"),
            ("leopard", "🐆"),
            ("elephant", "🐘"),
            ("giraffe", "🦒"),
            ("zebra", "🦓"),
            ("rhinoceros", "🦏"),
            ("hippopotamus", "🦛"),
            ("bear", "🐻"),
            ("wolf", "🐺"),
            ("fox", "🦊"),
            ("deer", "🦌"),
            ("horse", "🐎"),
            ("cow", "🐄"),
            ("sheep", "🐑"),
            ("goat", "🐐"),
            ("pig", "🐖"),
            ("rabbit", "🐇"),
            ("squirrel", "🐿️"),
            ("monkey", "🐒"),
            ("dog", "🐕"),
            ("cat", "🐈"),
            ("eagle", "🦅"),
            ("owl", "🦉"),
            ("duck", "🦆"),
            ("swan", "🦢"),
            ("heron", "🪿"),
            ("penguin", "🐧"),
            ("flamingo", "🦩"),
            ("parrot", "🦜"),
            ("bird", "🐦"),
            ("snake", "🐍"),
            ("lizard", "🦎"),
            ("turtle", "🐢"),
            ("frog", "🐸"),
            ("crocodile", "🐊"),
            ("fish", "🐟"),
            ("shark", "🦈"),
            ("whale", "🐋"),
            ("dolphin", "🐬"),
            ("butterfly", "🦋"),
            ("bee", "🐝"),
            ("ant", "🐜"),
            ("spider", "🕷️"),
            ("snail", "🐌"),
        ],
        "🐾",
    )
});

static PLANT_GLYPHS: Lazy<GlyphTable> = Lazy::new(|| {
    GlyphTable::new(
        glyphs![
            ("palm", "🌴"),
            ("cactus", "🌵"),
            ("pine", "🌲"),
            ("fir", "🌲"),
            ("oak", "🌳"),
            ("birch", "🌳"),
            ("tree", "🌳"),
            ("sunflower", "🌻"),
            ("rose", "🌹"),
            ("tulip", "🌷"),
            ("daisy", "🌼"),
            ("orchid", "🌸"),
            ("flower", "🌸"),
            ("fern", "🌿"),
            ("moss", "🌿"),
            ("grass", "🌾"),
            ("reed", "🌾"),
            ("mushroom", "🍄"),
            ("vine", "🍃"),
        ],
        "🌱",
    )
});

/// The built-in animal table.
pub fn animal_glyphs() -> &'static GlyphTable {
    &ANIMAL_GLYPHS
}

/// The built-in plant table.
pub fn plant_glyphs() -> &'static GlyphTable {
    &PLANT_GLYPHS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_case_insensitive() {
        assert_eq!(animal_glyphs().classify("Lion"), "🦁");
        assert_eq!(animal_glyphs().classify("LION"), "🦁");
    }

    #[test]
    fn substring_match_on_longer_names() {
        assert_eq!(animal_glyphs().classify("African Lion"), "🦁");
        assert_eq!(animal_glyphs().classify("Grey Heron"), "🪿");
        assert_eq!(plant_glyphs().classify("Silver Birch"), "🌳");
    }

    #[test]
    fn substring_match_respects_table_order() {
        // "pine" is defined before the generic "tree" entry.
        assert_eq!(plant_glyphs().classify("Stone Pine Tree"), "🌲");
    }

    #[test]
    fn unknown_species_gets_fallback() {
        assert_eq!(animal_glyphs().classify("Okapi"), "🐾");
        assert_eq!(plant_glyphs().classify("Welwitschia"), "🌱");
    }

    #[test]
    fn custom_table_is_injectable() {
        let table = GlyphTable::new(
            vec![GlyphEntry { name: "loup", glyph: "🐺" }],
            "❔",
        );
        assert_eq!(table.classify("Loup gris"), "🐺");
        assert_eq!(table.classify("inconnu"), "❔");
    }
}
