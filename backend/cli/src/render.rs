//! Terminal rendering for analysis results: ANSI formatting and the
//! inventory listing.

use wildlens_classify::{animal_glyphs, plant_glyphs};
use wildlens_core::AnalysisResult;

// ---------------------------------------------------------------------------
// ANSI Color/Style helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

/// Print a formatted INFO note to stdout.
pub fn note_info(msg: &str) {
    if supports_color() {
        println!("{CYAN}{BOLD}ℹ{RESET} {msg}");
    } else {
        println!("INFO: {msg}");
    }
}

/// Print a formatted ERROR note.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

// ---------------------------------------------------------------------------
// Inventory listing
// ---------------------------------------------------------------------------

/// Render the detected inventory as a readable listing.
pub fn render_inventory(result: &AnalysisResult) {
    if result.is_empty() {
        note_info("No animals or plants detected.");
        return;
    }

    let color = supports_color();
    let (bold, dim, green, reset) = if color {
        (BOLD, DIM, GREEN, RESET)
    } else {
        ("", "", "", "")
    };

    if !result.animals.is_empty() {
        println!("{bold}Animals{reset}");
        for animal in &result.animals {
            let glyph = animal_glyphs().classify(&animal.species);
            let mut details = Vec::new();
            if let Some(carnivore) = animal.carnivore {
                details.push(if carnivore { "carnivore".to_string() } else { "not a carnivore".to_string() });
            }
            if let Some(population) = animal.world_population {
                details.push(format!("~{population} worldwide"));
            }
            if let Some(origin) = &animal.origin {
                details.push(format!("origin: {origin}"));
            }
            let suffix = if details.is_empty() {
                String::new()
            } else {
                format!(" {dim}({}){reset}", details.join(", "))
            };
            println!("  {glyph} {} {green}×{}{reset}{suffix}", animal.species, animal.count);
        }
    }

    if !result.plants.is_empty() {
        println!("{bold}Plants{reset}");
        for plant in &result.plants {
            let glyph = plant_glyphs().classify(&plant.species);
            let suffix = match &plant.origin {
                Some(origin) => format!(" {dim}(origin: {origin}){reset}"),
                None => String::new(),
            };
            println!("  {glyph} {} {green}×{}{reset}{suffix}", plant.species, plant.count);
        }
    }
}
