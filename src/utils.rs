//! Text cleanup helpers shared by source adapters.

/// Annotation misspellings corrected before label mapping runs.
const SPELLING_FIXES: &[(&str, &str)] = &[("Dicussing", "Discussing")];

/// Trim surrounding whitespace and correct known annotation misspellings.
///
/// Runs before the strict label mapping so a misspelled raw value maps as its
/// corrected form instead of failing totality validation.
pub fn clean_label(raw: &str) -> String {
    let trimmed = raw.trim();
    for (wrong, corrected) in SPELLING_FIXES {
        if trimmed == *wrong {
            return (*corrected).to_string();
        }
    }
    trimmed.to_string()
}
