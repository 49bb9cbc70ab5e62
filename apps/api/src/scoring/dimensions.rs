//! Dimension names: short-code alias resolution and the per-module catalog.
//!
//! Alias tables are module-scoped because the same letter means different
//! things in different instruments (`I` is Influence in DISC, Investigative in
//! RIASEC). Modules without a table pass categories through verbatim.

/// Dimension used when a question carries no category.
pub const DEFAULT_DIMENSION: &str = "General";

/// DISC profile module.
pub const DISC_MODULE: &str = "PER-02";
/// RIASEC interest module.
pub const RIASEC_MODULE: &str = "INT-01";

const DISC_ALIASES: &[(&str, &str)] = &[
    ("D", "Dominance"),
    ("I", "Influence"),
    ("S", "Steadiness"),
    ("C", "Compliance"),
];

const RIASEC_ALIASES: &[(&str, &str)] = &[
    ("R", "Realistic"),
    ("I", "Investigative"),
    ("A", "Artistic"),
    ("S", "Social"),
    ("E", "Enterprising"),
    ("C", "Conventional"),
];

/// Module code → (alias → canonical dimension name).
const MODULE_ALIASES: &[(&str, &[(&str, &str)])] =
    &[(DISC_MODULE, DISC_ALIASES), (RIASEC_MODULE, RIASEC_ALIASES)];

/// Expected dimensions of every known module.
const MODULE_DIMENSIONS: &[(&str, &[&str])] = &[
    ("COG-01", &["Logic", "Pattern", "Reasoning"]),
    ("ATT-01", &["Accuracy", "Speed", "Consistency"]),
    (
        "PER-01",
        &[
            "Openness",
            "Conscientiousness",
            "Extraversion",
            "Agreeableness",
            "Neuroticism",
        ],
    ),
    (
        DISC_MODULE,
        &["Dominance", "Influence", "Steadiness", "Compliance"],
    ),
    ("WAI-01", &["Integrity", "Responsibility"]),
    (
        RIASEC_MODULE,
        &[
            "Realistic",
            "Investigative",
            "Artistic",
            "Social",
            "Enterprising",
            "Conventional",
        ],
    ),
    ("RES-01", &["Control", "Ownership", "Reach", "Endurance"]),
];

/// Maps a question's raw category to the canonical dimension name used for
/// grouping and display. Total: unknown categories pass through trimmed.
pub fn resolve_dimension(category: Option<&str>, module_code: &str) -> String {
    let trimmed = match category.map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => return DEFAULT_DIMENSION.to_string(),
    };

    lookup_alias(module_code, trimmed)
        .unwrap_or(trimmed)
        .to_string()
}

fn lookup_alias(module_code: &str, category: &str) -> Option<&'static str> {
    let (_, aliases) = MODULE_ALIASES
        .iter()
        .find(|(module, _)| *module == module_code)?;
    let code = category.to_uppercase();
    aliases
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, name)| *name)
}

/// Returns the expected dimensions of a module, or `["General"]` for modules
/// the catalog does not know.
pub fn module_dimensions(module_code: &str) -> &'static [&'static str] {
    MODULE_DIMENSIONS
        .iter()
        .find(|(module, _)| *module == module_code)
        .map(|(_, dims)| *dims)
        .unwrap_or(&[DEFAULT_DIMENSION])
}
