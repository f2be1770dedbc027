use crate::resume::skills::{SkillMap, SKILL_CATEGORIES};

pub const GENERAL_DOMAIN: &str = "General";

/// Returns the category with the most matched skills.
///
/// Ties resolve to the category declared first in `SKILL_CATEGORIES`, so the
/// result never depends on map iteration order. No matches at all yields
/// [`GENERAL_DOMAIN`].
pub fn classify_domain(skills: &SkillMap) -> String {
    let mut best: Option<(&str, usize)> = None;

    for category in SKILL_CATEGORIES {
        let count = skills.get(category.name).map(Vec::len).unwrap_or(0);
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((category.name, count)),
        }
    }

    best.map(|(name, _)| name.to_string())
        .unwrap_or_else(|| GENERAL_DOMAIN.to_string())
}
