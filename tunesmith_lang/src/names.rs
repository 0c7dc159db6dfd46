// Person-name generator for artist credits.
//
// Picks a gender with one fair draw, then a first name and a surname from that
// gender's pools. The generator takes `&mut SongRng` so that names are a
// deterministic function of the stream state.
//
// Used by `text.rs` (`TextSource::full_name`). Depends on `types.rs` for
// `Locale`/`PeopleNames`.

use crate::types::Locale;
use tunesmith_prng::SongRng;

/// A generated person name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    /// "First Last".
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Generate a person name from the locale's name pools.
///
/// Draw order: gender, first name, last name (three draws when both pools
/// are non-empty). Empty pools yield a placeholder without drawing.
pub fn generate_name(locale: &Locale, rng: &mut SongRng) -> PersonName {
    let people = &locale.people;
    let (first_pool, last_pool) = if rng.random_bool(0.5) {
        (&people.female_first, &people.female_last)
    } else {
        (&people.male_first, &people.male_last)
    };

    PersonName {
        first: pick(first_pool, rng).unwrap_or("Unknown").to_string(),
        last: pick(last_pool, rng).unwrap_or("Artist").to_string(),
    }
}

/// Uniformly pick one entry, or `None` for an empty pool.
pub(crate) fn pick<'a>(pool: &'a [String], rng: &mut SongRng) -> Option<&'a str> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.range_usize(0, pool.len())].as_str())
}

/// Capitalize the first character of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Localization, builtin_locale};

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("alias"), "Alias");
        assert_eq!(capitalize("ветер ночь"), "Ветер ночь");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("A"), "A");
    }

    #[test]
    fn test_generate_name_deterministic() {
        let locale = builtin_locale(Localization::English);
        let mut rng1 = SongRng::new(42);
        let mut rng2 = SongRng::new(42);
        assert_eq!(
            generate_name(locale, &mut rng1),
            generate_name(locale, &mut rng2)
        );
    }

    #[test]
    fn test_russian_surname_matches_gender() {
        let locale = builtin_locale(Localization::Russian);
        for seed in 0..50 {
            let mut rng = SongRng::new(seed);
            let name = generate_name(locale, &mut rng);
            let female = locale.people.female_first.contains(&name.first);
            assert_eq!(
                female,
                locale.people.female_last.contains(&name.last),
                "gender mismatch in '{}'",
                name.full()
            );
        }
    }

    #[test]
    fn test_generate_name_variety() {
        let locale = builtin_locale(Localization::English);
        let mut names = std::collections::BTreeSet::new();
        for seed in 0..50 {
            let mut rng = SongRng::new(seed);
            names.insert(generate_name(locale, &mut rng).full());
        }
        assert!(
            names.len() > 20,
            "Expected >20 unique names from 50 seeds, got {}",
            names.len()
        );
    }
}
