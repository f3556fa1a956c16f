//! Country/city cascade rules.

use store::models::{ALL_CITIES, ALL_COUNTRIES};

/// City selection is only offered once a concrete country is picked.
pub fn cities_enabled(country: &str) -> bool {
    let country = country.trim();
    !country.is_empty() && country != ALL_COUNTRIES
}

/// Toggle `city` in the current selection.
///
/// Picking the `*` wildcard replaces the whole selection with it; picking a
/// concrete city drops the wildcard; picking a selected city deselects it.
pub fn toggle_city(selected: &[String], city: &str) -> Vec<String> {
    if city == ALL_CITIES {
        if selected.iter().any(|c| c == ALL_CITIES) {
            return Vec::new();
        }
        return vec![ALL_CITIES.to_string()];
    }

    if selected.iter().any(|c| c == city) {
        return selected.iter().filter(|c| *c != city).cloned().collect();
    }

    let mut next: Vec<String> = selected
        .iter()
        .filter(|c| *c != ALL_CITIES)
        .cloned()
        .collect();
    next.push(city.to_string());
    next
}

/// Options for the city picker: the wildcard first, then the fetched list
/// without duplicates.
pub fn city_options(fetched: &[String]) -> Vec<String> {
    let mut options = vec![ALL_CITIES.to_string()];
    for city in fetched {
        if city != ALL_CITIES && !options.contains(city) {
            options.push(city.clone());
        }
    }
    options
}

/// Options for the country picker: the "All Countries" sentinel first.
pub fn country_options(fetched: &[String]) -> Vec<String> {
    let mut options = vec![ALL_COUNTRIES.to_string()];
    for country in fetched {
        if country != ALL_COUNTRIES && !options.contains(country) {
            options.push(country.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_wildcard_clears_selection() {
        let next = toggle_city(&sel(&["Rabat", "Fes"]), "*");
        assert_eq!(next, sel(&["*"]));
    }

    #[test]
    fn test_concrete_city_drops_wildcard() {
        let next = toggle_city(&sel(&["*"]), "Rabat");
        assert_eq!(next, sel(&["Rabat"]));
    }

    #[test]
    fn test_toggle_off() {
        assert_eq!(toggle_city(&sel(&["Rabat", "Fes"]), "Rabat"), sel(&["Fes"]));
        assert!(toggle_city(&sel(&["*"]), "*").is_empty());
    }

    #[test]
    fn test_cities_enabled() {
        assert!(!cities_enabled(""));
        assert!(!cities_enabled("All Countries"));
        assert!(cities_enabled("Morocco"));
    }

    #[test]
    fn test_options() {
        assert_eq!(
            city_options(&sel(&["Rabat", "*", "Rabat", "Fes"])),
            sel(&["*", "Rabat", "Fes"])
        );
        assert_eq!(
            country_options(&sel(&["Morocco", "All Countries"])),
            sel(&["All Countries", "Morocco"])
        );
    }
}
