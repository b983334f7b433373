use std::fmt;

/// A state/place pair for which flood risk data exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub region: &'static str,
    pub place: &'static str,
}

impl Location {
    pub const fn new(region: &'static str, place: &'static str) -> Self {
        Self { region, place }
    }

    /// Exact, case-sensitive match on both fields.
    pub fn matches(&self, region: &str, place: &str) -> bool {
        self.region == region && self.place == place
    }

    /// "Patna, Bihar", used in banners and the map title.
    pub fn headline(&self) -> String {
        format!("{}, {}", self.place, self.region)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.region, self.place)
    }
}

pub const PATNA_BIHAR: Location = Location::new("Bihar", "Patna");

/// Locations the map view is currently available for.
pub const SUPPORTED_LOCATIONS: &[Location] = &[PATNA_BIHAR];

/// Look up the supported location matching a submitted pair.
pub fn find_supported(region: &str, place: &str) -> Option<&'static Location> {
    SUPPORTED_LOCATIONS
        .iter()
        .find(|location| location.matches(region, place))
}

pub fn is_supported(region: &str, place: &str) -> bool {
    find_supported(region, place).is_some()
}

/// The location named in "currently available" messages.
pub fn primary_location() -> Location {
    SUPPORTED_LOCATIONS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_supported_location() {
        assert_eq!(SUPPORTED_LOCATIONS.len(), 1);
        assert_eq!(primary_location(), PATNA_BIHAR);
    }

    #[test]
    fn test_matches_requires_both_fields() {
        assert!(PATNA_BIHAR.matches("Bihar", "Patna"));
        assert!(!PATNA_BIHAR.matches("Bihar", "Gaya"));
        assert!(!PATNA_BIHAR.matches("Jharkhand", "Patna"));
        assert!(!PATNA_BIHAR.matches("bihar", "patna"));
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported("Bihar", "Patna"));
        assert!(!is_supported("Uttar Pradesh", "Varanasi"));
        assert!(!is_supported("", ""));
    }

    #[test]
    fn test_formatting() {
        assert_eq!(PATNA_BIHAR.to_string(), "Bihar (Patna)");
        assert_eq!(PATNA_BIHAR.headline(), "Patna, Bihar");
    }
}
