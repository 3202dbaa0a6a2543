//! Plural rule table
//!
//! Maps a language code to the ordered set of plural categories a complete
//! translation must fill in. The table is an explicit lookup (built-in
//! defaults plus configuration overrides) so the upsert rule can be tested
//! without a live locale database.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::I18nConfig;

/// One of the six CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// All categories in canonical order
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// Category name as it appears on the wire
    pub fn name(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Parse a category from its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "zero" => Some(PluralCategory::Zero),
            "one" => Some(PluralCategory::One),
            "two" => Some(PluralCategory::Two),
            "few" => Some(PluralCategory::Few),
            "many" => Some(PluralCategory::Many),
            "other" => Some(PluralCategory::Other),
            _ => None,
        }
    }

    /// Stable rule index used in the translations table
    pub fn rule_index(self) -> i16 {
        match self {
            PluralCategory::Zero => 0,
            PluralCategory::One => 1,
            PluralCategory::Two => 2,
            PluralCategory::Few => 3,
            PluralCategory::Many => 4,
            PluralCategory::Other => 5,
        }
    }

    /// Inverse of [`rule_index`](Self::rule_index)
    pub fn from_rule_index(index: i16) -> Option<Self> {
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Required plural categories per language
#[derive(Debug, Clone)]
pub struct PluralRules {
    rules: HashMap<String, Vec<PluralCategory>>,
}

// Languages with the English-like one/other split
const TWO_FORM_LANGUAGES: &[&str] = &[
    "en", "de", "es", "fr", "it", "pt", "el", "nl", "sv", "da", "no", "fi", "hu",
];

// Languages without grammatical number
const SINGLE_FORM_LANGUAGES: &[&str] = &["ja", "zh", "ko", "th", "vi", "tr"];

impl PluralRules {
    /// Build the rule table from built-in defaults plus configuration overrides
    pub fn new(config: &I18nConfig) -> Self {
        let mut rules = Self::builtin_rules();

        for (language, names) in &config.plural_rules {
            let categories: Vec<PluralCategory> = names
                .iter()
                .filter_map(|name| PluralCategory::from_name(name))
                .collect();
            if !categories.is_empty() {
                rules.insert(language.clone(), categories);
            }
        }

        Self { rules }
    }

    fn builtin_rules() -> HashMap<String, Vec<PluralCategory>> {
        use crate::i18n::PluralCategory::{Few, Many, One, Other, Two, Zero};

        let mut rules = HashMap::new();

        for lang in TWO_FORM_LANGUAGES {
            rules.insert(lang.to_string(), vec![One, Other]);
        }
        for lang in SINGLE_FORM_LANGUAGES {
            rules.insert(lang.to_string(), vec![Other]);
        }

        // Slavic four-form languages
        for lang in ["ru", "uk", "pl", "sr", "hr", "bs"] {
            rules.insert(lang.to_string(), vec![One, Few, Many, Other]);
        }
        // Czech and Slovak use one/few/other
        for lang in ["cs", "sk"] {
            rules.insert(lang.to_string(), vec![One, Few, Other]);
        }
        // Arabic requires the full six-category set
        rules.insert("ar".to_string(), vec![Zero, One, Two, Few, Many, Other]);
        // Hebrew
        rules.insert("he".to_string(), vec![One, Two, Many, Other]);
        // Romanian
        rules.insert("ro".to_string(), vec![One, Few, Other]);
        // Lithuanian
        rules.insert("lt".to_string(), vec![One, Few, Other]);

        rules
    }

    /// Required category set for a language.
    ///
    /// Language tags are matched on their primary subtag ("pt-BR" uses the
    /// "pt" rule). Unknown languages fall back to the one/other split.
    pub fn required(&self, language: &str) -> &[PluralCategory] {
        const FALLBACK: &[PluralCategory] = &[PluralCategory::One, PluralCategory::Other];

        if let Some(categories) = self.rules.get(language) {
            return categories;
        }

        let primary = language.split('-').next().unwrap_or(language);
        self.rules.get(primary).map_or(FALLBACK, Vec::as_slice)
    }

    /// Whether the language has an explicit entry in the table
    pub fn is_known(&self, language: &str) -> bool {
        let primary = language.split('-').next().unwrap_or(language);
        self.rules.contains_key(language) || self.rules.contains_key(primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_rules() -> PluralRules {
        PluralRules::new(&I18nConfig {
            source_language: "en".to_string(),
            plural_rules: HashMap::new(),
        })
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in PluralCategory::ALL {
            assert_eq!(PluralCategory::from_name(category.name()), Some(category));
        }
        assert_eq!(PluralCategory::from_name("dual"), None);
    }

    #[test]
    fn test_rule_index_round_trip() {
        for category in PluralCategory::ALL {
            assert_eq!(
                PluralCategory::from_rule_index(category.rule_index()),
                Some(category)
            );
        }
        assert_eq!(PluralCategory::from_rule_index(6), None);
        assert_eq!(PluralCategory::from_rule_index(-1), None);
    }

    #[test]
    fn test_english_requires_two_forms() {
        let rules = default_rules();
        assert_eq!(
            rules.required("en"),
            &[PluralCategory::One, PluralCategory::Other]
        );
    }

    #[test]
    fn test_arabic_requires_all_six() {
        let rules = default_rules();
        assert_eq!(rules.required("ar"), &PluralCategory::ALL);
    }

    #[test]
    fn test_russian_requires_four_forms() {
        let rules = default_rules();
        assert_eq!(
            rules.required("ru"),
            &[
                PluralCategory::One,
                PluralCategory::Few,
                PluralCategory::Many,
                PluralCategory::Other
            ]
        );
    }

    #[test]
    fn test_japanese_requires_single_form() {
        let rules = default_rules();
        assert_eq!(rules.required("ja"), &[PluralCategory::Other]);
    }

    #[test]
    fn test_region_tag_uses_primary_subtag() {
        let rules = default_rules();
        assert_eq!(rules.required("pt-BR"), rules.required("pt"));
        assert!(rules.is_known("pt-BR"));
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let rules = default_rules();
        assert_eq!(
            rules.required("xx"),
            &[PluralCategory::One, PluralCategory::Other]
        );
        assert!(!rules.is_known("xx"));
    }

    #[test]
    fn test_config_override_wins() {
        let mut config = I18nConfig {
            source_language: "en".to_string(),
            plural_rules: HashMap::new(),
        };
        config.plural_rules.insert(
            "ru".to_string(),
            vec!["one".to_string(), "other".to_string()],
        );

        let rules = PluralRules::new(&config);
        assert_eq!(
            rules.required("ru"),
            &[PluralCategory::One, PluralCategory::Other]
        );
    }
}
