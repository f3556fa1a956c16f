use serde::{Deserialize, Serialize};

/// Interface language, persisted under the `preferredLanguage` key.
///
/// Unknown codes fall back to English rather than failing to parse, so a
/// stale preference or a backend value we do not translate never breaks
/// startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    French,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::French, Language::Arabic];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Arabic => "ar",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Language::French,
            "ar" => Language::Arabic,
            _ => Language::English,
        }
    }

    /// Name of the language in that language, for selectors.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
            Language::Arabic => "العربية",
        }
    }

    /// Value for the HTML `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::Arabic => "rtl",
            _ => "ltr",
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Language::from_code(&code)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
        assert_eq!(Language::from_code(" FR "), Language::French);
        assert_eq!(Language::from_code("de"), Language::English);
        assert_eq!(Language::from_code(""), Language::English);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Language::Arabic.dir(), "rtl");
        assert_eq!(Language::French.dir(), "ltr");
    }

    #[test]
    fn test_unknown_code_in_json() {
        let lang: Language = serde_json::from_str("\"pt\"").unwrap();
        assert_eq!(lang, Language::English);
        assert_eq!(serde_json::to_string(&Language::Arabic).unwrap(), "\"ar\"");
    }
}
