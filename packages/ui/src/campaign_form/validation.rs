use std::fmt;

use store::config::CampaignRules;
use store::models::{parse_day, ALL_CITIES, ALL_COUNTRIES};
use store::{Campaign, CampaignDraft, TargetGender};

use super::cities;

/// First problem found in a campaign form.
#[derive(Clone, Debug, PartialEq)]
pub enum FormError {
    TitleLength { min: usize, max: usize },
    DatesRequired,
    InvalidDate,
    EndNotAfterStart,
    BudgetNotNumber,
    BudgetTooLow { min: f64 },
    CountryRequired,
    UnknownCountry,
    PhotoRequired,
    CitiesRequired,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::TitleLength { min, max } => {
                write!(f, "Title must be between {min} and {max} characters")
            }
            FormError::DatesRequired => f.write_str("Start and end dates are required"),
            FormError::InvalidDate => f.write_str("Dates must be valid"),
            FormError::EndNotAfterStart => f.write_str("End date must be after start date"),
            FormError::BudgetNotNumber => f.write_str("Budget must be a number"),
            FormError::BudgetTooLow { min } => write!(f, "Budget must be at least {min}"),
            FormError::CountryRequired => f.write_str("Please select a country"),
            FormError::UnknownCountry => f.write_str("Please select a valid country"),
            FormError::PhotoRequired => f.write_str("Please upload a photo"),
            FormError::CitiesRequired => f.write_str("Please select at least one city"),
        }
    }
}

/// Raw input state of the campaign form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignForm {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    /// Kept as typed so a half-written number is not lost.
    pub budget: String,
    pub country: String,
    pub targeted_cities: Vec<String>,
    /// Set only after a successful upload.
    pub photo_path: String,
    pub link: String,
    pub gender: TargetGender,
}

impl CampaignForm {
    pub fn from_campaign(campaign: &Campaign) -> Self {
        let draft = campaign.to_draft();
        Self {
            title: draft.title,
            start_date: draft.start_date,
            end_date: draft.end_date,
            budget: format_budget(draft.budget),
            country: draft.country,
            targeted_cities: draft.targeted_cities,
            photo_path: draft.photo_path,
            link: draft.link,
            gender: draft.gender,
        }
    }

    /// Switching country invalidates the city selection.
    pub fn set_country(&mut self, country: String) {
        if country != self.country {
            self.targeted_cities.clear();
        }
        self.country = country;
    }

    pub fn toggle_city(&mut self, city: &str) {
        self.targeted_cities = cities::toggle_city(&self.targeted_cities, city);
    }

    pub fn wildcard_selected(&self) -> bool {
        self.targeted_cities.iter().any(|c| c == ALL_CITIES)
    }

    /// Check fields in order and stop at the first failure.
    pub fn validate(&self, rules: &CampaignRules, countries: &[String]) -> Result<CampaignDraft, FormError> {
        let title = self.title.trim();
        let title_len = title.chars().count();
        if title_len < rules.title_min_len || title_len > rules.title_max_len {
            return Err(FormError::TitleLength {
                min: rules.title_min_len,
                max: rules.title_max_len,
            });
        }

        if self.start_date.trim().is_empty() || self.end_date.trim().is_empty() {
            return Err(FormError::DatesRequired);
        }
        let (Some(start), Some(end)) = (parse_day(&self.start_date), parse_day(&self.end_date)) else {
            return Err(FormError::InvalidDate);
        };
        if end <= start {
            return Err(FormError::EndNotAfterStart);
        }

        let budget: f64 = self
            .budget
            .trim()
            .parse()
            .ok()
            .filter(|b: &f64| b.is_finite())
            .ok_or(FormError::BudgetNotNumber)?;
        if budget < rules.min_budget {
            return Err(FormError::BudgetTooLow {
                min: rules.min_budget,
            });
        }

        let country = self.country.trim();
        if country.is_empty() {
            return Err(FormError::CountryRequired);
        }
        if country != ALL_COUNTRIES && !countries.iter().any(|c| c == country) {
            return Err(FormError::UnknownCountry);
        }

        if self.photo_path.trim().is_empty() {
            return Err(FormError::PhotoRequired);
        }

        if self.targeted_cities.is_empty() && country != ALL_COUNTRIES && !self.wildcard_selected() {
            return Err(FormError::CitiesRequired);
        }

        Ok(CampaignDraft {
            title: title.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            budget,
            country: country.to_string(),
            targeted_cities: if country == ALL_COUNTRIES {
                Vec::new()
            } else {
                self.targeted_cities.clone()
            },
            photo_path: self.photo_path.trim().to_string(),
            link: self.link.trim().to_string(),
            gender: self.gender,
        })
    }
}

fn format_budget(budget: f64) -> String {
    if budget == 0.0 {
        String::new()
    } else {
        budget.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> Vec<String> {
        vec!["Morocco".to_string(), "France".to_string()]
    }

    fn valid() -> CampaignForm {
        CampaignForm {
            title: "Summer sale".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-30".to_string(),
            budget: "100".to_string(),
            country: "Morocco".to_string(),
            targeted_cities: vec!["Rabat".to_string()],
            photo_path: "uploads/summer.png".to_string(),
            link: " https://shop.example.com ".to_string(),
            gender: TargetGender::All,
        }
    }

    fn check(form: &CampaignForm) -> Result<CampaignDraft, FormError> {
        form.validate(&CampaignRules::default(), &countries())
    }

    #[test]
    fn test_valid_form_builds_draft() {
        let draft = check(&valid()).unwrap();
        assert_eq!(draft.title, "Summer sale");
        assert_eq!(draft.budget, 100.0);
        assert_eq!(draft.link, "https://shop.example.com");
        assert_eq!(draft.targeted_cities, vec!["Rabat"]);
    }

    #[test]
    fn test_title_of_two_chars_rejected() {
        let form = CampaignForm {
            title: "ab".to_string(),
            ..valid()
        };
        let err = check(&form).unwrap_err();
        assert_eq!(err, FormError::TitleLength { min: 3, max: 40 });
        assert_eq!(err.to_string(), "Title must be between 3 and 40 characters");
    }

    #[test]
    fn test_title_bounds() {
        let form = CampaignForm {
            title: "x".repeat(40),
            ..valid()
        };
        assert!(check(&form).is_ok());

        let form = CampaignForm {
            title: "x".repeat(41),
            ..valid()
        };
        assert!(matches!(check(&form), Err(FormError::TitleLength { .. })));

        let form = CampaignForm {
            title: "  ab  ".to_string(),
            ..valid()
        };
        assert!(matches!(check(&form), Err(FormError::TitleLength { .. })));
    }

    #[test]
    fn test_first_failure_wins() {
        let form = CampaignForm {
            title: "no".to_string(),
            start_date: String::new(),
            budget: "abc".to_string(),
            photo_path: String::new(),
            ..valid()
        };
        assert!(matches!(check(&form), Err(FormError::TitleLength { .. })));

        let form = CampaignForm {
            start_date: String::new(),
            budget: "abc".to_string(),
            ..valid()
        };
        assert_eq!(check(&form), Err(FormError::DatesRequired));
    }

    #[test]
    fn test_dates() {
        let form = CampaignForm {
            end_date: "2024-06-01".to_string(),
            ..valid()
        };
        assert_eq!(check(&form), Err(FormError::EndNotAfterStart));

        let form = CampaignForm {
            end_date: "2024-05-01".to_string(),
            ..valid()
        };
        assert_eq!(check(&form), Err(FormError::EndNotAfterStart));

        let form = CampaignForm {
            start_date: "soon".to_string(),
            ..valid()
        };
        assert_eq!(check(&form), Err(FormError::InvalidDate));
    }

    #[test]
    fn test_budget() {
        let form = CampaignForm {
            budget: "ten".to_string(),
            ..valid()
        };
        assert_eq!(check(&form), Err(FormError::BudgetNotNumber));

        let form = CampaignForm {
            budget: "NaN".to_string(),
            ..valid()
        };
        assert_eq!(check(&form), Err(FormError::BudgetNotNumber));

        let form = CampaignForm {
            budget: "9.99".to_string(),
            ..valid()
        };
        let err = check(&form).unwrap_err();
        assert_eq!(err.to_string(), "Budget must be at least 10");

        let form = CampaignForm {
            budget: "10".to_string(),
            ..valid()
        };
        assert!(check(&form).is_ok());
    }

    #[test]
    fn test_country() {
        let form = CampaignForm {
            country: String::new(),
            ..valid()
        };
        assert_eq!(check(&form), Err(FormError::CountryRequired));

        let form = CampaignForm {
            country: "Atlantis".to_string(),
            ..valid()
        };
        assert_eq!(check(&form), Err(FormError::UnknownCountry));
    }

    #[test]
    fn test_photo_required() {
        let form = CampaignForm {
            photo_path: String::new(),
            targeted_cities: Vec::new(),
            ..valid()
        };
        assert_eq!(check(&form), Err(FormError::PhotoRequired));
    }

    #[test]
    fn test_cities_rules() {
        let form = CampaignForm {
            targeted_cities: Vec::new(),
            ..valid()
        };
        assert_eq!(check(&form), Err(FormError::CitiesRequired));

        let form = CampaignForm {
            targeted_cities: vec!["*".to_string()],
            ..valid()
        };
        assert!(check(&form).is_ok());

        let form = CampaignForm {
            country: "All Countries".to_string(),
            targeted_cities: Vec::new(),
            ..valid()
        };
        let draft = check(&form).unwrap();
        assert!(draft.targeted_cities.is_empty());
    }

    #[test]
    fn test_country_change_clears_cities() {
        let mut form = valid();
        form.set_country("Morocco".to_string());
        assert_eq!(form.targeted_cities, vec!["Rabat"]);

        form.set_country("France".to_string());
        assert!(form.targeted_cities.is_empty());
    }

    #[test]
    fn test_wildcard_selection_through_form() {
        let mut form = valid();
        form.toggle_city("Fes");
        assert_eq!(form.targeted_cities, vec!["Rabat", "Fes"]);
        form.toggle_city("*");
        assert_eq!(form.targeted_cities, vec!["*"]);
        assert!(form.wildcard_selected());
    }

    #[test]
    fn test_from_campaign() {
        let campaign: Campaign = stored_campaign();
        let form = CampaignForm::from_campaign(&campaign);
        assert_eq!(form.start_date, "2024-03-10");
        assert_eq!(form.budget, "250");
        assert!(check(&CampaignForm {
            country: "Morocco".to_string(),
            ..form
        })
        .is_ok());
    }

    fn stored_campaign() -> Campaign {
        Campaign {
            id: "c1".to_string(),
            title: "Ramadan promo".to_string(),
            start_date: "2024-03-10T00:00:00.000Z".to_string(),
            end_date: "2024-04-09T00:00:00.000Z".to_string(),
            budget: 250.0,
            country: "Morocco".to_string(),
            targeted_cities: vec!["Fes".to_string()],
            photo_path: "uploads/p.png".to_string(),
            link: String::new(),
            gender: TargetGender::Female,
            status: Default::default(),
            views: 0,
            clicks: 0,
            money_spent: 0.0,
            admin_message: None,
        }
    }
}
