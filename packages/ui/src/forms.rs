//! Checks for the registration and new-password forms.
//!
//! Like the campaign form, the first failing rule is reported and nothing is
//! sent until every rule passes.

use store::Language;

use api::Registration;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw input of the registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self, language: Language) -> Result<Registration, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Please enter a valid email".to_string());
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err("Phone number is required".to_string());
        }
        check_new_password(&self.password, &self.confirm_password)?;

        Ok(Registration {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password: self.password.clone(),
            preferred_language: language,
        })
    }
}

/// Length and confirmation rules shared by registration and password reset.
pub fn check_new_password(password: &str, confirm: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}
