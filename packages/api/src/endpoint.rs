//! Every backend route the client calls, with its method and auth requirement.

use reqwest::Method;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    // auth
    Login,
    Register,
    Confirm(String),
    ResetPassword,
    NewPassword,
    VerifyToken,
    // user
    CurrentUser,
    UpdateProfile,
    AllUsers,
    OneUser(String),
    // campaign
    MyCampaigns,
    AllCampaigns,
    Campaign(String),
    CreateCampaign,
    UpdateCampaign(String),
    DeleteCampaign(String),
    UploadPhoto,
    Countries,
    Cities(String),
    // analytics
    UserStats,
    UserAnalytics,
    // payment
    PaymentMethods,
    PaymentUrl,
    CheckPayment(String),
    Transactions,
    IncreaseBalance,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login
            | Endpoint::Register
            | Endpoint::ResetPassword
            | Endpoint::NewPassword
            | Endpoint::VerifyToken
            | Endpoint::CreateCampaign
            | Endpoint::UploadPhoto
            | Endpoint::PaymentUrl
            | Endpoint::IncreaseBalance => Method::POST,
            Endpoint::UpdateProfile | Endpoint::UpdateCampaign(_) => Method::PATCH,
            Endpoint::DeleteCampaign(_) => Method::DELETE,
            _ => Method::GET,
        }
    }

    /// Path segments below the configured base URL. Dynamic segments are
    /// percent-encoded by the client, not here.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::Login => vec!["auth", "login"],
            Endpoint::Register => vec!["auth", "register"],
            Endpoint::Confirm(token) => vec!["auth", "confirm", token.as_str()],
            Endpoint::ResetPassword => vec!["auth", "reset"],
            Endpoint::NewPassword => vec!["auth", "newPassword"],
            Endpoint::VerifyToken => vec!["auth", "verifyToken"],
            Endpoint::CurrentUser => vec!["user", "getuser"],
            Endpoint::UpdateProfile => vec!["user", "update"],
            Endpoint::AllUsers => vec!["user", "getAllUsers"],
            Endpoint::OneUser(id) => vec!["user", "getOneUser", id.as_str()],
            Endpoint::MyCampaigns | Endpoint::CreateCampaign => vec!["campaign"],
            Endpoint::AllCampaigns => vec!["campaign", "getAllCampaigns"],
            Endpoint::Campaign(id) | Endpoint::UpdateCampaign(id) | Endpoint::DeleteCampaign(id) => {
                vec!["campaign", id.as_str()]
            }
            Endpoint::UploadPhoto => vec!["campaign", "upload"],
            Endpoint::Countries => vec!["campaign", "countries"],
            Endpoint::Cities(country) => vec!["campaign", "cities", country.as_str()],
            Endpoint::UserStats => vec!["analytics", "user-stats"],
            Endpoint::UserAnalytics => vec!["analytics", "user-analytics"],
            Endpoint::PaymentMethods => vec!["payment", "paymentMethods"],
            Endpoint::PaymentUrl => vec!["payment", "getPaymentURL"],
            Endpoint::CheckPayment(id) => vec!["payment", "checkPayment", id.as_str()],
            Endpoint::Transactions => vec!["payment", "transactions"],
            Endpoint::IncreaseBalance => vec!["payment", "increase-balance"],
        }
    }

    /// Unencoded path, for logs.
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }

    /// Whether the call must carry `Authorization: Bearer <token>`.
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Endpoint::Login
                | Endpoint::Register
                | Endpoint::Confirm(_)
                | Endpoint::ResetPassword
                | Endpoint::NewPassword
                | Endpoint::VerifyToken
                | Endpoint::Countries
                | Endpoint::Cities(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::CurrentUser.path(), "/user/getuser");
        assert_eq!(Endpoint::OneUser("42".into()).path(), "/user/getOneUser/42");
        assert_eq!(Endpoint::NewPassword.path(), "/auth/newPassword");
        assert_eq!(Endpoint::UserStats.path(), "/analytics/user-stats");
        assert_eq!(Endpoint::PaymentUrl.path(), "/payment/getPaymentURL");
        assert_eq!(Endpoint::IncreaseBalance.path(), "/payment/increase-balance");
        assert_eq!(Endpoint::MyCampaigns.path(), Endpoint::CreateCampaign.path());
    }

    #[test]
    fn test_methods() {
        assert_eq!(Endpoint::Login.method(), Method::POST);
        assert_eq!(Endpoint::MyCampaigns.method(), Method::GET);
        assert_eq!(Endpoint::CreateCampaign.method(), Method::POST);
        assert_eq!(Endpoint::UpdateCampaign("c".into()).method(), Method::PATCH);
        assert_eq!(Endpoint::DeleteCampaign("c".into()).method(), Method::DELETE);
        assert_eq!(Endpoint::CheckPayment("p".into()).method(), Method::GET);
    }

    #[test]
    fn test_public_endpoints() {
        assert!(!Endpoint::Login.requires_auth());
        assert!(!Endpoint::Confirm("t".into()).requires_auth());
        assert!(!Endpoint::Cities("Morocco".into()).requires_auth());
        assert!(Endpoint::CurrentUser.requires_auth());
        assert!(Endpoint::UploadPhoto.requires_auth());
        assert!(Endpoint::IncreaseBalance.requires_auth());
    }
}
