mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod verify_email;
pub use verify_email::VerifyEmail;

mod confirm;
pub use confirm::Confirm;

mod reset_password;
pub use reset_password::ResetPassword;

mod new_password;
pub use new_password::NewPassword;

mod dashboard_layout;
pub use dashboard_layout::{AdminLayout, DashboardLayout};

mod dashboard;
pub use dashboard::Dashboard;

mod analytics;
pub use analytics::Analytics;

mod campaigns;
pub use campaigns::Campaigns;

mod campaign_editor;
pub use campaign_editor::{EditCampaign, NewCampaign};

mod wallet;
pub use wallet::Wallet;

mod payment_return;
pub use payment_return::PaymentReturn;

mod settings;
pub use settings::Settings;

mod admin_users;
pub use admin_users::{AdminUser, AdminUsers};

mod admin_campaigns;
pub use admin_campaigns::{AdminCampaign, AdminCampaigns};

mod not_found;
pub use not_found::NotFound;
