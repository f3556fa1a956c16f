//! # API crate: typed client for the AdDesk REST backend
//!
//! Every piece of business logic (campaign rules, payments, analytics
//! aggregation, balances) lives in a remote service. This crate is the only
//! place that knows how to reach it: one [`ApiClient`] carrying the base URL
//! and the bearer token, and one module per backend resource adding async
//! methods to it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`endpoint`] | Every route: HTTP method, path segments, whether a token is required |
//! | [`error`] | [`ApiError`], the HTTP-status-to-variant mapping used by all call sites |
//! | [`auth`] | login, register, confirm, reset, newPassword, verifyToken |
//! | [`users`] | getuser, profile update, getAllUsers, getOneUser |
//! | [`campaigns`] | campaign CRUD, status changes, photo upload, country and city lists |
//! | [`analytics`] | user-stats, user-analytics |
//! | [`payments`] | paymentMethods, getPaymentURL, checkPayment, transactions, increase-balance |
//!
//! Responses are decoded into the records of [`store::models`], accepting
//! either a bare JSON value or one wrapped as `{"data": ...}`.

mod client;
pub mod endpoint;
pub mod error;

pub mod analytics;
pub mod auth;
pub mod campaigns;
pub mod payments;
pub mod users;

pub use auth::Registration;
pub use campaigns::guess_image_mime;
pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use users::ProfileUpdate;

pub use store::models::{
    Campaign, CampaignDraft, CampaignStatus, DailyAnalytics, PaymentCheck, PaymentMethod,
    PaymentSession, StatusUpdate, Transaction, User, UserDetail, UserStats,
};
