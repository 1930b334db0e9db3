//! Application Layer
//!
//! Maps every portal route onto its single backend endpoint.

pub mod query;
pub mod relay;

// Re-exports
pub use query::ForwardQuery;
pub use relay::RelayUseCase;

/// A backend endpoint and the message its failures are reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub endpoint: &'static str,
    pub failure: &'static str,
}

impl Route {
    const fn new(endpoint: &'static str, failure: &'static str) -> Self {
        Self { endpoint, failure }
    }
}

/// Backend routes used by this crate
pub mod routes {
    use super::Route;

    // User
    pub const UPDATE_PROFILE: Route = Route::new("/user/update-profile", "Failed to update profile");
    pub const UPLOAD_PROFILE_PICTURE: Route = Route::new(
        "/user/upload-profile-picture",
        "Failed to upload profile picture",
    );

    // News
    pub const CATEGORIES: Route = Route::new("/category/get", "Failed to fetch categories");
    pub const NEWS: Route = Route::new("/news/get", "Failed to fetch news");
    pub const NEWS_DETAIL: Route = Route::new("/news/detail", "Failed to fetch news detail");

    // Engagement
    pub const COMMENTS: Route = Route::new("/comment/get", "Failed to fetch comments");
    pub const ADD_COMMENT: Route = Route::new("/comment/add", "Failed to add comment");
    pub const LIKES: Route = Route::new("/like/get", "Failed to fetch likes");
    pub const TOGGLE_LIKE: Route = Route::new("/like/toggle", "Failed to toggle like");

    // Consultation
    pub const CONSULTATIONS: Route = Route::new("/consultation/get", "Failed to fetch consultations");
    pub const CREATE_CONSULTATION: Route =
        Route::new("/consultation/create", "Failed to create consultation");

    // Wallet
    pub const WALLET_APPROVALS: Route =
        Route::new("/wallet/approvals", "Failed to fetch wallet approvals");
    pub const APPROVE_TRANSACTION: Route = Route::new("/wallet/approve", "Failed to approve transaction");
    pub const REJECT_TRANSACTION: Route = Route::new("/wallet/reject", "Failed to reject transaction");
}
