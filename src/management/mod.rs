mod auth;

pub use auth::ApiTokenRefresher;
pub use auth::TokenManager;
pub use auth::TokenRefresher;
