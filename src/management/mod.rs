mod auth;
mod credentials;

pub use auth::TokenEndpoint;
pub use auth::TokenManager;
pub use credentials::CredentialStore;
