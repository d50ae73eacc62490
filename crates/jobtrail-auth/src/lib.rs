//! # jobtrail-auth
//!
//! Credential handling for JobTrail.
//!
//! ## Modules
//!
//! - `password`: bcrypt hashing and the username/password policy
//! - `jwt`: token issuing, verification, and the logout denylist
//! - `lockout`: in-memory failed-login tracker
//! - `store`: the credential store seam
//! - `service`: register / login / change-password / logout orchestration

pub mod jwt;
pub mod lockout;
pub mod password;
pub mod service;
pub mod store;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenDenylist};
pub use lockout::MemoryAttemptTracker;
pub use password::{CredentialPolicy, PasswordHasher};
pub use service::{AuthOutcome, AuthService};
pub use store::CredentialStore;
