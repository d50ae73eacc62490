//! JWT issuing, verification, and revocation.

pub mod claims;
pub mod decoder;
pub mod denylist;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use denylist::TokenDenylist;
pub use encoder::{IssuedToken, JwtEncoder};
