/// Security module for authentication
/// Provides password hashing and bearer-token management
pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenIssuer};
