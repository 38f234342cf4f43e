//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations with no domain
//! knowledge:
//! - Password hashing (Argon2id, salted, zeroized plaintext)
//! - Stateless bearer-token signing and verification
//! - Secure random generation

pub mod crypto;
pub mod password;
pub mod token;
