// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Password digesting and verification.
//!
//! Passwords are stored as lowercase hex SHA-256 digests. Verification
//! recomputes the digest and compares it in constant time, so response
//! timing does not leak how much of the digest matched.

use ring::constant_time::verify_slices_are_equal;
use sha2::{Digest, Sha256};

/// Digest a plaintext password to the storage format (lowercase hex SHA-256).
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let computed = hash_password(password);
    verify_slices_are_equal(computed.as_bytes(), stored_hash.as_bytes()).is_ok()
}
