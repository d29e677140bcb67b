// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Session tokens and credential verification for the will-writing API.
//!
//! ## Auth Flow
//!
//! 1. Client signs up or logs in and receives a signed session token
//! 2. Client sends `Authorization: Bearer <token>` on every other request
//! 3. The [`Auth`] extractor:
//!    - Verifies the HS256 signature and expiry
//!    - Extracts `sub` → the caller's [`crate::models::UserId`]
//!
//! ## Security
//!
//! - All endpoints except signup, login, and health require a token
//! - Tokens expire 24 hours after issue; there is no refresh or revocation,
//!   callers re-authenticate after expiry
//! - Password digests are compared in constant time
//! - Clock skew tolerance is 60 seconds

pub mod error;
pub mod extractor;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use extractor::Auth;
