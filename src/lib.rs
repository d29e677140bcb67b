// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Will Writer - Backend API Service
//!
//! This crate provides the CRUD backend for the will-writing web
//! application: signup/login with signed session tokens, will document
//! management, per-user file attachments, a message-send stub, and a
//! pass-through to an external LLM for drafting assistance.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Session tokens and password verification
//! - `assist` - External text-generation gateway
//! - `store` - In-memory users/wills/files store
//! - `vault` - Per-user upload storage tree

pub mod api;
pub mod assist;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
pub mod vault;
