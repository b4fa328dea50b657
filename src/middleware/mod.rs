// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (caller identification).

pub mod auth;

pub use auth::{identify_caller, Caller};
