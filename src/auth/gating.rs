// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Route gating policy
//!
//! A pure predicate over the request path: the authoring surfaces need
//! a session, everything else (the public API, published pages, health)
//! does not. API handlers that act on owned rows still check the
//! session themselves; this gate only covers the UI prefixes.

/// Path prefixes that require an authenticated session
const PROTECTED_PREFIXES: &[&str] = &["/create", "/dashboard", "/pages", "/settings", "/admin"];

/// Whether a request path falls under a protected prefix. Matching is
/// segment-aligned: "/pages/42" is protected, "/pagesmith" is not.
pub fn requires_session(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}
