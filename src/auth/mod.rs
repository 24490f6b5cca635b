// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Session verification and route gating

pub mod gating;
pub mod middleware;
pub mod session;

pub use gating::requires_session;
pub use middleware::session_gate;
pub use session::{decode_session, encode_session, session_from_headers, Session};
