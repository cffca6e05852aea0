//! Interaction state machine
//!
//! ```text
//!            edit                       edit
//!   ┌──────────────────┐      ┌───────────────────┐
//!   ▼                  │      ▼                   │
//! Idle ──submit──▶ Pending ──resolve(ok)──▶ Succeeded
//!                    ▲  │                       │
//!                    │  └──resolve(err)──▶ Failed
//!                    └──────submit──────────────┘
//! ```
//!
//! A submit with a blank query is rejected in place. A submit while
//! `Pending` is ignored, so at most one request is ever in flight.

pub mod intent;
pub mod state;
