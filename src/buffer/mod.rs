//! Buffer Module
//!
//! Append-only byte storage backing each hash bucket.
//!
//! ## Responsibilities
//! - Amortized O(1) append with a doubling growth policy
//! - Explicit length / capacity tracking (`capacity >= length` always)
//! - All-or-nothing multi-part appends (no torn records)
//! - Idempotent bulk free
//!
//! ## Memory Layout
//! ```text
//! ┌───────────────────────────────┬──────────────────┐
//! │  in use: [0, len)             │  spare capacity  │
//! └───────────────────────────────┴──────────────────┘
//! ```
//!
//! Growth reallocates, so no borrow of the contents may be held across an
//! append. The borrow checker enforces this: `data()` borrows `&self`,
//! every mutator takes `&mut self`.

mod growable;

pub use growable::{GrowableBuffer, MIN_CAPACITY};
