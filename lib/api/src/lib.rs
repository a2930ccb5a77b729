//! # fundnet API
//!
//! REST API for the fundnet network explorer backend.
//!
//! Every endpoint wraps its result in a `{ "ok": bool, "data" | "error" }`
//! envelope. Client-attributable failures (missing identifiers, dataset not
//! loaded) come back as 400, unexpected ones as 500; none are fatal to the
//! process.

mod rest;

pub use rest::{routes, RestApi};
