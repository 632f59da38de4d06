// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pre-parsed commit message model.
//!
//! Splitting a raw commit into header, body and footer is the caller's job;
//! the engine only ever sees the structured [`ParsedMessage`].

mod parsed;

pub use parsed::{Field, ParsedMessage};
