//! # Converter Core
//!
//! The rules that keep two currency slots consistent.
//!
//! ## Architecture
//!
//! - `validator` - Gate for amounts typed into a slot
//! - `engine` - Pure conversion of one slot into the other
//! - `converter` - Owns the pair and the rate status, exposes the mutations
//!
//! The converter never talks to the network itself: rate tables arrive
//! through any `RateSource` handed to [`Converter::refresh`], or are pushed
//! in with [`Converter::apply_fetch`].

pub mod converter;
pub mod engine;
pub mod validator;


pub use converter::{Converter, RateStatus, Recompute};
