//! Sol IR - AST value types
//!
//! This crate contains the value universe shared by the Sol reader and
//! the binary emitter:
//! - [`Value`], the tagged sum of every Sol form
//! - [`List`], the ordered container with its dispatch and freeze flags
//! - [`ObjectLiteral`], an insertion-ordered key/value literal
//!
//! # Design Philosophy
//!
//! The tree is **purely owned**: every value has exactly one parent and
//! is dropped with it. There is no reference counting and no sharing
//! between tree positions, so `Clone` is a deep copy and equality is
//! structural. The runtime's refcounted object graph is a concern of
//! the runtime; the compiler never needs it.
//!
//! Numbers are stored as `f64` and only normalised into their
//! significand/exponent wire form by the emitter.

mod value;

pub use value::{List, ObjectLiteral, Value};
