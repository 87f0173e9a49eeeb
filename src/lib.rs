//! This crate is my attempt at writing a linked list with value semantics, the way `Vec` and
//! `String` behave in Rust or arrays do in Swift: a clone of a list acts as an independent value.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. The interesting part isn't the list itself but making copies
//! cheap: clones share their nodes and a list only copies them when it is about to change a node
//! that another list could see (copy-on-write).
//!
//! # Method
//! Nodes are reference counted with [`Rc`](std::rc::Rc). Each list also carries a token that is
//! shared with its clones, so "is anyone else looking at these nodes?" is an `O(1)` question. The
//! first mutation after a clone pays `O(n)` to copy, and every one after that is back to the cost
//! of the plain operation. Prepending and popping never copy at all, since they only move the
//! head.
//!
//! The [`LinkedList`](collections::linked::LinkedList) docs list the complexity of every operation.
//!
//! # Error Handling
//! Removing from an empty list, looking up an index past the end or naming a position that doesn't
//! belong to the list are all normal outcomes, so they return [`None`] rather than panicking or
//! producing an error. The exception is indexing, which follows the usual pattern of a panicking
//! `get` alongside a `try_get` returning a strongly typed error that implements
//! [`Error`](std::error::Error).
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
