//! Scratch state shared by the traversals and searches. Not part of the
//! public API.

pub(crate) mod visited;
