//! Terminal front end for `othello-engine`: board notation, text rendering,
//! and an interactive session driven by any line-based input.

pub mod location;
pub mod render;
pub mod session;
