//! Behavioral tests for UI components
//!
//! BDD-style tests using given-when-then naming. Anything that needs a DOM or
//! `fetch` is covered in `plantknight-core`; these exercise routing and the
//! pure helpers the pages render from.
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
