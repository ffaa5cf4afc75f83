//! Library components of the `setwise` command-line harness.

pub mod hobbit;
pub mod logging;
pub mod report;
