//! Internal algorithm modules.
//!
//! Functions here are `pub(crate)`; the public wrappers in the crate root
//! pick defaults and re-export the result types.
//!
//! # Return value convention
//!
//! Routines return `Result<_, Error>`. Input that the original loop would
//! have divided by zero on, or spun on forever, is rejected with
//! [`Error::InvalidInput`](crate::Error::InvalidInput) before any
//! arithmetic happens.

pub(crate) mod newton;
pub(crate) mod series;
