//! One module per `cuke` subcommand.

pub mod ls;
pub mod search;
pub mod summary;
