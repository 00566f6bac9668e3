//! Playing Reversi with "the outside world": a person at the terminal or the
//! search engine, seated behind one [`connectors::Connector`] interface and
//! driven by the turn loop in [`play`].

pub mod config;
pub mod connectors;
pub mod play;
pub mod prompt;
