//! Connectors seat a player at the board: a person at the terminal, or the engine.

mod computer;
mod connector;
mod terminal;

pub use computer::ComputerConnector;
pub use connector::Connector;
pub use terminal::TerminalConnector;
