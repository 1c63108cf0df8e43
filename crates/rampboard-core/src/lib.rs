pub mod badge;
pub mod board;
pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod nav;
pub mod schedule;
pub mod search;
pub mod sos;
pub mod status;
pub mod sync;
pub mod toast;

pub use board::{
  AcceptOutcome,
  Board,
  TaskCard
};
pub use error::BoardError;
