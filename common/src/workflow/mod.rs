//! Reports panel state machine.
//!
//! Elm-style split: [`ReportsPanel`] is the state, [`Msg`] the events,
//! [`update`] the pure transition returning [`Command`]s, and [`perform`]
//! runs a command against the capability traits and yields the follow-up
//! message. Hosts loop `update` -> `perform` -> `update`.

mod command;
mod messages;
mod state;
mod update;

pub use command::{Command, DELETE_PROMPT, perform};
pub use messages::Msg;
pub use state::{Banner, BannerKind, GenerationPhase, ListView, ReportRow, ReportsPanel};
pub use update::{DELETE_FAILED, DELETED, GENERATE_FAILED, GENERATED, LIST_FAILED, update};
