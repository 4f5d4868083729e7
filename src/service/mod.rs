//! Service layer for game logic and orchestration.
//!
//! This module sits between the bot's command handlers and the in-memory data layer.
//! Services are responsible for:
//!
//! - **Pool resolution**: Deriving the eligible candidates of a voice channel
//! - **Selection**: Uniform random draws and pool exclusions
//! - **Announcement**: Formatting public and private role messages
//! - **Delivery**: All-or-nothing direct message batches
//! - **Calculators**: Stand-alone helpers such as the Factorio speed calculator

pub mod announcement;
pub mod direct_message;
pub mod factorio;
pub mod game;
pub mod pool;
pub mod selection;

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
mod test;
