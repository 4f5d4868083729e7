//! Domain models and parameter types.
//!
//! This module contains the domain models used throughout the service layer. Serenity
//! objects are converted into these models at the bot boundary, so the candidate pool
//! and selection logic never depend on gateway payloads directly.

pub mod direct_message;
pub mod factorio;
pub mod member;
pub mod selection;
