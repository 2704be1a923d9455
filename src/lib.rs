//! A small text-menu food ordering console.
//!
//! An owner maintains a menu of named, priced items; customers browse it,
//! collect items into an order and place the order. The menu lives in a flat
//! `name,price` text file that is read at startup and written back when the
//! user chooses Exit.
//!
//! The main entry point is [`App`], which drives the whole dialogue over any
//! [`LineSource`] and any [`std::io::Write`]. The public modules [`menu`],
//! [`order`] and [`auth`] expose the data types and the credential check.

mod app;
pub mod auth;
mod customer;
pub mod io_adapters;
pub mod menu;
pub mod order;
mod owner;

pub use app::{App, RunOutcome};
pub use io_adapters::{EditorSource, LineSource, ScriptedSource};
