//! Command and event descriptors.
//!
//! A descriptor pairs a few pieces of metadata with an action. Registering
//! descriptors, matching incoming messages or events, and calling
//! [`CommandDescriptor::call`] / [`EventDescriptor::call`] is left to the
//! application.
//!
//! ```
//! use comando::{CommandDescriptor, EventDescriptor, Value};
//!
//! let greet = CommandDescriptor::builder("greet")
//!     .description("Greets the user with a personalized message")
//!     .action(|_message: Value, args: Vec<String>| {
//!         let user = args.first().cloned().unwrap_or_else(|| "User".to_owned());
//!         format!("Hello, {user}!")
//!     })
//!     .build()?;
//!
//! let ready = EventDescriptor::builder("Log Client Ready")
//!     .event("ready")
//!     .description("Log when the client is online")
//!     .action(|_args: Vec<Value>| "Client is online")
//!     .build()?;
//!
//! assert_eq!(greet.call(Value::Null, vec![]), "Hello, User!");
//! assert_eq!(ready.call(vec![]), "Client is online");
//! # Ok::<(), comando::DescriptorError>(())
//! ```
#![forbid(unsafe_code)]

mod action;
mod command;
mod error;
mod event;

pub use action::*;
pub use command::*;
pub use error::*;
pub use event::*;
pub use serde_json::Value;

#[cfg(feature = "macro")]
pub use comando_macro::{command, event};
