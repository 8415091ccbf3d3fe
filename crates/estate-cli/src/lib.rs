//! Estate CLI - client library and command line tool for the estate server.

pub mod client;

pub use client::EstateClient;
