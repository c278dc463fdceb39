//! HTTP State Store
//!
//! Keeps the stack snapshot on a plain webserver with `GET`/`PUT`.

mod client;

pub use client::RemoteStateClient;
