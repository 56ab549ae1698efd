//! HTTP layer for talking to the Yunxin REST endpoint.
//!
//! This module provides:
//! - Request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - An HTTP client abstraction for dependency injection ([`HttpClient`])
//! - The production implementation over reqwest ([`ReqwestClient`])

mod client;
mod error;
mod message;

#[cfg(test)]
mod message_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use message::{HttpClient, HttpRequest, HttpResponse};
