//! Server-side client for the NetEase Yunxin IM REST API.
//!
//! A library for dispatching signed requests to the `nimserver`
//! endpoint, deferring delivery through an external job queue, and
//! verifying the authenticity of inbound event-copy callbacks.

pub mod api;
pub mod auth;
pub mod callback;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod queue;
