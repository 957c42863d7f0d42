//! HTTP transport layer — `MintpressHttp`.

pub mod client;

pub use client::MintpressHttp;
