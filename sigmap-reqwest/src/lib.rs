//! # sigmap-reqwest
//!
//! Bridges the [`reqwest`] HTTP client into sigmap signals.
//!
//! reqwest owns the transport; this crate only buffers each
//! [`reqwest::Response`] into a [`sigmap::Response`] so the stream operators
//! can filter and decode it.
//!
//! ```no_run
//! use futures::StreamExt;
//! use sigmap::ResponseStreamExt;
//!
//! # async fn run() -> Result<(), sigmap_reqwest::Error> {
//! let client = reqwest::Client::new();
//!
//! let mut json = std::pin::pin!(
//!     sigmap_reqwest::signal(client.get("http://localhost:8080/status"))
//!         .filter_successful_status_codes()
//!         .map_json()
//! );
//!
//! while let Some(value) = json.next().await {
//!     println!("{}", value?);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod response;

pub use error::Error;
pub use response::{ResponseExt, responses, signal};
