//! # bin2c-core
//!
//! A library for converting binary files into C array literals.
//!
//! This crate provides the core functionality for:
//! - Grouping a byte stream into fixed-width integer elements
//! - Decoding multi-byte groups under a requested byte order
//! - Rendering the elements as a line-wrapped, hex-encoded array literal
//!
//! The emitted literal is suitable for embedding binary payloads directly in
//! compiled source code, a common technique for firmware loaders and resource
//! blobs when no linker-based binary-inclusion mechanism is available.
//!
//! ## Architecture
//!
//! The library is organized into two modules:
//!
//! - [`encode`]: The conversion pipeline and its configuration
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```
//! use bin2c_core::{Encoder, EncoderConfig, ElementWidth, ByteOrder};
//!
//! let config = EncoderConfig::new()
//!     .width(ElementWidth::U32)
//!     .byte_order(ByteOrder::Little)
//!     .array_name("loader_code");
//!
//! let literal = Encoder::with_config(config).encode(&[0x01, 0x02, 0x03, 0x04])?;
//! assert!(literal.starts_with("static uint32_t loader_code[] = {"));
//! # Ok::<(), bin2c_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod encode;
pub mod error;

// Re-export primary types for convenience
pub use encode::{encode_file, ByteOrder, ElementWidth, Encoder, EncoderConfig};
pub use error::{Error, Result};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
