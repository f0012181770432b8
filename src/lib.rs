//! # RTP codec
//!
//! This crate encodes and decodes RTP packets, with the decoder written
//! using nom
//!
//! Handles the fixed header, the CSRC list, the header extension and padding.
//! Both directions are stateless: one call, one packet.
//!
//! See also:
//! - [RFC 3550](https://tools.ietf.org/html/rfc3550): RTP: A Transport Protocol for Real-Time Applications

mod error;
pub use error::*;

mod rtp;
pub use rtp::*;

mod rtp_header_extension;
pub use rtp_header_extension::*;

mod builder;
pub use builder::*;

mod writer;
pub use writer::*;

mod parser;
pub use parser::*;

mod field;
pub use field::*;
