use std::fmt;

use thiserror::Error;

/// Part of an RTP packet the decoder was reading when it ran out of data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    FixedHeader,
    Csrc,
    ExtensionHeader,
    ExtensionData,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::FixedHeader => "fixed header",
            Section::Csrc => "CSRC list",
            Section::ExtensionHeader => "header extension",
            Section::ExtensionData => "header extension data",
        };
        f.write_str(name)
    }
}

/// A packet field holds a value its wire representation cannot carry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("version {0} out of range: 0 - 3 allowed")]
    Version(u8),
    #[error("payload type {0} out of range: 0 - 127 allowed")]
    PayloadType(u8),
    #[error("maximum number of CSRC ids (15) surpassed: {0}")]
    TooManyCsrcs(usize),
    #[error("header extension of {0} bytes does not fit a 16 bit word count")]
    ExtensionTooLong(usize),
}

/// A byte buffer is not a well-formed RTP packet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("truncated {section}: need {needed} bytes, {available} available")]
    Truncated {
        section: Section,
        needed: usize,
        available: usize,
    },
    #[error("invalid padding length {length}: {available} bytes follow the header")]
    InvalidPadding { length: u8, available: usize },
}

/// A field name does not identify any RTP packet field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown RTP field: {0}")]
pub struct UnknownFieldError(pub String);
