use crate::error::ValidationError;
use crate::rtp_header_extension::RtpPacketHeaderExtension;

/// Version defined by RFC 3550
pub const RTP_VERSION: u8 = 2;

/// Length of the fixed header, up to and including the SSRC
pub const FIXED_HEADER_LEN: usize = 12;

/// The CSRC count is a 4 bit field
pub const MAX_CSRC_COUNT: usize = 15;

pub const MAX_PAYLOAD_TYPE: u8 = 0x7F;

pub(crate) const VERSION_SHIFT: u8 = 6;
pub(crate) const PADDING_MASK: u8 = 0b0010_0000;
pub(crate) const EXTENSION_MASK: u8 = 0b0001_0000;
pub(crate) const CC_MASK: u8 = 0b0000_1111;
pub(crate) const MARKER_MASK: u8 = 0b1000_0000;
pub(crate) const PT_MASK: u8 = 0b0111_1111;

/// An RTP packet, https://tools.ietf.org/html/rfc3550#section-5.1
///
/// Payload and extension data borrow from the buffer the packet was decoded
/// from (or from the caller, when encoding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtpPacket<'a> {
    // version -- 2 bits
    pub version: u8,

    // number of padding octets after the payload, count octet included
    // 0 leaves the padding flag clear
    pub padding: u8,

    // marker flag -- 1 bit
    pub marker: bool,

    // payload type -- 7 bits
    pub payload_type: u8,

    // sequence number -- 2 bytes
    pub sequence_number: u16,

    // timestamp -- 4 bytes
    pub timestamp: u32,

    // synchronization source identifier
    pub ssrc: u32,

    // contributing source identifiers (0 to 15)
    pub csrc: Vec<u32>,

    // header extension, sets the extension flag when present
    pub extension: Option<RtpPacketHeaderExtension<'a>>,

    // payload, padding excluded
    pub payload: &'a [u8],
}

impl<'a> RtpPacket<'a> {
    pub fn has_padding(&self) -> bool {
        self.padding != 0
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    /// Value of the 4 bit CSRC count field.
    ///
    /// Only meaningful for a packet that passes [`RtpPacket::validate`].
    pub fn csrc_count(&self) -> u8 {
        self.csrc.len() as u8 & CC_MASK
    }

    /// Bytes preceding the payload: fixed header, CSRC list and extension.
    pub fn header_len(&self) -> usize {
        let extension = self
            .extension
            .as_ref()
            .map_or(0, RtpPacketHeaderExtension::encoded_len);

        FIXED_HEADER_LEN + 4 * self.csrc.len() + extension
    }

    /// Total size of the packet on the wire.
    pub fn encoded_len(&self) -> usize {
        self.header_len() + self.payload.len() + self.padding as usize
    }

    /// Check that every field fits its wire representation.
    ///
    /// ```
    /// use rtp_codec::{RtpPacketBuilder, ValidationError};
    ///
    /// let mut packet = RtpPacketBuilder::new(1, 0, &[], 0, 0).build().unwrap();
    /// packet.payload_type = 200;
    ///
    /// assert_eq!(packet.validate(), Err(ValidationError::PayloadType(200)));
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.version > 0b11 {
            return Err(ValidationError::Version(self.version));
        }

        if self.payload_type > MAX_PAYLOAD_TYPE {
            return Err(ValidationError::PayloadType(self.payload_type));
        }

        if self.csrc.len() > MAX_CSRC_COUNT {
            return Err(ValidationError::TooManyCsrcs(self.csrc.len()));
        }

        if let Some(extension) = &self.extension {
            if extension.word_count().is_none() {
                return Err(ValidationError::ExtensionTooLong(extension.data.len()));
            }
        }

        Ok(())
    }
}
