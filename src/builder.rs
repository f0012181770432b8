use crate::error::ValidationError;
use crate::rtp::{RtpPacket, RTP_VERSION};
use crate::rtp_header_extension::RtpPacketHeaderExtension;

/// Builds an [`RtpPacket`] from the mandatory fields, with defaults for the
/// rest: no CSRCs, marker clear, no padding, no extension, version 2.
///
/// ```
/// use rtp_codec::RtpPacketBuilder;
///
/// let bytes = RtpPacketBuilder::new(4711, 42, b"12345", 23, 2012)
///     .csrcs(vec![17, 4])
///     .version(1)
///     .encode()
///     .unwrap();
///
/// assert_eq!(&bytes[..2], &[0x42, 0x2A]);
/// ```
#[derive(Debug, Clone)]
pub struct RtpPacketBuilder<'a> {
    packet: RtpPacket<'a>,
}

impl<'a> RtpPacketBuilder<'a> {
    pub fn new(
        ssrc: u32,
        payload_type: u8,
        payload: &'a [u8],
        sequence_number: u16,
        timestamp: u32,
    ) -> Self {
        Self {
            packet: RtpPacket {
                version: RTP_VERSION,
                padding: 0,
                marker: false,
                payload_type,
                sequence_number,
                timestamp,
                ssrc,
                csrc: Vec::new(),
                extension: None,
                payload,
            },
        }
    }

    pub fn csrcs(mut self, csrcs: Vec<u32>) -> Self {
        self.packet.csrc = csrcs;
        self
    }

    pub fn marker(mut self, marker: bool) -> Self {
        self.packet.marker = marker;
        self
    }

    /// Number of padding octets to append, the count octet included.
    pub fn padding(mut self, padding: u8) -> Self {
        self.packet.padding = padding;
        self
    }

    pub fn extension(mut self, profile: u16, data: &'a [u8]) -> Self {
        self.packet.extension = Some(RtpPacketHeaderExtension::new(profile, data));
        self
    }

    pub fn version(mut self, version: u8) -> Self {
        self.packet.version = version;
        self
    }

    pub fn build(self) -> Result<RtpPacket<'a>, ValidationError> {
        self.packet.validate()?;
        Ok(self.packet)
    }

    pub fn encode(self) -> Result<Vec<u8>, ValidationError> {
        self.packet.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let packet = RtpPacketBuilder::new(12, 1, &[1, 2], 3, 4).build().unwrap();

        assert_eq!(packet.version, 2);
        assert_eq!(packet.padding, 0);
        assert!(!packet.marker);
        assert!(packet.csrc.is_empty());
        assert_eq!(packet.extension, None);
        assert_eq!(packet.ssrc, 12);
        assert_eq!(packet.payload_type, 1);
        assert_eq!(packet.sequence_number, 3);
        assert_eq!(packet.timestamp, 4);
        assert_eq!(packet.payload, &[1, 2]);
    }

    #[test]
    fn setters() {
        let packet = RtpPacketBuilder::new(1, 2, &[], 3, 4)
            .csrcs(vec![5, 6])
            .marker(true)
            .padding(4)
            .extension(0xABCD, &[7, 8, 9, 10])
            .version(1)
            .build()
            .unwrap();

        assert_eq!(packet.csrc, vec![5, 6]);
        assert!(packet.marker);
        assert_eq!(packet.padding, 4);
        assert_eq!(
            packet.extension,
            Some(RtpPacketHeaderExtension::new(0xABCD, &[7, 8, 9, 10]))
        );
        assert_eq!(packet.version, 1);
    }

    #[test]
    fn build_validates() {
        let result = RtpPacketBuilder::new(1, 200, &[], 0, 0).build();
        assert_eq!(result, Err(ValidationError::PayloadType(200)));

        let result = RtpPacketBuilder::new(1, 0, &[], 0, 0)
            .csrcs((0..16).collect())
            .encode();
        assert_eq!(result, Err(ValidationError::TooManyCsrcs(16)));
    }
}
