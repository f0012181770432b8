use crate::error::ValidationError;
use crate::rtp::*;

/// Encode an RTP packet
///
/// ```
/// use rtp_codec::{encode, RtpPacketBuilder};
///
/// let packet = RtpPacketBuilder::new(12, 1, &[1, 2, 3, 4], 0, 1234)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     encode(&packet).unwrap(),
///     vec![0x80, 0x01, 0x00, 0x00, 0x00, 0x00, 0x04, 0xD2, 0x00, 0x00, 0x00, 0x0C, 1, 2, 3, 4]
/// );
/// ```
pub fn encode(packet: &RtpPacket) -> Result<Vec<u8>, ValidationError> {
    let mut buf = Vec::with_capacity(packet.encoded_len());
    packet.write_to(&mut buf)?;
    Ok(buf)
}

impl<'a> RtpPacket<'a> {
    pub fn encode(&self) -> Result<Vec<u8>, ValidationError> {
        encode(self)
    }

    /// Append the wire representation of the packet to `buf`.
    ///
    /// `buf` is left untouched when the packet does not validate.
    pub fn write_to(&self, buf: &mut Vec<u8>) -> Result<(), ValidationError> {
        if let Err(err) = self.validate() {
            log::debug!("rejecting RTP packet ssrc={}: {}", self.ssrc, err);
            return Err(err);
        }

        buf.reserve(self.encoded_len());
        buf.push(vpxcc(self));
        buf.push(mpt(self));
        buf.extend_from_slice(&self.sequence_number.to_be_bytes());
        buf.extend_from_slice(&self.timestamp.to_be_bytes());
        buf.extend_from_slice(&self.ssrc.to_be_bytes());

        for csrc in &self.csrc {
            buf.extend_from_slice(&csrc.to_be_bytes());
        }

        if let Some(extension) = &self.extension {
            // validate() guarantees the word count fits
            let words = extension.word_count().unwrap_or_default();
            buf.extend_from_slice(&extension.profile.to_be_bytes());
            buf.extend_from_slice(&words.to_be_bytes());
            buf.extend_from_slice(extension.data);
            buf.resize(buf.len() + extension.padded_len() - extension.data.len(), 0);
        }

        buf.extend_from_slice(self.payload);

        if self.has_padding() {
            buf.resize(buf.len() + self.padding as usize - 1, 0);
            buf.push(self.padding);
        }

        log::trace!(
            "encoded RTP packet ssrc={} seq={} len={}",
            self.ssrc,
            self.sequence_number,
            self.encoded_len()
        );

        Ok(())
    }
}

fn vpxcc(packet: &RtpPacket) -> u8 {
    let mut byte = packet.version << VERSION_SHIFT;
    if packet.has_padding() {
        byte |= PADDING_MASK;
    }
    if packet.has_extension() {
        byte |= EXTENSION_MASK;
    }
    byte | packet.csrc_count()
}

fn mpt(packet: &RtpPacket) -> u8 {
    let mut byte = packet.payload_type & PT_MASK;
    if packet.marker {
        byte |= MARKER_MASK;
    }
    byte
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtp_header_extension::RtpPacketHeaderExtension;

    fn packet(payload: &[u8]) -> RtpPacket<'_> {
        RtpPacket {
            version: RTP_VERSION,
            padding: 0,
            marker: false,
            payload_type: 0x11,
            sequence_number: 0x1234,
            timestamp: 0x567890AB,
            ssrc: 0xCDEFFEDC,
            csrc: vec![],
            extension: None,
            payload,
        }
    }

    #[test]
    fn vpxcc_all_one() {
        let mut p = packet(&[]);
        p.version = 3;
        p.padding = 1;
        p.extension = Some(RtpPacketHeaderExtension::new(0, &[]));
        p.csrc = (0..15).collect();
        assert_eq!(vpxcc(&p), 0xFF);
    }

    #[test]
    fn vpxcc_all_zero() {
        let mut p = packet(&[]);
        p.version = 0;
        assert_eq!(vpxcc(&p), 0x00);
    }

    #[test]
    fn mpt_mixed() {
        let mut p = packet(&[]);
        p.marker = true;
        p.payload_type = 0x25;
        assert_eq!(mpt(&p), 0xA5);
    }

    #[test]
    fn encode_no_csrc() {
        let encoded = encode(&packet(&[0xBA, 0x09])).unwrap();
        assert_eq!(
            encoded,
            vec![0x80, 0x11, 0x12, 0x34, 0x56, 0x78, 0x90, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x09]
        );
    }

    #[test]
    fn encode_csrcs_and_version_one() {
        let mut p = packet(b"12345");
        p.version = 1;
        p.payload_type = 42;
        p.sequence_number = 23;
        p.timestamp = 2012;
        p.ssrc = 4711;
        p.csrc = vec![17, 4];

        assert_eq!(
            encode(&p).unwrap(),
            vec![
                0x42, 0x2A, 0x00, 0x17, 0x00, 0x00, 0x07, 0xDC, 0x00, 0x00, 0x12, 0x67, 0x00,
                0x00, 0x00, 0x11, 0x00, 0x00, 0x00, 0x04, 0x31, 0x32, 0x33, 0x34, 0x35
            ]
        );
    }

    #[test]
    fn encode_extension_pads_to_word() {
        let mut p = packet(&[0xEE]);
        p.extension = Some(RtpPacketHeaderExtension::new(0xBEDE, &[1, 2, 3, 4, 5]));

        let encoded = encode(&p).unwrap();
        assert_eq!(encoded[0], 0x90);
        assert_eq!(
            &encoded[12..],
            &[0xBE, 0xDE, 0x00, 0x02, 1, 2, 3, 4, 5, 0, 0, 0, 0xEE][..]
        );
    }

    #[test]
    fn encode_padding() {
        let mut p = packet(&[0xAA, 0xBB]);
        p.padding = 3;

        let encoded = encode(&p).unwrap();
        assert_eq!(encoded[0], 0xA0);
        assert_eq!(&encoded[12..], &[0xAA, 0xBB, 0x00, 0x00, 0x03][..]);
        assert_eq!(encoded.len(), p.encoded_len());
    }

    #[test]
    fn encode_single_padding_octet() {
        let mut p = packet(&[]);
        p.padding = 1;
        assert_eq!(&encode(&p).unwrap()[12..], &[0x01][..]);
    }

    #[test]
    fn encode_rejects_payload_type() {
        let mut p = packet(&[]);
        p.payload_type = 200;
        assert_eq!(encode(&p), Err(ValidationError::PayloadType(200)));
    }

    #[test]
    fn encode_rejects_sixteen_csrcs() {
        let mut p = packet(&[]);
        p.csrc = (0..16).collect();
        assert_eq!(encode(&p), Err(ValidationError::TooManyCsrcs(16)));
    }

    #[test]
    fn write_to_appends() {
        let mut buf = vec![0xFF];
        packet(&[1]).write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), 14);
        assert_eq!(buf[0], 0xFF);
        assert_eq!(buf[1], 0x80);
    }

    #[test]
    fn write_to_leaves_buffer_on_error() {
        let mut p = packet(&[1]);
        p.version = 4;

        let mut buf = vec![0xFF];
        assert_eq!(p.write_to(&mut buf), Err(ValidationError::Version(4)));
        assert_eq!(buf, vec![0xFF]);
    }
}
