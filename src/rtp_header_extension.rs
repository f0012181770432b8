/// An RTP packet header extension, https://tools.ietf.org/html/rfc3550#section-5.3.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtpPacketHeaderExtension<'a> {
    // profile -- 2 bytes
    pub profile: u16,

    // variable length data, padded to a 32 bit boundary on the wire
    pub data: &'a [u8],
}

impl<'a> RtpPacketHeaderExtension<'a> {
    pub fn new(profile: u16, data: &'a [u8]) -> Self {
        Self { profile, data }
    }

    /// Data length rounded up to the next 32 bit word.
    pub fn padded_len(&self) -> usize {
        (self.data.len() + 3) / 4 * 4
    }

    /// Value of the length field, `None` when the data is too long for it.
    pub fn word_count(&self) -> Option<u16> {
        let words = self.padded_len() / 4;
        if words > u16::MAX as usize {
            None
        } else {
            Some(words as u16)
        }
    }

    /// Bytes taken on the wire: profile, length and padded data.
    pub fn encoded_len(&self) -> usize {
        4 + self.padded_len()
    }
}
