use crate::error::{DecodeError, Section};
use crate::field::DecodedFrame;
use crate::rtp::*;
use crate::rtp_header_extension::RtpPacketHeaderExtension;

extern crate nom;
use nom::bits::bits;
use nom::bits::complete::take;
use nom::bytes::complete::take as take_bytes;
use nom::multi::count;
use nom::number::complete::{be_u16, be_u32};
use nom::{sequence::tuple, IResult};

/// Decode an RTP packet into a field accessor
///
/// ```
/// use rtp_codec::{decode, Field, FieldValue};
///
/// let data = [
///     0x80, 0x01, 0x00, 0x00, 0x00, 0x00, 0x04, 0xD2,
///     0x00, 0x00, 0x00, 0x0C, 0x01, 0x02, 0x03, 0x04,
/// ];
/// let frame = decode(&data).unwrap();
///
/// assert_eq!(frame.get(Field::Timestamp), FieldValue::Int(1234));
/// assert_eq!(
///     frame.get_many(&[Field::Version, Field::Payload]),
///     vec![FieldValue::Int(2), FieldValue::Bytes(&[1, 2, 3, 4])]
/// );
/// ```
pub fn decode(input: &[u8]) -> Result<DecodedFrame, DecodeError> {
    parse_rtp_packet(input).map(DecodedFrame::new)
}

/// Parse an RTP packet
///
/// The padding octets are stripped from the returned payload, their count is
/// kept in `padding`.
pub fn parse_rtp_packet(input: &[u8]) -> Result<RtpPacket, DecodeError> {
    match parse_sections(input) {
        Ok(packet) => {
            log::trace!(
                "decoded RTP packet ssrc={} seq={} len={}",
                packet.ssrc,
                packet.sequence_number,
                input.len()
            );
            Ok(packet)
        }
        Err(err) => {
            log::debug!("malformed RTP packet of {} bytes: {}", input.len(), err);
            Err(err)
        }
    }
}

fn parse_sections(input: &[u8]) -> Result<RtpPacket, DecodeError> {
    let (
        input,
        (
            (version, padding, extension, csrc_count),
            (marker, payload_type),
            sequence_number,
            timestamp,
            ssrc,
        ),
    ) = tuple((parse_vpxcc, parse_mpt, be_u16, be_u32, be_u32))(input).map_err(truncated(
        Section::FixedHeader,
        FIXED_HEADER_LEN,
        input.len(),
    ))?;

    let (input, csrc) = parse_csrc(input, csrc_count as usize).map_err(truncated(
        Section::Csrc,
        csrc_count as usize * 4,
        input.len(),
    ))?;

    let (input, extension) = if extension {
        let (input, (profile, length)) = parse_extension_header(input).map_err(truncated(
            Section::ExtensionHeader,
            4,
            input.len(),
        ))?;

        let (input, data) = parse_extension_data(input, length).map_err(truncated(
            Section::ExtensionData,
            length as usize * 4,
            input.len(),
        ))?;

        (input, Some(RtpPacketHeaderExtension::new(profile, data)))
    } else {
        (input, None)
    };

    let (payload, padding) = if padding {
        strip_padding(input)?
    } else {
        (input, 0)
    };

    Ok(RtpPacket {
        version,
        padding,
        marker,
        payload_type,
        sequence_number,
        timestamp,
        ssrc,
        csrc,
        extension,
        payload,
    })
}

fn truncated<E>(
    section: Section,
    needed: usize,
    available: usize,
) -> impl FnOnce(nom::Err<E>) -> DecodeError {
    move |_| DecodeError::Truncated {
        section,
        needed,
        available,
    }
}

pub fn parse_vpxcc(input: &[u8]) -> IResult<&[u8], (u8, bool, bool, u8)> {
    let (input, (v, p, x, cc)): (_, (u8, u8, u8, u8)) = bits(tuple((
        take::<_, _, _, (_, _)>(2usize),
        take::<_, _, _, (_, _)>(1usize),
        take::<_, _, _, (_, _)>(1usize),
        take::<_, _, _, (_, _)>(4usize),
    )))(input)?;

    Ok((input, (v, p == 1, x == 1, cc)))
}

pub fn parse_mpt(input: &[u8]) -> IResult<&[u8], (bool, u8)> {
    let (input, (m, pt)): (_, (u8, u8)) = bits(tuple((
        take::<_, _, _, (_, _)>(1usize),
        take::<_, _, _, (_, _)>(7usize),
    )))(input)?;

    Ok((input, (m == 1, pt)))
}

pub fn parse_csrc(input: &[u8], csrc_count: usize) -> IResult<&[u8], Vec<u32>> {
    count(be_u32, csrc_count)(input)
}

/// Profile identifier and length in 32 bit words
pub fn parse_extension_header(input: &[u8]) -> IResult<&[u8], (u16, u16)> {
    tuple((be_u16, be_u16))(input)
}

pub fn parse_extension_data(input: &[u8], length: u16) -> IResult<&[u8], &[u8]> {
    take_bytes(length as usize * 4)(input)
}

// the last octet counts the padding octets, itself included
fn strip_padding(input: &[u8]) -> Result<(&[u8], u8), DecodeError> {
    match input.last() {
        Some(&length) if length != 0 && length as usize <= input.len() => {
            Ok((&input[..input.len() - length as usize], length))
        }
        last => Err(DecodeError::InvalidPadding {
            length: last.copied().unwrap_or(0),
            available: input.len(),
        }),
    }
}
