use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::UnknownFieldError;
use crate::rtp::RtpPacket;
use crate::rtp_header_extension::RtpPacketHeaderExtension;

/// Identifies one field of a decoded RTP packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Version,
    Padding,
    Extension,
    Marker,
    PayloadType,
    SequenceNumber,
    Timestamp,
    Ssrc,
    Csrcs,
    ExtensionHeader,
    Payload,
    CsrcCount,
    PaddingLength,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Version,
        Field::Padding,
        Field::Extension,
        Field::Marker,
        Field::PayloadType,
        Field::SequenceNumber,
        Field::Timestamp,
        Field::Ssrc,
        Field::Csrcs,
        Field::ExtensionHeader,
        Field::Payload,
        Field::CsrcCount,
        Field::PaddingLength,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Version => "Version",
            Field::Padding => "Padding",
            Field::Extension => "Extension",
            Field::Marker => "Marker",
            Field::PayloadType => "PayloadType",
            Field::SequenceNumber => "SequenceNumber",
            Field::Timestamp => "Timestamp",
            Field::Ssrc => "Ssrc",
            Field::Csrcs => "Csrcs",
            Field::ExtensionHeader => "ExtensionHeader",
            Field::Payload => "Payload",
            Field::CsrcCount => "CsrcCount",
            Field::PaddingLength => "PaddingLength",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownFieldError;

    /// Accepts the field names as written by `Display`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// Value of a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Int(u32),
    Bool(bool),
    Bytes(&'a [u8]),
    List(Vec<u32>),
    Extension(Option<RtpPacketHeaderExtension<'a>>),
}

impl<'a> fmt::Display for FieldValue<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(value) => write!(f, "{}", value),
            FieldValue::Bool(value) => write!(f, "{}", value),
            FieldValue::Bytes(bytes) => write_hex(f, bytes),
            FieldValue::List(values) => write!(f, "{:?}", values),
            FieldValue::Extension(None) => f.write_str("none"),
            FieldValue::Extension(Some(extension)) => {
                write!(f, "profile=0x{:04x} data=", extension.profile)?;
                write_hex(f, extension.data)
            }
        }
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(f, "{:02x}", byte)?;
    }
    Ok(())
}

/// A parsed RTP packet, queried field by field
///
/// All parsing happens in [`crate::decode`]; lookups only read the stored
/// packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame<'a> {
    packet: RtpPacket<'a>,
}

impl<'a> DecodedFrame<'a> {
    pub fn new(packet: RtpPacket<'a>) -> Self {
        Self { packet }
    }

    pub fn packet(&self) -> &RtpPacket<'a> {
        &self.packet
    }

    pub fn into_packet(self) -> RtpPacket<'a> {
        self.packet
    }

    pub fn get(&self, field: Field) -> FieldValue<'a> {
        let packet = &self.packet;
        match field {
            Field::Version => FieldValue::Int(packet.version as u32),
            Field::Padding => FieldValue::Bool(packet.has_padding()),
            Field::Extension => FieldValue::Bool(packet.has_extension()),
            Field::Marker => FieldValue::Bool(packet.marker),
            Field::PayloadType => FieldValue::Int(packet.payload_type as u32),
            Field::SequenceNumber => FieldValue::Int(packet.sequence_number as u32),
            Field::Timestamp => FieldValue::Int(packet.timestamp),
            Field::Ssrc => FieldValue::Int(packet.ssrc),
            Field::Csrcs => FieldValue::List(packet.csrc.clone()),
            Field::ExtensionHeader => FieldValue::Extension(packet.extension),
            Field::Payload => FieldValue::Bytes(packet.payload),
            Field::CsrcCount => FieldValue::Int(packet.csrc.len() as u32),
            Field::PaddingLength => FieldValue::Int(packet.padding as u32),
        }
    }

    pub fn get_many(&self, fields: &[Field]) -> Vec<FieldValue<'a>> {
        fields.iter().map(|field| self.get(*field)).collect()
    }

    pub fn get_by_name(&self, name: &str) -> Result<FieldValue<'a>, UnknownFieldError> {
        Ok(self.get(name.parse()?))
    }

    /// Write every field as `name : value`, one per line.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for field in Field::ALL.iter() {
            writeln!(out, "{} : {}", field, self.get(*field))?;
        }
        Ok(())
    }
}
