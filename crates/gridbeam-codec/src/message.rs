//! Message codecs for the model wire format
//!
//! Field numbers are part of the on-wire contract and must never change:
//!
//! - `Direction`: 1 `inclination` (float), 2 `azimuth` (float) — the legacy
//!   angle pair; the same message also carries the current integer
//!   unit-vector components as 1 `x`, 2 `y`, 3 `z` (zigzag varints). The two
//!   shapes share field numbers but differ in wire type, which is how the
//!   decoder tells them apart.
//! - `GridPosition`: 1 `x`, 2 `y`, 3 `z` (zigzag varints)
//! - `Part`: 1 `type` (required), 2 `origin`, 3 `sizeId`, 4 `materialId`,
//!   5 `direction`, 6 `length`
//! - `Model`: 1 repeated `parts`, 2 `specId`
//!
//! Zero-valued fields are omitted on encode (except the required `type`)
//! and decode back to their defaults. Unknown fields are skipped.

use glam::DVec3;
use gridbeam_core::{Direction, GridPosition, MaterialId, Model, Part, PartType, SizeId, SpecId};

use crate::error::CodecError;
use crate::wire::{
    FIXED32, LENGTH_DELIMITED, Reader, VARINT, put_fixed32, put_tag, put_varint, varint_len,
    zigzag_decode, zigzag_encode,
};

fn nonzero_i32(value: f64) -> Option<i32> {
    let v = value as i32;
    (v != 0).then_some(v)
}

fn nonzero_f32(value: f32) -> Option<f32> {
    (value != 0.0).then_some(value)
}

fn nonzero_u32(value: u32) -> Option<u32> {
    (value != 0).then_some(value)
}

/// Length of one varint field including its tag, or 0 when omitted
fn varint_field_len(value: Option<u64>) -> usize {
    value.map_or(0, |v| 1 + varint_len(v))
}

/// Wire form of a part direction, covering both representations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDirection {
    /// Legacy elevation angle in degrees (field 1, float)
    pub inclination: Option<f32>,
    /// Legacy azimuth angle in degrees (field 2, float)
    pub azimuth: Option<f32>,
    /// Unit-vector x component (field 1, zigzag varint)
    pub x: Option<i32>,
    /// Unit-vector y component (field 2, zigzag varint)
    pub y: Option<i32>,
    /// Unit-vector z component (field 3, zigzag varint)
    pub z: Option<i32>,
}

impl RawDirection {
    /// Wire form of a domain direction.
    ///
    /// Directions with integer components (all axis directions) take the
    /// compact zigzag shape and round-trip exactly; anything else is stored
    /// as the angle pair, which covers any unit vector at f32 precision —
    /// within the tolerance [`Direction`]'s equality allows.
    pub fn from_direction(direction: &Direction) -> Self {
        let v = direction.vector();
        let integral = v.x.fract() == 0.0 && v.y.fract() == 0.0 && v.z.fract() == 0.0;
        if integral {
            Self {
                x: nonzero_i32(v.x),
                y: nonzero_i32(v.y),
                z: nonzero_i32(v.z),
                ..Default::default()
            }
        } else {
            let (inclination, azimuth) = direction.angles();
            Self {
                inclination: nonzero_f32(inclination),
                azimuth: nonzero_f32(azimuth),
                ..Default::default()
            }
        }
    }

    /// Convert to the domain direction, preferring vector components when
    /// both shapes are present.
    pub fn to_direction(&self) -> Direction {
        if self.x.is_some() || self.y.is_some() || self.z.is_some() {
            Direction::from_vector(DVec3::new(
                f64::from(self.x.unwrap_or(0)),
                f64::from(self.y.unwrap_or(0)),
                f64::from(self.z.unwrap_or(0)),
            ))
        } else if self.inclination.is_some() || self.azimuth.is_some() {
            Direction::from_angles(self.inclination.unwrap_or(0.0), self.azimuth.unwrap_or(0.0))
        } else {
            Direction::default()
        }
    }

    /// Encoded size in bytes
    pub fn encoding_length(&self) -> usize {
        let mut len = 0;
        len += self.inclination.map_or(0, |_| 1 + 4);
        len += self.azimuth.map_or(0, |_| 1 + 4);
        len += varint_field_len(self.x.map(zigzag_encode));
        len += varint_field_len(self.y.map(zigzag_encode));
        len += varint_field_len(self.z.map(zigzag_encode));
        len
    }

    /// Append the encoded message body to the buffer
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        if let Some(inclination) = self.inclination {
            put_tag(buf, 1, FIXED32);
            put_fixed32(buf, inclination.to_bits());
        }
        if let Some(azimuth) = self.azimuth {
            put_tag(buf, 2, FIXED32);
            put_fixed32(buf, azimuth.to_bits());
        }
        if let Some(x) = self.x {
            put_tag(buf, 1, VARINT);
            put_varint(buf, zigzag_encode(x));
        }
        if let Some(y) = self.y {
            put_tag(buf, 2, VARINT);
            put_varint(buf, zigzag_encode(y));
        }
        if let Some(z) = self.z {
            put_tag(buf, 3, VARINT);
            put_varint(buf, zigzag_encode(z));
        }
    }

    /// Decode a message window
    pub fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        let mut direction = RawDirection::default();
        while reader.has_more() {
            let (field, wire_type) = reader.read_tag()?;
            match (field, wire_type) {
                (1, FIXED32) => direction.inclination = Some(reader.read_float()?),
                (2, FIXED32) => direction.azimuth = Some(reader.read_float()?),
                (1, VARINT) => direction.x = Some(zigzag_decode(reader.read_varint()?)),
                (2, VARINT) => direction.y = Some(zigzag_decode(reader.read_varint()?)),
                (3, VARINT) => direction.z = Some(zigzag_decode(reader.read_varint()?)),
                _ => reader.skip(wire_type)?,
            }
        }
        Ok(direction)
    }
}

/// Wire form of a grid position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawGridPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl RawGridPosition {
    /// Wire form of a domain grid position
    pub fn from_position(position: GridPosition) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
        }
    }

    /// Convert to the domain grid position
    pub fn to_position(self) -> GridPosition {
        GridPosition::new(self.x, self.y, self.z)
    }

    /// Encoded size in bytes
    pub fn encoding_length(&self) -> usize {
        varint_field_len((self.x != 0).then(|| zigzag_encode(self.x)))
            + varint_field_len((self.y != 0).then(|| zigzag_encode(self.y)))
            + varint_field_len((self.z != 0).then(|| zigzag_encode(self.z)))
    }

    /// Append the encoded message body to the buffer
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        for (field, value) in [(1, self.x), (2, self.y), (3, self.z)] {
            if value != 0 {
                put_tag(buf, field, VARINT);
                put_varint(buf, zigzag_encode(value));
            }
        }
    }

    /// Decode a message window
    pub fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        let mut position = RawGridPosition::default();
        while reader.has_more() {
            let (field, wire_type) = reader.read_tag()?;
            match (field, wire_type) {
                (1, VARINT) => position.x = zigzag_decode(reader.read_varint()?),
                (2, VARINT) => position.y = zigzag_decode(reader.read_varint()?),
                (3, VARINT) => position.z = zigzag_decode(reader.read_varint()?),
                _ => reader.skip(wire_type)?,
            }
        }
        Ok(position)
    }
}

/// Wire form of a part. `part_type` is the format's only required field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPart {
    /// Part type (field 1, required)
    pub part_type: Option<u32>,
    /// Origin position (field 2)
    pub origin: Option<RawGridPosition>,
    /// Size identifier (field 3)
    pub size_id: Option<u32>,
    /// Material identifier (field 4)
    pub material_id: Option<u32>,
    /// Direction (field 5)
    pub direction: Option<RawDirection>,
    /// Hole count (field 6)
    pub length: Option<u32>,
}

impl RawPart {
    /// Wire form of a domain part, omitting default-valued fields
    pub fn from_part(part: &Part) -> Self {
        let origin = RawGridPosition::from_position(part.origin);
        Self {
            part_type: Some(part.part_type.value()),
            origin: (origin != RawGridPosition::default()).then_some(origin),
            size_id: nonzero_u32(part.size_id.value()),
            material_id: nonzero_u32(part.material_id.value()),
            direction: (part.direction != Direction::default())
                .then(|| RawDirection::from_direction(&part.direction)),
            length: nonzero_u32(part.length),
        }
    }

    /// Convert to the domain part, filling defaults for absent fields
    pub fn to_part(&self) -> Result<Part, CodecError> {
        let type_value = self.part_type.ok_or(CodecError::InvalidMessage)?;
        let part_type =
            PartType::from_value(type_value).ok_or_else(|| CodecError::UnknownEnum {
                name: "PartType",
                value: u64::from(type_value),
            })?;
        let size_value = self.size_id.unwrap_or(0);
        let size_id = SizeId::from_value(size_value).ok_or_else(|| CodecError::UnknownEnum {
            name: "SizeId",
            value: u64::from(size_value),
        })?;
        let material_value = self.material_id.unwrap_or(0);
        let material_id =
            MaterialId::from_value(material_value).ok_or_else(|| CodecError::UnknownEnum {
                name: "MaterialId",
                value: u64::from(material_value),
            })?;
        Ok(Part {
            part_type,
            origin: self.origin.unwrap_or_default().to_position(),
            direction: self
                .direction
                .as_ref()
                .map_or_else(Direction::default, RawDirection::to_direction),
            length: self.length.unwrap_or(0),
            size_id,
            material_id,
        })
    }

    /// Encoded size in bytes; fails when `part_type` is absent
    pub fn encoding_length(&self) -> Result<usize, CodecError> {
        let type_value = self.part_type.ok_or(CodecError::MissingRequired("type"))?;
        // The required type field is written even when zero
        let mut len = 1 + varint_len(u64::from(type_value));
        if let Some(origin) = &self.origin {
            let body = origin.encoding_length();
            len += 1 + varint_len(body as u64) + body;
        }
        len += varint_field_len(self.size_id.map(u64::from));
        len += varint_field_len(self.material_id.map(u64::from));
        if let Some(direction) = &self.direction {
            let body = direction.encoding_length();
            len += 1 + varint_len(body as u64) + body;
        }
        len += varint_field_len(self.length.map(u64::from));
        Ok(len)
    }

    /// Append the encoded message body to the buffer
    pub fn encode_into(&self, buf: &mut Vec<u8>) -> Result<(), CodecError> {
        let type_value = self.part_type.ok_or(CodecError::MissingRequired("type"))?;
        put_tag(buf, 1, VARINT);
        put_varint(buf, u64::from(type_value));
        if let Some(origin) = &self.origin {
            put_tag(buf, 2, LENGTH_DELIMITED);
            put_varint(buf, origin.encoding_length() as u64);
            origin.encode_into(buf);
        }
        if let Some(size_id) = self.size_id {
            put_tag(buf, 3, VARINT);
            put_varint(buf, u64::from(size_id));
        }
        if let Some(material_id) = self.material_id {
            put_tag(buf, 4, VARINT);
            put_varint(buf, u64::from(material_id));
        }
        if let Some(direction) = &self.direction {
            put_tag(buf, 5, LENGTH_DELIMITED);
            put_varint(buf, direction.encoding_length() as u64);
            direction.encode_into(buf);
        }
        if let Some(length) = self.length {
            put_tag(buf, 6, VARINT);
            put_varint(buf, u64::from(length));
        }
        Ok(())
    }

    /// Decode a message window; fails when no `type` field was observed
    pub fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        let mut part = RawPart::default();
        while reader.has_more() {
            let (field, wire_type) = reader.read_tag()?;
            match (field, wire_type) {
                (1, VARINT) => part.part_type = Some(reader.read_varint()? as u32),
                (2, LENGTH_DELIMITED) => {
                    let mut window = reader.read_message()?;
                    part.origin = Some(RawGridPosition::decode(&mut window)?);
                }
                (3, VARINT) => part.size_id = Some(reader.read_varint()? as u32),
                (4, VARINT) => part.material_id = Some(reader.read_varint()? as u32),
                (5, LENGTH_DELIMITED) => {
                    let mut window = reader.read_message()?;
                    part.direction = Some(RawDirection::decode(&mut window)?);
                }
                (6, VARINT) => part.length = Some(reader.read_varint()? as u32),
                _ => reader.skip(wire_type)?,
            }
        }
        if part.part_type.is_none() {
            return Err(CodecError::InvalidMessage);
        }
        Ok(part)
    }
}

/// Wire form of a model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawModel {
    /// The parts of the design (field 1, repeated)
    pub parts: Vec<RawPart>,
    /// Spec identifier (field 2)
    pub spec_id: Option<u32>,
}

impl RawModel {
    /// Wire form of a domain model
    pub fn from_model(model: &Model) -> Self {
        Self {
            parts: model.parts.iter().map(RawPart::from_part).collect(),
            spec_id: nonzero_u32(model.spec_id.value()),
        }
    }

    /// Convert to the domain model
    pub fn to_model(&self) -> Result<Model, CodecError> {
        let spec_value = self.spec_id.unwrap_or(0);
        let spec_id = SpecId::from_value(spec_value).ok_or_else(|| CodecError::UnknownEnum {
            name: "SpecId",
            value: u64::from(spec_value),
        })?;
        let parts = self
            .parts
            .iter()
            .map(RawPart::to_part)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Model::new(spec_id, parts))
    }

    /// Encoded size in bytes
    pub fn encoding_length(&self) -> Result<usize, CodecError> {
        let mut len = 0;
        for part in &self.parts {
            let body = part.encoding_length()?;
            len += 1 + varint_len(body as u64) + body;
        }
        len += varint_field_len(self.spec_id.map(u64::from));
        Ok(len)
    }

    /// Append the encoded message body to the buffer
    pub fn encode_into(&self, buf: &mut Vec<u8>) -> Result<(), CodecError> {
        for part in &self.parts {
            put_tag(buf, 1, LENGTH_DELIMITED);
            put_varint(buf, part.encoding_length()? as u64);
            part.encode_into(buf)?;
        }
        if let Some(spec_id) = self.spec_id {
            put_tag(buf, 2, VARINT);
            put_varint(buf, u64::from(spec_id));
        }
        Ok(())
    }

    /// Decode a message window
    pub fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        let mut model = RawModel::default();
        while reader.has_more() {
            let (field, wire_type) = reader.read_tag()?;
            match (field, wire_type) {
                (1, LENGTH_DELIMITED) => {
                    let mut window = reader.read_message()?;
                    model.parts.push(RawPart::decode(&mut window)?);
                }
                (2, VARINT) => model.spec_id = Some(reader.read_varint()? as u32),
                _ => reader.skip(wire_type)?,
            }
        }
        Ok(model)
    }
}

/// Encode a model to wire bytes.
///
/// The output size is computed in a pre-pass so the buffer is allocated
/// exactly once.
pub fn encode_model(model: &Model) -> Result<Vec<u8>, CodecError> {
    let raw = RawModel::from_model(model);
    let len = raw.encoding_length()?;
    let mut buf = Vec::with_capacity(len);
    raw.encode_into(&mut buf)?;
    debug_assert_eq!(buf.len(), len);
    Ok(buf)
}

/// Decode a model from wire bytes
pub fn decode_model(bytes: &[u8]) -> Result<Model, CodecError> {
    let mut reader = Reader::new(bytes);
    RawModel::decode(&mut reader)?.to_model()
}
