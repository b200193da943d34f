//! ROS 1 deserializer over a borrowed byte slice.

use byteorder::{ByteOrder, LittleEndian};
use serde::de::{
    self, DeserializeSeed, EnumAccess, IntoDeserializer, MapAccess, SeqAccess, VariantAccess,
    Visitor,
};

use crate::error::{Error, Result};

/// Deserializer reading the ROS 1 wire representation.
pub struct Ros1Deserializer<'de> {
    input: &'de [u8],
    consumed: usize,
}

impl<'de> Ros1Deserializer<'de> {
    #[inline]
    pub fn new(input: &'de [u8]) -> Self {
        Self { input, consumed: 0 }
    }

    /// How many bytes of input have been consumed.
    #[inline]
    pub fn bytes_consumed(&self) -> usize {
        self.consumed
    }

    #[inline]
    fn next_bytes(&mut self, count: usize) -> Result<&'de [u8]> {
        if count > self.input.len() {
            return Err(Error::UnexpectedEof);
        }
        let (head, tail) = self.input.split_at(count);
        self.input = tail;
        self.consumed += count;
        Ok(head)
    }

    #[inline]
    fn next_u8(&mut self) -> Result<u8> {
        Ok(self.next_bytes(1)?[0])
    }

    #[inline]
    fn next_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.next_bytes(4)?))
    }

    #[inline]
    fn next_len(&mut self) -> Result<usize> {
        Ok(self.next_u32()? as usize)
    }
}

/// Deserialize a value, returning it with the number of bytes consumed.
#[inline]
pub fn from_bytes<'de, T>(input: &'de [u8]) -> Result<(T, usize)>
where
    T: serde::Deserialize<'de>,
{
    let mut deserializer = Ros1Deserializer::new(input);
    let value = T::deserialize(&mut deserializer)?;
    Ok((value, deserializer.consumed))
}

/// Deserialize a value that must occupy the whole input.
pub fn from_slice<'de, T>(input: &'de [u8]) -> Result<T>
where
    T: serde::Deserialize<'de>,
{
    let (value, consumed) = from_bytes(input)?;
    match input.len() - consumed {
        0 => Ok(value),
        trailing => Err(Error::TrailingBytes(trailing)),
    }
}

impl<'de> de::Deserializer<'de> for &mut Ros1Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::NotSelfDescribing)
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.next_u8()? {
            0 => visitor.visit_bool(false),
            1 => visitor.visit_bool(true),
            x => Err(Error::InvalidBool(x)),
        }
    }

    fn deserialize_i8<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i8(self.next_u8()? as i8)
    }

    fn deserialize_u8<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u8(self.next_u8()?)
    }

    fn deserialize_i16<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i16(LittleEndian::read_i16(self.next_bytes(2)?))
    }

    fn deserialize_u16<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u16(LittleEndian::read_u16(self.next_bytes(2)?))
    }

    fn deserialize_i32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i32(LittleEndian::read_i32(self.next_bytes(4)?))
    }

    fn deserialize_u32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u32(self.next_u32()?)
    }

    fn deserialize_i64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i64(LittleEndian::read_i64(self.next_bytes(8)?))
    }

    fn deserialize_u64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u64(LittleEndian::read_u64(self.next_bytes(8)?))
    }

    fn deserialize_u128<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u128(LittleEndian::read_u128(self.next_bytes(16)?))
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_f32(LittleEndian::read_f32(self.next_bytes(4)?))
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_f64(LittleEndian::read_f64(self.next_bytes(8)?))
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let codepoint = self.next_u32()?;
        match char::from_u32(codepoint) {
            Some(c) => visitor.visit_char(c),
            None => Err(Error::InvalidChar(codepoint)),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let len = self.next_len()?;
        let bytes = self.next_bytes(len)?;
        visitor.visit_borrowed_str(std::str::from_utf8(bytes)?)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let len = self.next_len()?;
        visitor.visit_borrowed_bytes(self.next_bytes(len)?)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let len = self.next_len()?;
        visitor.visit_byte_buf(self.next_bytes(len)?.to_vec())
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.next_u8()? {
            0 => visitor.visit_none(),
            1 => visitor.visit_some(self),
            tag => Err(Error::InvalidOptionTag(tag)),
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let len = self.next_len()?;
        visitor.visit_seq(SequenceHelper::new(self, len))
    }

    /// Fixed-size arrays carry no length on the wire.
    fn deserialize_tuple<V>(self, len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_seq(SequenceHelper::new(self, len))
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_seq(SequenceHelper::new(self, len))
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let len = self.next_len()?;
        visitor.visit_map(SequenceHelper::new(self, len))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_seq(SequenceHelper::new(self, fields.len()))
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_enum(EnumerationHelper { de: self })
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_u32(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_any(visitor)
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

struct EnumerationHelper<'a, 'de> {
    de: &'a mut Ros1Deserializer<'de>,
}

impl<'de> EnumAccess<'de> for EnumerationHelper<'_, 'de> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: DeserializeSeed<'de>,
    {
        let tag = self.de.next_u32()?;
        let value: Result<_> = seed.deserialize(tag.into_deserializer());
        Ok((value?, self))
    }
}

impl<'de> VariantAccess<'de> for EnumerationHelper<'_, 'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Ok(())
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: DeserializeSeed<'de>,
    {
        seed.deserialize(self.de)
    }

    fn tuple_variant<V>(self, len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_tuple(self.de, len, visitor)
    }

    fn struct_variant<V>(self, fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_tuple(self.de, fields.len(), visitor)
    }
}

struct SequenceHelper<'a, 'de> {
    de: &'a mut Ros1Deserializer<'de>,
    remaining: usize,
}

impl<'a, 'de> SequenceHelper<'a, 'de> {
    fn new(de: &'a mut Ros1Deserializer<'de>, len: usize) -> Self {
        Self { de, remaining: len }
    }
}

impl<'de> SeqAccess<'de> for SequenceHelper<'_, 'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: DeserializeSeed<'de>,
    {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        seed.deserialize(&mut *self.de).map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        // Lengths come off the wire, so cap the hint to what the input could hold.
        Some(self.remaining.min(self.de.input.len()))
    }
}

impl<'de> MapAccess<'de> for SequenceHelper<'_, 'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: DeserializeSeed<'de>,
    {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        seed.deserialize(&mut *self.de).map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: DeserializeSeed<'de>,
    {
        seed.deserialize(&mut *self.de)
    }
}
