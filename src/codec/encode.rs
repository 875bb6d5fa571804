//! Сериализация значений `Value` в бинарный формат.
//!
//! Запись — это однобайтовый тег и полезная нагрузка: фиксированной ширины
//! для скаляров, с префиксом длины для строк и контейнеров. Кодирование
//! чисто рекурсивное: составное значение — конкатенация собственного
//! заголовка и записей его детей, без глобального состояния.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use super::tags::{
    TAG_ARRAY, TAG_FALSE, TAG_FLOAT, TAG_INT, TAG_MAP, TAG_NULL, TAG_STR, TAG_TRUE,
};
use crate::{error::EncodeError, Value};

/// Записывает одну запись `Value` в поток.
pub fn write_value<W: Write>(w: &mut W, v: &Value) -> Result<(), EncodeError> {
    match v {
        Value::Null => w.write_u8(TAG_NULL)?,
        Value::Bool(false) => w.write_u8(TAG_FALSE)?,
        Value::Bool(true) => w.write_u8(TAG_TRUE)?,
        Value::Int(i) => {
            w.write_u8(TAG_INT)?;
            w.write_i64::<BigEndian>(*i)?;
        }
        Value::Float(f) => {
            w.write_u8(TAG_FLOAT)?;
            w.write_f64::<BigEndian>(*f)?;
        }
        Value::Str(s) => {
            w.write_u8(TAG_STR)?;
            write_len(w, s.len(), "string")?;
            w.write_all(s.as_bytes())?;
        }
        Value::Array(items) => {
            w.write_u8(TAG_ARRAY)?;
            write_len(w, items.len(), "array")?;
            for item in items {
                write_value(w, item)?;
            }
        }
        Value::Map(entries) => {
            w.write_u8(TAG_MAP)?;
            write_len(w, entries.len(), "map")?;
            for (key, val) in entries {
                // ключ — полноценная строковая запись, со своим тегом
                w.write_u8(TAG_STR)?;
                write_len(w, key.len(), "map key")?;
                w.write_all(key.as_bytes())?;
                write_value(w, val)?;
            }
        }
    }
    Ok(())
}

/// Кодирует одну запись в свежий буфер.
pub fn encode_to_vec(v: &Value) -> Result<Vec<u8>, EncodeError> {
    let cap = usize::try_from(encoded_len(v)).unwrap_or(0);
    let mut buf = Vec::with_capacity(cap);
    write_value(&mut buf, v)?;
    Ok(buf)
}

/// Точный размер записи в байтах, без выполнения записи.
pub fn encoded_len(v: &Value) -> u64 {
    match v {
        Value::Null | Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 1 + 8,
        Value::Str(s) => 1 + 4 + s.len() as u64,
        Value::Array(items) => 1 + 4 + items.iter().map(encoded_len).sum::<u64>(),
        Value::Map(entries) => {
            1 + 4
                + entries
                    .iter()
                    .map(|(k, v)| 1 + 4 + k.len() as u64 + encoded_len(v))
                    .sum::<u64>()
        }
    }
}

/// Длина или количество элементов: u32 big-endian.
fn write_len<W: Write>(w: &mut W, len: usize, what: &'static str) -> Result<(), EncodeError> {
    let len32 =
        u32::try_from(len).map_err(|_| EncodeError::ValueOutOfRange { what, len })?;
    w.write_u32::<BigEndian>(len32)?;
    Ok(())
}
