//! Десериализация значений `Value` из бинарного формата.
//!
//! Декодер потребляет ровно байты одной записи и никогда не читает дальше
//! её логического конца. Курсору достаточно стоять на начале любой записи:
//! никакого внешнего контекста, словарей или обратных ссылок формат не
//! предусматривает.

use std::io::{self, Read};

use byteorder::{BigEndian, ReadBytesExt};

use super::tags::{
    TAG_ARRAY, TAG_FALSE, TAG_FLOAT, TAG_INT, TAG_MAP, TAG_NULL, TAG_STR, TAG_TRUE,
};
use crate::{error::DecodeError, Value};

/// Верхняя граница предварительной аллокации по длине из потока.
/// Сама длина не ограничивается — буфер дорастёт по мере чтения,
/// но заявленной в заголовке цифре мы заранее не верим.
const PREALLOC_LIMIT: usize = 1 << 20;

/// Десериализует одну запись [`Value`] из потока, рекурсивно для
/// вложенных массивов и словарей.
pub fn read_value<R: Read>(r: &mut R) -> Result<Value, DecodeError> {
    let tag = read_u8_ctx(r, "reading type tag")?;
    read_value_of_tag(r, tag)
}

/// Декодирует ровно одну запись из среза; хвостовые байты — ошибка.
pub fn decode_from_slice(bytes: &[u8]) -> Result<Value, DecodeError> {
    let mut cursor = bytes;
    let value = read_value(&mut cursor)?;
    if !cursor.is_empty() {
        return Err(DecodeError::TrailingBytes {
            remaining: cursor.len(),
        });
    }
    Ok(value)
}

/// Читает полезную нагрузку записи, тег которой уже снят с потока.
pub(crate) fn read_value_of_tag<R: Read>(r: &mut R, tag: u8) -> Result<Value, DecodeError> {
    match tag {
        TAG_NULL => Ok(Value::Null),
        TAG_FALSE => Ok(Value::Bool(false)),
        TAG_TRUE => Ok(Value::Bool(true)),
        TAG_INT => {
            let i = r
                .read_i64::<BigEndian>()
                .map_err(|e| map_eof(e, "reading integer payload"))?;
            Ok(Value::Int(i))
        }
        TAG_FLOAT => {
            let f = r
                .read_f64::<BigEndian>()
                .map_err(|e| map_eof(e, "reading float payload"))?;
            Ok(Value::Float(f))
        }
        TAG_STR => Ok(Value::Str(read_string(r)?)),
        TAG_ARRAY => {
            let n = read_len(r, "reading array length")?;
            let mut items = Vec::with_capacity(n.min(PREALLOC_LIMIT));
            for _ in 0..n {
                items.push(read_value(r)?);
            }
            Ok(Value::Array(items))
        }
        TAG_MAP => {
            let n = read_len(r, "reading map length")?;
            let mut entries = Vec::with_capacity(n.min(PREALLOC_LIMIT));
            for _ in 0..n {
                let key_tag = read_u8_ctx(r, "reading map key tag")?;
                if key_tag != TAG_STR {
                    return Err(DecodeError::ExpectedStringKey { got: key_tag });
                }
                let key = read_string(r)?;
                let val = read_value(r)?;
                entries.push((key, val));
            }
            Ok(Value::Map(entries))
        }
        other => Err(DecodeError::UnknownTag(other)),
    }
}

/// Строковая нагрузка: длина u32 BE, затем столько же байт UTF-8.
fn read_string<R: Read>(r: &mut R) -> Result<String, DecodeError> {
    let len = read_len(r, "reading string length")?;
    let bytes = read_bytes(r, len, "reading string bytes")?;
    Ok(String::from_utf8(bytes)?)
}

/// Читает ровно `len` байт в новый буфер.
fn read_bytes<R: Read>(
    r: &mut R,
    len: usize,
    context: &'static str,
) -> Result<Vec<u8>, DecodeError> {
    let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
    let got = r.take(len as u64).read_to_end(&mut buf)?;
    if got < len {
        return Err(DecodeError::UnexpectedEof { context });
    }
    Ok(buf)
}

fn read_u8_ctx<R: Read>(r: &mut R, context: &'static str) -> Result<u8, DecodeError> {
    r.read_u8().map_err(|e| map_eof(e, context))
}

fn read_len<R: Read>(r: &mut R, context: &'static str) -> Result<usize, DecodeError> {
    let n = r
        .read_u32::<BigEndian>()
        .map_err(|e| map_eof(e, context))?;
    Ok(n as usize)
}

fn map_eof(e: io::Error, context: &'static str) -> DecodeError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        DecodeError::UnexpectedEof { context }
    } else {
        DecodeError::Io(e)
    }
}
