//! Кодек бинарного формата: сериализация и десериализация `Value`.
//!
//! ## Формат записи
//!
//! Запись самодостаточна: её длина полностью определяется собственным
//! заголовком и рекурсивно — заголовками детей.
//!
//! | тег  | тип          | полезная нагрузка                         |
//! |------|--------------|-------------------------------------------|
//! | 0x00 | Null         | нет                                       |
//! | 0x01 | Bool(false)  | нет                                       |
//! | 0x02 | Bool(true)   | нет                                       |
//! | 0x03 | Int          | i64, 8 байт big-endian                    |
//! | 0x04 | Float        | f64, 8 байт big-endian                    |
//! | 0x05 | Str          | длина u32 BE + байты UTF-8                |
//! | 0x06 | Array        | количество u32 BE + записи элементов      |
//! | 0x07 | Map          | количество u32 BE + пары (Str, запись)    |
//!
//! ```
//! use zpak::codec::{read_value, write_value};
//! use zpak::Value;
//!
//! let v = Value::Array(vec![Value::Int(1), Value::Str("hi".to_string())]);
//! let mut buf = Vec::new();
//! write_value(&mut buf, &v)?;
//!
//! let mut cursor = &buf[..];
//! assert_eq!(read_value(&mut cursor)?, v);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Модули
//!
//! - [`encode`] — сериализация значений в бинарный формат
//! - [`decode`] — десериализация из бинарного формата
//! - [`tags`] — константы тегов для типов данных

pub mod decode;
pub mod encode;
pub mod tags;

// Публичный экспорт функций кодека, чтобы упростить доступ к ним
// из внешнего кода.
pub use decode::{decode_from_slice, read_value};
pub use encode::{encode_to_vec, encoded_len, write_value};
pub use tags::*;
