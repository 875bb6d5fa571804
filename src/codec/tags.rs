//! Однобайтовые теги типов бинарного формата.
//!
//! Тег — первый байт каждой записи; по нему декодер выбирает способ
//! разбора полезной нагрузки. Значения 0x08..=0xFF свободны.

/// Null (без полезной нагрузки)
pub const TAG_NULL: u8 = 0x00;
/// Логическое «ложь» (без полезной нагрузки)
pub const TAG_FALSE: u8 = 0x01;
/// Логическое «истина» (без полезной нагрузки)
pub const TAG_TRUE: u8 = 0x02;
/// Целое число (i64)
pub const TAG_INT: u8 = 0x03;
/// Число с плавающей точкой (f64)
pub const TAG_FLOAT: u8 = 0x04;
/// Строка UTF-8
pub const TAG_STR: u8 = 0x05;
/// Массив произвольных значений
pub const TAG_ARRAY: u8 = 0x06;
/// Словарь: ключ — строка, значение — произвольное
pub const TAG_MAP: u8 = 0x07;
