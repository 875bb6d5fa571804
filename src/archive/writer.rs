//! Последовательная запись архива.
//!
//! Писатель кодирует значения и немедленно отправляет их записи в
//! приёмник, строго в порядке вызовов. Уже добавленные записи нельзя
//! переписать или удалить: архив append-only на всём времени жизни
//! одного писателя.

use std::{borrow::Borrow, io::Write};

use tracing::{debug, trace};

use crate::{codec::write_value, error::EncodeError, Value};

/// Писатель архива поверх произвольного байтового приёмника.
///
/// Приёмником может быть растущий буфер в памяти, файл или любой другой
/// [`Write`] — например, поток компрессора. Писатель не хранит никакого
/// состояния сверх счётчика записей: вся буферизация — дело приёмника.
pub struct ArchiveWriter<W: Write> {
    sink: W,
    records_written: u64,
}

impl<W: Write> ArchiveWriter<W> {
    /// Создаёт писатель, принимая владение приёмником.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            records_written: 0,
        }
    }

    /// Кодирует одно значение и сразу пишет его запись в приёмник.
    pub fn append(&mut self, value: &Value) -> Result<(), EncodeError> {
        write_value(&mut self.sink, value)?;
        self.records_written += 1;
        trace!(records = self.records_written, "appended record");
        Ok(())
    }

    /// Добавляет все значения последовательности в порядке её итерации.
    ///
    /// Байтовый результат идентичен вызову [`append`](Self::append) для
    /// каждого элемента по очереди; последовательность может быть ленивой.
    pub fn extend<I>(&mut self, values: I) -> Result<(), EncodeError>
    where
        I: IntoIterator,
        I::Item: Borrow<Value>,
    {
        for value in values {
            self.append(value.borrow())?;
        }
        Ok(())
    }

    /// Количество записей, добавленных этим писателем.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Ссылка на приёмник (например, для инспекции буфера между записями).
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Сбрасывает буферы приёмника и возвращает его.
    ///
    /// Потребляет писатель, так что закрыть архив дважды не получится.
    /// Если писатель просто уронить без `finish`, приёмник освободится
    /// обычным Drop; для файлового `BufWriter` это сброс без контроля
    /// ошибок, поэтому явный `finish` предпочтительнее.
    pub fn finish(mut self) -> Result<W, EncodeError> {
        self.sink.flush()?;
        debug!(records = self.records_written, "archive finished");
        Ok(self.sink)
    }
}
