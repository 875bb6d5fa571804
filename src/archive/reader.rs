//! Ленивое последовательное чтение архива.
//!
//! Ридер читает из источника ровно столько байт, сколько нужно для
//! очередной записи, поэтому пиковая память ограничена размером одной
//! записи, а не всего архива.

use std::io::{self, Read};

use tracing::trace;

use crate::{
    codec::decode::read_value_of_tag,
    error::DecodeError,
    Value,
};

/// Итератор по записям архива поверх произвольного байтового источника.
///
/// Движение только вперёд: курсор не перематывается, повторное чтение
/// требует нового ридера поверх источника с его начала. После ошибки или
/// штатного конца итерация завершена насовсем.
pub struct ArchiveReader<R: Read> {
    source: R,
    records_read: u64,
    done: bool,
}

impl<R: Read> ArchiveReader<R> {
    /// Создаёт ридер, принимая владение источником.
    pub fn new(source: R) -> Self {
        Self {
            source,
            records_read: 0,
            done: false,
        }
    }

    /// Количество успешно прочитанных записей.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Потребляет ридер и возвращает источник.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Снимает с потока первый байт следующей записи.
    ///
    /// `Ok(None)` — источник закончился на границе записи, это штатный
    /// конец архива.
    fn next_tag(&mut self) -> Result<Option<u8>, DecodeError> {
        let mut tag = [0u8; 1];
        loop {
            match self.source.read(&mut tag) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(tag[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(DecodeError::Io(e)),
            }
        }
    }

    /// Конец источника внутри записи — признак усечённого архива.
    fn mark_truncated(&self, e: DecodeError) -> DecodeError {
        match e {
            DecodeError::UnexpectedEof { context } => DecodeError::TruncatedArchive {
                records_read: self.records_read,
                context,
            },
            other => other,
        }
    }
}

impl<R: Read> Iterator for ArchiveReader<R> {
    type Item = Result<Value, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let tag = match self.next_tag() {
            Ok(Some(tag)) => tag,
            Ok(None) => {
                self.done = true;
                trace!(records = self.records_read, "archive exhausted");
                return None;
            }
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        match read_value_of_tag(&mut self.source, tag) {
            Ok(value) => {
                self.records_read += 1;
                Some(Ok(value))
            }
            Err(e) => {
                self.done = true;
                Some(Err(self.mark_truncated(e)))
            }
        }
    }
}
