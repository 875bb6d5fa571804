//! Высокоуровневые операции над архивом целиком.
//!
//! Буферные варианты (`dumpb`/`loadb`/`openb`) работают с памятью,
//! файловые (`dump`/`load`/`create`/`open`) — с путями; семантика
//! идентична. Ленивые варианты (`openb`/`open`) отдают ридер напрямую:
//! итерацию и закрытие контролирует вызывающий код.

use std::{
    borrow::Borrow,
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use tracing::debug;

use crate::{
    archive::{ArchiveReader, ArchiveWriter},
    error::{DecodeError, EncodeError},
    Value,
};

/// Сериализует последовательность значений в байтовый буфер.
pub fn dumpb<I>(values: I) -> Result<Vec<u8>, EncodeError>
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
{
    let mut writer = ArchiveWriter::new(Vec::new());
    writer.extend(values)?;
    writer.finish()
}

/// Читает все записи архива из буфера в вектор, в порядке записи.
pub fn loadb(bytes: &[u8]) -> Result<Vec<Value>, DecodeError> {
    openb(bytes).collect()
}

/// Открывает ленивый ридер поверх буфера.
pub fn openb(bytes: &[u8]) -> ArchiveReader<&[u8]> {
    ArchiveReader::new(bytes)
}

/// Создаёт файл и записывает в него последовательность значений.
pub fn dump<I, P>(values: I, path: P) -> Result<(), EncodeError>
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
    P: AsRef<Path>,
{
    let mut writer = create(&path)?;
    writer.extend(values)?;
    let records = writer.records_written();
    writer.finish()?;
    debug!(path = %path.as_ref().display(), records, "archive dumped to file");
    Ok(())
}

/// Читает все записи архива из файла в вектор.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Value>, DecodeError> {
    open(path)?.collect()
}

/// Создаёт файл и возвращает писатель поверх него.
///
/// Существующий файл усекается: архив всегда пишется с нуля одним
/// писателем, дозапись в чужой архив не поддерживается.
pub fn create<P: AsRef<Path>>(path: P) -> Result<ArchiveWriter<BufWriter<File>>, EncodeError> {
    let file = File::create(path)?;
    Ok(ArchiveWriter::new(BufWriter::new(file)))
}

/// Открывает файл и возвращает ленивый ридер его записей.
pub fn open<P: AsRef<Path>>(path: P) -> Result<ArchiveReader<BufReader<File>>, DecodeError> {
    let file = File::open(path)?;
    Ok(ArchiveReader::new(BufReader::new(file)))
}
