//! Потоковый контейнер архива: последовательность записей без
//! какого-либо заголовка или маркера конца.
//!
//! Архив — это просто конкатенация записей кодека в порядке добавления.
//! Конец архива определяется исключительно концом источника на границе
//! записи; конец источника внутри записи означает усечённый архив.
//!
//! - [`writer`] — append-only запись поверх [`std::io::Write`]
//! - [`reader`] — ленивое чтение поверх [`std::io::Read`]

pub mod reader;
pub mod writer;

pub use reader::ArchiveReader;
pub use writer::ArchiveWriter;
