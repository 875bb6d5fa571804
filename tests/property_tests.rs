//! Property-based tests для кодека и архива zpak
//!
//! Эти тесты генерируют тысячи случайных значений Value и проверяют,
//! что encode/decode и dump/load работают корректно во всех случаях.

use proptest::prelude::*;
use zpak::{
    decode_from_slice, dumpb, encode_to_vec, encoded_len, loadb, openb, ArchiveWriter,
    DecodeError,
};

use generators::*;

/// Базовая настройка proptest — количество итераций.
const PROPTEST_CASES: u32 = 512;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: PROPTEST_CASES,
        ..ProptestConfig::default()
    })]

    /// decode(encode(v)) == v для любого представимого значения.
    #[test]
    fn prop_single_record_roundtrip(v in value_strategy()) {
        let bytes = encode_to_vec(&v).unwrap();
        let back = decode_from_slice(&bytes).unwrap();
        prop_assert_eq!(back, v);
    }

    /// Расчётный размер записи совпадает с фактическим.
    #[test]
    fn prop_encoded_len_matches(v in value_strategy()) {
        let bytes = encode_to_vec(&v).unwrap();
        prop_assert_eq!(bytes.len() as u64, encoded_len(&v));
    }

    /// load(dump(S)) == S и как вектор, и через ленивый ридер.
    #[test]
    fn prop_archive_roundtrip(values in prop::collection::vec(value_strategy(), 0..12)) {
        let bytes = dumpb(&values).unwrap();

        let loaded = loadb(&bytes).unwrap();
        prop_assert_eq!(&loaded, &values);

        let streamed: Result<Vec<_>, _> = openb(&bytes).collect();
        prop_assert_eq!(streamed.unwrap(), values);
    }

    /// extend(S) байт-в-байт совпадает с последовательными append.
    #[test]
    fn prop_extend_equals_append(values in prop::collection::vec(value_strategy(), 0..8)) {
        let mut by_extend = ArchiveWriter::new(Vec::new());
        by_extend.extend(&values).unwrap();

        let mut by_append = ArchiveWriter::new(Vec::new());
        for v in &values {
            by_append.append(v).unwrap();
        }

        prop_assert_eq!(by_extend.finish().unwrap(), by_append.finish().unwrap());
    }

    /// Срез на границе записи — корректный архив-префикс.
    #[test]
    fn prop_cut_at_boundary_is_valid_prefix(
        values in prop::collection::vec(value_strategy(), 1..6),
        cut in any::<prop::sample::Index>(),
    ) {
        let keep = cut.index(values.len() + 1);
        let bytes = dumpb(&values).unwrap();

        let prefix_len: u64 = values[..keep].iter().map(encoded_len).sum();
        let loaded = loadb(&bytes[..prefix_len as usize]).unwrap();
        prop_assert_eq!(loaded, values[..keep].to_vec());
    }

    /// Срез внутри записи всегда диагностируется как усечённый архив.
    #[test]
    fn prop_cut_inside_record_is_detected(
        values in prop::collection::vec(value_strategy(), 1..6),
        cut in any::<prop::sample::Index>(),
    ) {
        let bytes = dumpb(&values).unwrap();
        prop_assume!(!bytes.is_empty());

        // границы записей — допустимые точки усечения, их пропускаем
        let mut boundaries = std::collections::HashSet::new();
        let mut offset = 0u64;
        for v in &values {
            boundaries.insert(offset as usize);
            offset += encoded_len(v);
        }
        let cut = cut.index(bytes.len());
        prop_assume!(!boundaries.contains(&cut));

        let err = loadb(&bytes[..cut]).unwrap_err();
        prop_assert!(matches!(err, DecodeError::TruncatedArchive { .. }), "unexpected error: {:?}", err);
    }
}
