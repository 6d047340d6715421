//! ByteList integration tests: round-trips, write modes, overruns, trims.

use chrono::{NaiveDate, NaiveDateTime, Timelike, Utc};
use oxibyte_core::{ByteList, ByteListConfig, ByteListError, Endianness, WriteMode};

fn now_to_second() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).expect("zero nanoseconds is valid")
}

#[test]
fn test_constructors() {
    let empty = ByteList::new();
    assert_eq!(empty.len(), 0);
    assert!(empty.as_slice().is_empty());

    let text = ByteList::try_from("hello").unwrap();
    assert_eq!(text.len(), 7);

    let raw = ByteList::from(vec![1, 2, 3, 4, 5]);
    assert_eq!(raw.len(), 5);

    let slice: &[u8] = &[1, 2, 3, 4];
    let raw = ByteList::from(slice);
    assert_eq!(raw.len(), 4);
    assert_eq!(raw.as_ref(), slice);
}

#[test]
fn test_roundtrip_every_primitive() {
    for endianness in [Endianness::Little, Endianness::Big] {
        let config = ByteListConfig::DEFAULT.with_endianness(endianness);
        let date = NaiveDate::from_ymd_opt(2019, 7, 10)
            .unwrap()
            .and_hms_opt(8, 30, 15)
            .unwrap();

        let mut b = ByteList::with_config(config);
        let m = WriteMode::Overwrite;
        b.write_u8(0xAB, m);
        b.write_bool(true, m);
        b.write_i8(-7, m).unwrap();
        b.write_i16(-12345, m);
        b.write_u16(54321, m);
        b.write_i32(-123_456_789, m);
        b.write_u32(0xDEAD_BEEF, m);
        b.write_f32(3.25, m);
        b.write_f64(-1.0e-300, m);
        b.write_date(Some(date), m).unwrap();
        b.write_string("ünïcödé", m).unwrap();
        b.write_fixed_string("abc", 6, m);
        b.write_byte_array(&[9, 8, 7], m).unwrap();
        assert_eq!(b.cursor(), b.len());

        b.set_cursor(0);
        assert_eq!(b.read_u8().unwrap(), 0xAB);
        assert!(b.read_bool().unwrap());
        assert_eq!(b.read_i8().unwrap(), -7);
        assert_eq!(b.read_i16().unwrap(), -12345);
        assert_eq!(b.read_u16().unwrap(), 54321);
        assert_eq!(b.read_i32().unwrap(), -123_456_789);
        assert_eq!(b.read_u32().unwrap(), 0xDEAD_BEEF);
        assert_eq!(b.read_f32().unwrap(), 3.25);
        assert_eq!(b.read_f64().unwrap(), -1.0e-300);
        assert_eq!(b.read_date(), Some(date));
        assert_eq!(b.read_string().unwrap(), "ünïcödé");
        assert_eq!(b.read_fixed_string(6).unwrap(), "abc");
        assert_eq!(b.read_byte_array().unwrap(), vec![9, 8, 7]);
        assert_eq!(b.remaining(), 0);
    }
}

#[test]
fn test_zero_values() {
    let mut c = ByteList::new();
    c.write_i16(0, WriteMode::Overwrite);
    c.write_u32(0, WriteMode::Overwrite);
    c.write_f32(0.0, WriteMode::Overwrite);
    c.write_f64(0.0, WriteMode::Overwrite);
    c.set_cursor(0);
    assert_eq!(c.read_i16().unwrap(), 0);
    assert_eq!(c.read_u32().unwrap(), 0);
    assert_eq!(c.read_f32().unwrap(), 0.0);
    assert_eq!(c.read_f64().unwrap(), 0.0);
}

#[test]
fn test_date_after_other_data() {
    let date = now_to_second();
    let mut a = ByteList::new();
    for byte in 1..=4 {
        a.write_u8(byte, WriteMode::Overwrite);
    }
    a.write_date(Some(date), WriteMode::Overwrite).unwrap();

    a.set_cursor(0);
    for byte in 1..=4 {
        assert_eq!(a.read_u8().unwrap(), byte);
    }
    assert_eq!(a.read_date(), Some(date));
}

#[test]
fn test_date_insert_big_endian() {
    let first = now_to_second();
    let second = first - chrono::Duration::days(1);

    let mut b = ByteList::new();
    b.write_date(Some(first), WriteMode::Overwrite).unwrap();
    b.set_little_endian(false);
    b.set_cursor(0);
    b.write_date(Some(second), WriteMode::Insert).unwrap();

    b.set_cursor(0);
    assert_eq!(b.read_date(), Some(second));
    assert_eq!(b.read_date(), Some(first));
}

#[test]
fn test_insert_shifts_tail() {
    let original = [10u8, 20, 30, 40, 50];
    let mut b = ByteList::from_bytes(&original);
    b.set_cursor(2);
    b.write_u32(0x0102_0304, WriteMode::Insert);

    assert_eq!(b.len(), original.len() + 4);
    assert_eq!(b.cursor(), 2 + 4);
    assert_eq!(&b.as_slice()[..2], &original[..2]);
    assert_eq!(&b.as_slice()[2..6], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&b.as_slice()[6..], &original[2..]);
}

#[test]
fn test_overwrite_keeps_length() {
    let mut b = ByteList::from_bytes(&[0; 8]);
    b.set_cursor(2);
    b.write_u16(0xFFFF, WriteMode::Overwrite);
    assert_eq!(b.len(), 8);
    assert_eq!(b.cursor(), 4);
    assert_eq!(b.as_slice(), &[0, 0, 0xFF, 0xFF, 0, 0, 0, 0]);
}

#[test]
fn test_overwrite_straddling_end_extends() {
    let mut b = ByteList::from_bytes(&[0; 3]);
    b.set_cursor(1);
    b.write_u32(0xAABB_CCDD, WriteMode::Overwrite);
    assert_eq!(b.len(), 5);
    assert_eq!(b.cursor(), 5);
}

#[test]
fn test_overrun_boundaries() {
    let mut bytes = ByteList::from_bytes(&[1, 0, 0, 0]);
    assert_eq!(bytes.read_i32().unwrap(), 1);
    let err = bytes.read_i32().unwrap_err();
    assert_eq!(
        err,
        ByteListError::BufferOverrun {
            position: 4,
            needed: 4,
            available: 0,
        }
    );

    let mut bytes = ByteList::from_bytes(&[1, 0]);
    assert_eq!(bytes.read_i16().unwrap(), 1);
    assert!(bytes.read_i16().unwrap_err().is_overrun());

    let mut bytes = ByteList::from_bytes(&[1, 0]);
    assert_eq!(bytes.read_u16().unwrap(), 1);
    assert!(bytes.read_u16().unwrap_err().is_overrun());

    let mut bytes = ByteList::from_bytes(&[1, 0, 0, 0]);
    assert_eq!(bytes.read_u32().unwrap(), 1);
    assert!(bytes.read_u32().unwrap_err().is_overrun());

    let mut bytes = ByteList::from_bytes(&[1]);
    assert!(bytes.read_bool().unwrap());
    assert!(bytes.read_bool().unwrap_err().is_overrun());

    let mut bytes = ByteList::from_bytes(&[1]);
    assert_eq!(bytes.read_i8().unwrap(), 1);
    assert!(bytes.read_i8().unwrap_err().is_overrun());

    let mut bytes = ByteList::from_bytes(&[0, 0, 0, 0]);
    assert_eq!(bytes.read_f32().unwrap(), 0.0);
    assert!(bytes.read_f32().unwrap_err().is_overrun());

    let mut bytes = ByteList::from_bytes(&[0; 8]);
    assert_eq!(bytes.read_f64().unwrap(), 0.0);
    assert!(bytes.read_f64().unwrap_err().is_overrun());
}

#[test]
fn test_failed_read_keeps_cursor() {
    let mut bytes = ByteList::from_bytes(&[1, 2, 3]);
    bytes.set_cursor(1);
    assert!(bytes.read_u32().is_err());
    assert_eq!(bytes.cursor(), 1);
    assert_eq!(bytes.read_u16().unwrap(), 0x0302);
}

#[test]
fn test_peek_past_length_with_spare_capacity() {
    let mut bytes = ByteList::new();
    bytes.write_u8(1, WriteMode::Overwrite);
    assert_eq!(bytes.len(), 1);
    assert_eq!(bytes.capacity(), 100);

    bytes.set_cursor(0);
    assert_eq!(bytes.peek_u8(0).unwrap(), 1);
    assert_eq!(bytes.read_u8().unwrap(), 1);
    assert!(bytes.peek_u8(0).unwrap_err().is_overrun());
}

#[test]
fn test_trim_left_symmetry() {
    let original = [1u8, 2, 3, 4, 5, 6];
    let mut bytes = ByteList::from_bytes(&original);
    let head = bytes.trim_left(2);
    assert_eq!(bytes.len(), 4);

    bytes.set_cursor(0);
    bytes.insert_list(&head);
    assert_eq!(bytes.as_slice(), &original);
    assert_eq!(bytes.len(), original.len());
}

#[test]
fn test_trim_right_symmetry() {
    let original = [1u8, 2, 3, 4, 5, 6];
    let mut bytes = ByteList::from_bytes(&original);
    let tail = bytes.trim_right(2);
    assert_eq!(tail.as_slice(), &[5, 6]);

    bytes.concat_list(&tail);
    assert_eq!(bytes.as_slice(), &original);
}

#[test]
fn test_trim_clamps_count() {
    let mut bytes = ByteList::from_bytes(&[1, 2, 3, 4]);
    let head = bytes.trim_left(1);
    assert_eq!(head.as_slice(), &[1]);
    assert_eq!(bytes.peek_u8(0).unwrap(), 2);

    let rest = bytes.trim_left(40);
    assert_eq!(rest.len(), 3);
    assert_eq!(bytes.cursor(), 0);
    assert_eq!(bytes.len(), 0);
}

#[test]
fn test_trim_result_is_independent() {
    let mut bytes = ByteList::from_bytes(&[1, 2, 3, 4]);
    let mut head = bytes.trim_left(2);
    head.seek_end();
    head.write_u8(9, WriteMode::Overwrite);
    assert_eq!(head.as_slice(), &[1, 2, 9]);
    assert_eq!(bytes.as_slice(), &[3, 4]);
}

#[test]
fn test_fixed_length_string_with_padding() {
    let mut bytes = ByteList::new();
    bytes.write_fixed_string("Matt's Test", 24, WriteMode::Overwrite);
    bytes.set_cursor(0);
    assert_eq!(bytes.read_fixed_string(24).unwrap(), "Matt's Test");
}

#[test]
fn test_from_array_sequence() {
    let data: Vec<u8> = (0..8).collect();
    let mut list = ByteList::from_bytes(&data);
    for expected in &data {
        assert_eq!(list.read_u8().unwrap(), *expected);
    }
}

#[test]
fn test_hex_dump_shows_padding() {
    let mut bytes = ByteList::with_config(ByteListConfig::COMPACT.with_padding(3));
    bytes.write_u16(0xBEEF, WriteMode::Overwrite);
    assert_eq!(bytes.to_string(), "EF BE 00");

    let empty = ByteList::with_config(ByteListConfig::COMPACT);
    assert_eq!(empty.to_string(), "");
}
