use super::helpers::gen::{gen_int_list, gen_prim_type};
use anyhow::Result;
use rowpack_collection::deser;
use rowpack_collection::Collection;
use rowpack_types::types::{CollectionKind, DataType, ProtocolVersion, ValueType};
use std::io::Cursor;
use std::sync::Arc;

fn int32s(ints: &[i32]) -> Vec<u8> {
    ints.iter().flat_map(|i| i.to_be_bytes()).collect()
}

pub fn test_worked_examples() -> Result<()> {
    list_v3()?;
    list_v2()?;
    tuple_of_list_v2()?;
    Ok(())
}

fn list_v3() -> Result<()> {
    let list = gen_int_list(&[1, 2, 3])?;
    let buf = list.serialize_as_value(ProtocolVersion::V3)?;

    let expected = int32s(&[28, 3, 4, 1, 4, 2, 4, 3]);
    assert_eq!(expected, *buf);
    assert_eq!(32, list.serialized_length(ProtocolVersion::V3));
    Ok(())
}

fn list_v2() -> Result<()> {
    let list = gen_int_list(&[1, 2, 3])?;
    let buf = list.serialize_as_value(ProtocolVersion::V2)?;

    let mut expected = int32s(&[20]);
    expected.extend_from_slice(&3u16.to_be_bytes());
    for i in [1, 2, 3] {
        expected.extend_from_slice(&4u16.to_be_bytes());
        expected.extend_from_slice(&int32s(&[i]));
    }
    assert_eq!(expected, *buf);
    assert_eq!(24, list.serialized_length(ProtocolVersion::V2));
    Ok(())
}

/// The tuple keeps 4-byte widths at v2, and so does the list nested in it.
fn tuple_of_list_v2() -> Result<()> {
    let list = gen_int_list(&[1, 2, 3])?;
    let tup_type = Arc::new(DataType::tuple(vec![list.value_data_type()]));
    let mut tup = Collection::new_from_data_type(tup_type, 1)?;
    tup.append_collection(&list)?;

    let inner_list = int32s(&[3, 4, 1, 4, 2, 4, 3]);
    assert_eq!(inner_list, *list.serialize_inner()?);

    let buf = tup.serialize_as_value(ProtocolVersion::V2)?;
    let mut expected = int32s(&[4 + 4 + 28, 1, 28]);
    expected.extend_from_slice(&inner_list);
    assert_eq!(expected, *buf);
    assert_eq!(buf.len(), tup.serialized_length(ProtocolVersion::V2));

    // Reading back down both levels.
    let (r_len, fields) = deser::deser_value(
        &mut Cursor::new(&buf[..]),
        CollectionKind::Tuple,
        ProtocolVersion::V2,
    )?;
    assert_eq!(buf.len(), r_len);
    let (_, list_items) = deser::deser_inner(&mut Cursor::new(&fields[0][..]))?;
    assert_eq!(list.items(), &list_items[..]);

    // A mismatching field is rejected.
    let mut tup_of_int = Collection::new_from_data_type(
        Arc::new(DataType::tuple(vec![gen_prim_type(ValueType::Int)])),
        1,
    )?;
    assert!(tup_of_int.append_collection(&list).is_err());
    assert_eq!(0, tup_of_int.encoded_item_count());
    Ok(())
}
