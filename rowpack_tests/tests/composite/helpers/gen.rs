use anyhow::Result;
use rand::Rng;
use rowpack_collection::{Collection, UserTypeValue};
use rowpack_types::serde;
use rowpack_types::types::{CollectionKind, DataType, DataTypeShared, ValueType};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use uuid::Uuid;

pub const KINDS: [CollectionKind; 4] = [
    CollectionKind::List,
    CollectionKind::Set,
    CollectionKind::Map,
    CollectionKind::Tuple,
];

pub fn gen_prim_type(val_type: ValueType) -> DataTypeShared {
    Arc::new(DataType::Primitive(val_type))
}

pub fn gen_int_list(ints: &[i32]) -> Result<Collection> {
    let data_type = Arc::new(DataType::list(gen_prim_type(ValueType::Int)));
    let mut coll = Collection::new_from_data_type(data_type, ints.len())?;
    for i in ints {
        coll.append_int32(*i);
    }
    Ok(coll)
}

pub fn gen_addr(street: &str) -> Result<UserTypeValue> {
    let data_type = Arc::new(DataType::user_type(
        "ks",
        "addr",
        vec![
            (String::from("street"), gen_prim_type(ValueType::Text)),
            (String::from("zip"), gen_prim_type(ValueType::Int)),
        ],
    ));
    let mut addr = UserTypeValue::new_from_data_type(data_type)?;
    addr.set_by_name("street", serde::encode_str(street))?;
    Ok(addr)
}

/// Appends one item of a randomly chosen shape, nested values included.
pub fn append_random_item(coll: &mut Collection, rng: &mut impl Rng) -> Result<()> {
    match rng.gen_range(0..13) {
        0 => coll.append_int32(rng.gen()),
        1 => coll.append_int64(rng.gen()),
        2 => coll.append_float(rng.gen()),
        3 => coll.append_double(rng.gen()),
        4 => coll.append_bool(rng.gen()),
        5 => coll.append_uuid(&Uuid::from_u128(rng.gen())),
        6 => coll.append_inet(&IpAddr::V4(Ipv4Addr::from(rng.gen::<u32>()))),
        7 => coll.append_inet(&IpAddr::V6(Ipv6Addr::from(rng.gen::<u128>()))),
        8 => {
            let len = rng.gen_range(0..64);
            let bytes = (0..len).map(|_| rng.gen()).collect::<Vec<u8>>();
            coll.append_bytes(&bytes);
        }
        9 => coll.append_decimal(&rng.gen::<[u8; 5]>(), rng.gen()),
        10 => coll.append_str(&"x".repeat(rng.gen_range(0..32))),
        11 => {
            let ints = (0..rng.gen_range(0..4))
                .map(|_| rng.gen())
                .collect::<Vec<i32>>();
            coll.append_collection(&gen_int_list(&ints)?)?;
        }
        _ => coll.append_user_type(&gen_addr("Main St")?)?,
    }
    Ok(())
}

/// An undeclared collection of `item_count` random items.
pub fn gen_random_collection(
    kind: CollectionKind,
    item_count: usize,
    rng: &mut impl Rng,
) -> Result<Collection> {
    let mut coll = Collection::new(kind, item_count);
    for _ in 0..item_count {
        append_random_item(&mut coll, rng)?;
    }
    Ok(coll)
}
