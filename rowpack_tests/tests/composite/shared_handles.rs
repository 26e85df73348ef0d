use super::helpers::gen::{gen_int_list, gen_random_collection};
use anyhow::{anyhow, Result};
use rowpack_collection::CollectionShared;
use rowpack_types::types::{CollectionKind, ProtocolVersion};
use std::sync::Arc;
use std::thread;

const READERS: usize = 8;

/// A finished collection is serialized from several threads at once, each holding its own handle.
pub fn test_shared_handles() -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut map = gen_random_collection(CollectionKind::Map, 6, &mut rng)?;
    map.append_collection(&gen_int_list(&[7, 8])?)?;
    map.append_str("last value");

    let shared: CollectionShared = Arc::new(map);
    let expected_v2 = shared.serialize_as_value(ProtocolVersion::V2)?;
    let expected_v4 = shared.serialize_as_value(ProtocolVersion::V4)?;

    let outputs = thread::scope(|s| {
        let handles = (0..READERS)
            .map(|reader_i| {
                let shared = Arc::clone(&shared);
                s.spawn(move || {
                    let version = if reader_i % 2 == 0 {
                        ProtocolVersion::V2
                    } else {
                        ProtocolVersion::V4
                    };
                    let buf = shared.serialize_as_value(version)?;
                    let len = shared.serialized_length(version);
                    anyhow::Ok((version, buf, len))
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| anyhow!("Reader panicked"))?)
            .collect::<Result<Vec<_>>>()
    })?;

    for (version, buf, len) in outputs {
        assert_eq!(len, buf.len());
        if version == ProtocolVersion::V2 {
            assert_eq!(expected_v2, buf);
        } else {
            assert_eq!(expected_v4, buf);
        }
    }

    // Every reader's handle has been released.
    assert_eq!(1, Arc::strong_count(&shared));
    let coll = Arc::try_unwrap(shared).map_err(|_| anyhow!("Handle still shared"))?;
    assert_eq!(8, coll.encoded_item_count());
    assert!(coll.is_map_complete());

    Ok(())
}
