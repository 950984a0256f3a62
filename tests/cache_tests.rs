//! Integration tests for the cache model.

use avdark_cache::common::{AccessType, ConfigError};
use avdark_cache::core::units::cache::CacheModel;

/// Creates a 2-way cache with a single set of 64-byte lines.
fn create_single_set_2way() -> CacheModel {
    CacheModel::new(128, 64, 2).unwrap()
}

/// Tests geometry derivation for a 64 KiB 2-way cache.
#[test]
fn test_cache_geometry() {
    let cache = CacheModel::new(65536, 64, 2).unwrap();
    let g = cache.geometry();

    assert_eq!(g.sets, 512);
    assert_eq!(g.line_size_log2, 6);
    assert_eq!(g.tag_shift, 15);
    assert_eq!(g.ways, 2);
}

/// Tests that a fresh cache holds nothing and has zero statistics.
#[test]
fn test_cache_creation() {
    let cache = CacheModel::new(4096, 64, 4).unwrap();

    assert!(!cache.contains(0x1000));
    assert_eq!(cache.stats().accesses(), 0);
    assert!(cache.inspect().valid_lines().next().is_none());
}

/// Tests rejection of zero and non-power-of-two parameters.
#[test]
fn test_cache_invalid_geometry() {
    assert_eq!(
        CacheModel::new(1000, 64, 1).err(),
        Some(ConfigError::NotPowerOfTwo {
            field: "size",
            value: 1000
        })
    );
    assert!(CacheModel::new(1024, 0, 1).is_err());
    assert!(CacheModel::new(1024, 64, 3).is_err());
    assert!(matches!(
        CacheModel::new(64, 64, 2),
        Err(ConfigError::NoSets { .. })
    ));
}

/// Tests direct-mapped hit, conflict eviction and re-miss.
#[test]
fn test_direct_mapped_overwrite() {
    let mut cache = CacheModel::new(1024, 64, 1).unwrap();
    assert_eq!(cache.geometry().sets, 16);

    assert!(!cache.access(0, AccessType::Read));
    assert_eq!(cache.stats().read_misses, 1);

    assert!(cache.access(0, AccessType::Read));
    assert_eq!(cache.stats().read_misses, 1);

    assert!(!cache.access(1024, AccessType::Read));
    assert_eq!(cache.stats().read_misses, 2);
    assert!(!cache.contains(0));

    assert!(!cache.access(0, AccessType::Read));
    assert_eq!(cache.stats().read_misses, 3);
    assert_eq!(cache.stats().reads, 4);
}

/// Tests that direct-mapped caches never set the recency bit.
#[test]
fn test_direct_mapped_ignores_recency() {
    let mut cache = CacheModel::new(1024, 64, 1).unwrap();

    cache.access(0, AccessType::Read);
    cache.access(0, AccessType::Read);

    let line = cache.line(0, 0).unwrap();
    assert!(line.valid);
    assert!(!line.recently_used);
}

/// Tests the 2-way recency sequence: fill A, fill B, hit A, C evicts B.
#[test]
fn test_two_way_recency() {
    let mut cache = create_single_set_2way();
    let (a, b, c) = (0x00, 0x40, 0x80);

    assert!(!cache.access(a, AccessType::Read));
    assert!(cache.line(0, 0).unwrap().recently_used);

    assert!(!cache.access(b, AccessType::Read));
    let set = cache.set(0);
    assert_eq!((set[0].tag, set[1].tag), (0, 1));
    assert!(!set[0].recently_used);
    assert!(set[1].recently_used);

    assert!(cache.access(a, AccessType::Read));
    let set = cache.set(0);
    assert!(set[0].recently_used);
    assert!(!set[1].recently_used);

    assert!(!cache.access(c, AccessType::Read));
    assert!(cache.contains(a));
    assert!(cache.contains(c));
    assert!(!cache.contains(b));
    assert_eq!(cache.set(0)[1].tag, 2);
}

/// Tests that a third distinct tag without an intervening hit evicts the
/// least recently filled way.
#[test]
fn test_two_way_fill_order_eviction() {
    let mut cache = create_single_set_2way();

    cache.access(0x00, AccessType::Read);
    cache.access(0x40, AccessType::Read);
    assert!(!cache.access(0x80, AccessType::Read));

    assert!(!cache.contains(0x00));
    assert!(cache.contains(0x40));
    assert!(cache.contains(0x80));
}

/// Tests that any byte within a line hits once the line is resident.
#[test]
fn test_cache_line_alignment() {
    let mut cache = CacheModel::new(4096, 64, 4).unwrap();

    assert!(!cache.access(0x1000, AccessType::Read));
    assert!(cache.access(0x1001, AccessType::Read));
    assert!(cache.access(0x103F, AccessType::Write));
    assert!(!cache.contains(0x1040));
}

/// Tests that tags use the full 64-bit address.
#[test]
fn test_cache_high_address_tags() {
    let mut cache = CacheModel::new(1024, 64, 1).unwrap();
    let high = 0xFFFF_FFFF_FFFF_FFC0;

    assert!(!cache.access(high, AccessType::Read));
    assert_eq!(cache.line(15, 0).unwrap().tag, high >> 10);
    assert!(cache.access(high + 0x3F, AccessType::Read));
    assert!(!cache.contains(high & 0x00FF_FFFF_FFFF_FFFF));
}

/// Tests read and write counter separation.
#[test]
fn test_cache_read_write_counters() {
    let mut cache = CacheModel::new(4096, 64, 2).unwrap();

    cache.access(0x0000, AccessType::Read);
    cache.access(0x0040, AccessType::Write);
    cache.access(0x0080, AccessType::Read);
    cache.access(0x0000, AccessType::Write);

    let stats = cache.stats();
    assert_eq!(stats.reads, 2);
    assert_eq!(stats.read_misses, 2);
    assert_eq!(stats.writes, 2);
    assert_eq!(stats.write_misses, 1);
}

/// Tests that resetting statistics keeps the store populated.
#[test]
fn test_cache_reset_statistics() {
    let mut cache = CacheModel::new(4096, 64, 2).unwrap();

    cache.access(0x1000, AccessType::Read);
    cache.access(0x2000, AccessType::Write);
    cache.reset_statistics();

    assert_eq!(cache.stats().accesses(), 0);
    assert_eq!(cache.stats().misses(), 0);

    assert!(cache.access(0x1000, AccessType::Read));
    assert_eq!(cache.stats().reads, 1);
    assert_eq!(cache.stats().read_misses, 0);
}

/// Tests that flushing twice equals flushing once and that every access
/// misses afterwards.
#[test]
fn test_cache_flush() {
    let mut cache = CacheModel::new(256, 16, 4).unwrap();

    for addr in [0x1000, 0x1010, 0x2000, 0x3000] {
        cache.access(addr, AccessType::Read);
    }
    let stats = *cache.stats();

    cache.flush();
    let once = cache.inspect();
    cache.flush();
    assert_eq!(cache.inspect(), once);
    assert!(once.lines.iter().all(|l| !l.valid && l.tag == 0));
    assert!(cache.set(0).iter().all(|l| !l.recently_used));
    assert_eq!(*cache.stats(), stats);

    for addr in [0x1000, 0x1010, 0x2000, 0x3000] {
        assert!(!cache.access(addr, AccessType::Read));
    }
}

/// Tests that resize clears the store and statistics.
#[test]
fn test_cache_resize() {
    let mut cache = CacheModel::new(1024, 64, 1).unwrap();
    cache.access(0x40, AccessType::Read);

    cache.resize(8192, 32, 4).unwrap();

    let g = cache.geometry();
    assert_eq!(g.sets, 64);
    assert_eq!(g.tag_shift, 11);
    assert_eq!(cache.inspect().lines.len(), 256);
    assert!(!cache.contains(0x40));
    assert_eq!(cache.stats().accesses(), 0);
}

/// Tests that a rejected resize leaves the cache untouched.
#[test]
fn test_cache_resize_rejected() {
    let mut cache = CacheModel::new(1024, 64, 2).unwrap();
    cache.access(0x40, AccessType::Write);
    let before = cache.inspect();

    assert!(cache.resize(1024, 48, 2).is_err());
    assert!(cache.resize(0, 64, 2).is_err());

    assert_eq!(cache.inspect(), before);
    assert_eq!(cache.stats().writes, 1);
    assert!(cache.access(0x40, AccessType::Read));
}

/// Tests the info line and internals dump format.
#[test]
fn test_cache_inspect_format() {
    let mut cache = CacheModel::new(128, 64, 1).unwrap();
    cache.access(0x80, AccessType::Read);

    assert_eq!(
        cache.info().to_string(),
        "Cache Info\nsize: 128, assoc: 1, line-size: 64\n"
    );

    let dump = cache.inspect().to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines[0], "Cache Internals");
    assert_eq!(lines[1], "size: 128, assoc: 1, line-size: 64");
    assert_eq!(lines[2], "tag: <0x0000000000000001> valid: 1");
    assert_eq!(lines[3], "tag: <0x0000000000000000> valid: 0");

    let snapshot = cache.inspect();
    let resident: Vec<_> = snapshot.valid_lines().collect();
    assert_eq!(resident.len(), 1);
    assert_eq!((resident[0].set, resident[0].way), (0, 0));
    assert_eq!(resident[0].base, 0x80);
}

/// Tests that a model can be handed to a worker thread.
#[test]
fn test_cache_moves_to_thread() {
    let mut cache = CacheModel::new(1024, 64, 2).unwrap();
    cache.access(0x100, AccessType::Read);

    let cache = std::thread::spawn(move || {
        assert!(cache.access(0x100, AccessType::Write));
        cache
    })
    .join()
    .unwrap();

    assert_eq!(cache.stats().writes, 1);
    assert_eq!(cache.stats().misses(), 1);
}

/// Tests that two models do not share state.
#[test]
fn test_cache_independent_instances() {
    let mut l1 = CacheModel::new(1024, 64, 1).unwrap();
    let mut l2 = CacheModel::new(1024, 64, 1).unwrap();

    l1.access(0x100, AccessType::Read);

    assert!(l1.contains(0x100));
    assert!(!l2.contains(0x100));
    assert!(!l2.access(0x100, AccessType::Read));
    assert_eq!(l1.stats().reads, 1);
    assert_eq!(l2.stats().reads, 1);
}
