use slotarray::{ArrayConfig, ArrayError, DropRelease, OwningArray};
use slotarray_test_utils::{DropCounter, RecordingReleaser, Tracked};

fn ids<R: slotarray::Release<Tracked>>(arr: &OwningArray<Tracked, R>) -> Vec<Option<u32>> {
    (0..arr.len()).map(|i| arr.get(i).map(Tracked::id)).collect()
}

#[test]
fn add_delete_insert_destroy_releases_survivors_once() {
    let counter = DropCounter::new();
    let log = RecordingReleaser::new();
    let mut arr = OwningArray::new(log.releaser()).unwrap();

    let (a, b, c, d) = (1, 2, 3, 4);
    arr.add(counter.track(a)).unwrap();
    arr.add(counter.track(b)).unwrap();
    arr.add(counter.track(c)).unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(ids(&arr), [Some(a), Some(b), Some(c)]);

    arr.delete_at(1);
    assert_eq!(arr.len(), 2);
    assert_eq!(ids(&arr), [Some(a), Some(c)]);
    assert_eq!(log.count(), 1);

    arr.insert_at(1, counter.track(d)).unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(ids(&arr), [Some(a), Some(d), Some(c)]);

    arr.destroy();
    let mut released = log.map_released(Tracked::id);
    released.sort_unstable();
    assert_eq!(released, [a, b, c, d]);
    // The log still owns them; nothing was dropped twice or leaked.
    assert_eq!(counter.drops(), 0);
    drop(log);
    assert_eq!(counter.live(), 0);
}

#[test]
fn sparse_put_on_empty_array() {
    let counter = DropCounter::new();
    let mut arr = OwningArray::new(DropRelease).unwrap();
    arr.put(5, counter.track(42)).unwrap();
    assert_eq!(arr.len(), 6);
    for i in 0..5 {
        assert!(arr.get(i).is_none());
    }
    assert_eq!(arr.get(5).map(Tracked::id), Some(42));
    drop(arr);
    assert_eq!(counter.live(), 0);
}

#[test]
fn drop_release_frees_every_element_exactly_once() {
    let counter = DropCounter::new();
    {
        let mut arr = OwningArray::with_config(ArrayConfig::new(2), DropRelease).unwrap();
        for id in 0..50 {
            arr.add(counter.track(id)).unwrap();
        }
        arr.put(10, counter.track(100)).unwrap();
        arr.put(70, counter.track(101)).unwrap();
        arr.insert_at(0, counter.track(102)).unwrap();
        arr.delete_at(20);
        arr.delete_at(500);
        // One overwritten and one deleted so far.
        assert_eq!(counter.drops(), 2);
    }
    assert_eq!(counter.minted(), 53);
    assert_eq!(counter.live(), 0);
}

#[test]
fn rejected_write_keeps_ownership_with_caller() {
    let counter = DropCounter::new();
    let log = RecordingReleaser::new();
    let mut arr = OwningArray::new(log.releaser()).unwrap();
    arr.add(counter.track(1)).unwrap();

    let rejected = arr.put(usize::MAX / 2, counter.track(2)).unwrap_err();
    assert!(matches!(
        rejected.error(),
        ArrayError::AllocationFailed { .. }
    ));
    let element = rejected.into_element();
    assert_eq!(element.id(), 2);
    assert_eq!(log.count(), 0);
    assert_eq!(arr.len(), 1);
    assert_eq!(arr.capacity(), ArrayConfig::DEFAULT_CAPACITY);

    drop(element);
    assert_eq!(counter.drops(), 1);
}

#[test]
fn appends_cross_growth_boundaries() {
    let mut arr = OwningArray::with_config(ArrayConfig::new(1), DropRelease).unwrap();
    let mut capacities = vec![arr.capacity()];
    for v in 0..1000u32 {
        arr.add(v).unwrap();
        if capacities.last() != Some(&arr.capacity()) {
            capacities.push(arr.capacity());
        }
    }
    assert_eq!(capacities, [1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024]);
    for v in 0..1000u32 {
        assert_eq!(arr.get(v as usize), Some(&v));
    }
}

#[test]
fn sort_then_bsearch_tracked_elements() {
    let counter = DropCounter::new();
    let mut arr = OwningArray::new(DropRelease).unwrap();
    for id in [40, 10, 30, 20] {
        arr.add(counter.track(id)).unwrap();
    }
    arr.sort();
    assert_eq!(ids(&arr), [Some(10), Some(20), Some(30), Some(40)]);

    let found = arr.bsearch_by(&30u32, |e, key| e.id().cmp(key));
    assert_eq!(found.map(Tracked::id), Some(30));
    assert!(arr.bsearch_by(&35u32, |e, key| e.id().cmp(key)).is_none());
    // Sorting relocates; it never drops.
    assert_eq!(counter.drops(), 0);
}
