//! Integration tests for owning buffers: construction, access and transfer.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scopekeep_core::{make_buffer, BufferError, OwningBuffer};

#[test]
fn test_basic_usage() {
    let mut buf: OwningBuffer<i32> = OwningBuffer::new(10);
    buf[0] = 42;
    buf[9] = 99;

    assert_eq!(buf.len(), 10);
    assert_eq!(buf.get(0), Ok(&42));
    assert_eq!(buf.get(9), Ok(&99));
    assert_eq!(
        buf.get(100),
        Err(BufferError::OutOfRange { index: 100, len: 10 })
    );
}

#[test]
fn test_literal_sequence() {
    let buf = OwningBuffer::from([1, 2, 3, 4, 5]);
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.get(2), Ok(&3));
}

#[test]
fn test_index_out_of_range_panics_with_message() {
    let buf = OwningBuffer::from([1, 2, 3]);
    let result = std::panic::catch_unwind(|| buf[5]);
    let payload = result.unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .unwrap_or_default();
    assert_eq!(message, "index out of range: index 5, len 3");
}

#[test]
fn test_transfer_construct() {
    let mut b1: OwningBuffer<i32> = OwningBuffer::new(10);
    *b1.get_mut(0).unwrap() = 42;

    let b2 = b1.take();
    assert_eq!(b2.get(0), Ok(&42));
    assert_eq!(b2.len(), 10);
    assert_eq!(b1.len(), 0);
    assert!(b1.get(0).is_err());
}

#[test]
fn test_chained_transfer_assign() {
    let mut a: OwningBuffer<i32> = OwningBuffer::new(2);
    let mut b: OwningBuffer<i32> = OwningBuffer::new(3);
    let mut c = OwningBuffer::from([7]);

    b.transfer_from(&mut c);
    a.transfer_from(&mut b);

    assert_eq!(a.as_slice(), &[7]);
    assert!(b.is_empty());
    assert!(c.is_empty());
}

#[test]
fn test_transfer_into_empty_buffer() {
    let mut dst: OwningBuffer<u8> = OwningBuffer::empty();
    let mut src = OwningBuffer::from(vec![1, 2, 3]);

    dst.transfer_from(&mut src);
    assert_eq!(dst.as_slice(), &[1, 2, 3]);

    // Transferring from an already-empty source empties the destination.
    dst.transfer_from(&mut src);
    assert!(dst.is_empty());
}

#[test]
fn test_drop_after_transfer() {
    let mut src = OwningBuffer::from([String::from("kept")]);
    let dst = src.take();

    drop(src);
    drop(OwningBuffer::<String>::empty());
    assert_eq!(dst[0], "kept");
}

#[test]
fn test_scope_exit_releases() {
    let marker = std::rc::Rc::new(());
    {
        let buf = make_buffer((5usize, std::rc::Rc::clone(&marker)));
        assert_eq!(std::rc::Rc::strong_count(&marker), 6);
        assert_eq!(buf.len(), 5);
    }
    assert_eq!(std::rc::Rc::strong_count(&marker), 1);
}

#[test]
fn test_early_return_releases() {
    fn fill_until_error(marker: &std::rc::Rc<()>) -> Result<(), BufferError> {
        let mut buf = OwningBuffer::from_fn(3, |_| std::rc::Rc::clone(marker));
        for i in 0..10 {
            buf.set(i, std::rc::Rc::clone(marker))?;
        }
        Ok(())
    }

    let marker = std::rc::Rc::new(());
    let err = fill_until_error(&marker).unwrap_err();
    assert_eq!(err, BufferError::OutOfRange { index: 3, len: 3 });
    assert_eq!(std::rc::Rc::strong_count(&marker), 1);
}

#[test]
fn test_factory_runtime_size() {
    let requested = std::env::args().count().max(1) * 4;
    let buf: OwningBuffer<f32> = make_buffer(requested);
    assert_eq!(buf.len(), requested);
}

#[test]
fn test_into_iter_preserves_order() {
    let buf = make_buffer(vec!["a", "b", "c"]);
    let joined: Vec<&str> = buf.into_iter().collect();
    assert_eq!(joined, ["a", "b", "c"]);
}

#[test]
fn test_collect_from_iterator() {
    let buf: OwningBuffer<u32> = (1..=4).map(|x| x * x).collect();
    assert_eq!(buf.as_slice(), &[1, 4, 9, 16]);

    let sum: u32 = buf.iter().sum();
    assert_eq!(sum, 30);
}

// ---------------------------------------------------------------------------
// Randomised property checks (seeded, deterministic)
// ---------------------------------------------------------------------------

#[test]
fn test_property_size_matches_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let count = rng.gen_range(0..512);
        let buf: OwningBuffer<u16> = OwningBuffer::new(count);
        assert_eq!(buf.len(), count);
    }
}

#[test]
fn test_property_write_then_read() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..100 {
        let count = rng.gen_range(1..256);
        let mut buf: OwningBuffer<i64> = OwningBuffer::new(count);
        let index = rng.gen_range(0..count);
        let value: i64 = rng.gen();

        *buf.get_mut(index).unwrap() = value;
        assert_eq!(buf.get(index), Ok(&value));
    }
}

#[test]
fn test_property_out_of_range_no_mutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..100 {
        let count = rng.gen_range(0..64);
        let mut buf = OwningBuffer::from_fn(count, |i| i as u32);
        let index = count + rng.gen_range(0..1000);

        assert_eq!(
            buf.set(index, u32::MAX),
            Err(BufferError::OutOfRange { index, len: count })
        );
        assert!(buf.get_mut(index).is_err());
        assert!(buf.iter().enumerate().all(|(i, &x)| x == i as u32));
    }
}

#[test]
fn test_property_transfer_preserves_values() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..50 {
        let count = rng.gen_range(0..128);
        let values: Vec<u8> = (0..count).map(|_| rng.gen()).collect();

        let mut b1 = OwningBuffer::from_slice(&values);
        let mut b2 = OwningBuffer::new(rng.gen_range(0..16));
        b2.transfer_from(&mut b1);

        assert_eq!(b2.len(), count);
        assert_eq!(b1.len(), 0);
        assert_eq!(b2.as_slice(), values.as_slice());
    }
}
