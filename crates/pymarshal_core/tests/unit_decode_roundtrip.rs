#![allow(missing_docs)]

use std::thread;

use pymarshal::marshal::{ReaderSource, SliceSource, Value, decode};
use pymarshal_testkit::encode;

fn sample_tree() -> Value {
	Value::Mapping(vec![
		(Value::Bytes(b"id".to_vec()), Value::Int32(i32::MIN)),
		(Value::Bytes(b"id".to_vec()), Value::Int32(i32::MAX)),
		(Value::Null, Value::Float64(f64::MAX)),
		(
			Value::Sequence(vec![Value::Int32(0), Value::Bytes(Vec::new())]),
			Value::Sequence(vec![
				Value::Mapping(Vec::new()),
				Value::Sequence(vec![Value::Null; 5]),
				Value::Bytes((0..=255).collect()),
			]),
		),
	])
}

#[test]
fn encoded_tree_decodes_to_an_equal_tree() {
	let tree = sample_tree();
	let bytes = encode(&tree);

	let from_slice = decode(&mut SliceSource::new(&bytes)).expect("slice decode succeeds");
	assert_eq!(from_slice, tree);

	let from_reader = decode(&mut ReaderSource::new(bytes.as_slice())).expect("reader decode succeeds");
	assert_eq!(from_reader, tree);
}

#[test]
fn independent_sources_decode_on_separate_threads() {
	let handles: Vec<_> = (0..4)
		.map(|n| {
			thread::spawn(move || {
				let tree = Value::Sequence(vec![Value::Int32(n); n as usize + 1]);
				let bytes = encode(&tree);
				let decoded = decode(&mut SliceSource::new(&bytes)).expect("decode succeeds");
				(tree, decoded)
			})
		})
		.collect();

	for handle in handles {
		let (tree, decoded) = handle.join().expect("worker finishes");
		assert_eq!(decoded, tree);
	}
}
