use dynamic_array::DynamicArray;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    Resize(usize, i32),
    Truncate(usize),
    Reserve(usize),
    Clear,
    ShrinkToFit,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
        2 => (0..80usize, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0..80usize).prop_map(Op::Erase),
        1 => (0..80usize, any::<i32>()).prop_map(|(n, v)| Op::Resize(n, v)),
        1 => (0..80usize).prop_map(Op::Truncate),
        1 => (0..40usize).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
        1 => Just(Op::ShrinkToFit),
    ]
}

/// Applies `op` to both the array and a `Vec` model.
fn apply(arr: &mut DynamicArray, model: &mut Vec<i32>, op: &Op) {
    match *op {
        Op::Push(v) => {
            arr.push(v).unwrap();
            model.push(v);
        }
        Op::Pop => {
            assert_eq!(arr.pop(), model.pop());
        }
        Op::Insert(i, v) => {
            if i <= model.len() {
                assert_eq!(arr.insert(i, v).unwrap(), i);
                model.insert(i, v);
            } else {
                assert!(arr.insert(i, v).is_err());
            }
        }
        Op::Erase(i) => {
            if i < model.len() {
                assert_eq!(arr.erase(i).unwrap(), i);
                model.remove(i);
            } else {
                assert!(arr.erase(i).is_err());
            }
        }
        Op::Resize(n, v) => {
            arr.resize(n, v).unwrap();
            model.resize(n, v);
        }
        Op::Truncate(n) => {
            arr.truncate(n);
            model.truncate(n);
        }
        Op::Reserve(n) => {
            arr.reserve(n).unwrap();
            assert!(arr.capacity() >= arr.len() + n);
        }
        Op::Clear => {
            arr.clear();
            model.clear();
            assert_eq!(arr.capacity(), 0);
        }
        Op::ShrinkToFit => {
            arr.shrink_to_fit().unwrap();
            assert_eq!(arr.capacity(), model.len());
        }
    }
}

proptest! {
    /// Property: the array matches a `Vec` model and len <= capacity after every op
    #[test]
    fn matches_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut arr = DynamicArray::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut arr, &mut model, op);
            prop_assert!(arr.len() <= arr.capacity());
            prop_assert_eq!(arr.as_slice(), model.as_slice());
        }
    }

    /// Property: pushing onto a full array at least doubles its capacity
    #[test]
    fn push_doubles_when_full(values in prop::collection::vec(any::<i32>(), 0..64), extra in any::<i32>()) {
        let mut arr = DynamicArray::from_slice(&values).unwrap();
        prop_assert_eq!(arr.capacity(), values.len());

        let cap = arr.capacity();
        arr.push(extra).unwrap();
        prop_assert!(arr.capacity() >= std::cmp::max(2 * cap, 1));
        prop_assert_eq!(arr[values.len()], extra);
    }

    /// Property: mutating a copy never changes the original, and vice versa
    #[test]
    fn copies_are_independent(
        values in prop::collection::vec(any::<i32>(), 0..64),
        left in prop::collection::vec(op(), 0..32),
        right in prop::collection::vec(op(), 0..32),
    ) {
        let mut original = DynamicArray::from_slice(&values).unwrap();
        let mut copy = original.try_clone().unwrap();
        let mut original_model = values.clone();
        let mut copy_model = values.clone();

        for op in &left {
            apply(&mut copy, &mut copy_model, op);
        }
        prop_assert_eq!(original.as_slice(), values.as_slice());

        for op in &right {
            apply(&mut original, &mut original_model, op);
        }
        prop_assert_eq!(copy.as_slice(), copy_model.as_slice());
        prop_assert_eq!(original.as_slice(), original_model.as_slice());
    }

    /// Property: take moves every element and leaves the source empty
    #[test]
    fn take_moves_everything(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut a = DynamicArray::from_slice(&values).unwrap();
        let b = a.take();

        prop_assert_eq!(b.as_slice(), values.as_slice());
        prop_assert_eq!(a.len(), 0);
        prop_assert_eq!(a.capacity(), 0);
        prop_assert!(a.data().is_none());
    }

    /// Property: resizing twice to the same count changes nothing the second time
    #[test]
    fn resize_is_idempotent(
        values in prop::collection::vec(any::<i32>(), 0..64),
        count in 0..128usize,
        fill in any::<i32>(),
    ) {
        let mut arr = DynamicArray::from_slice(&values).unwrap();
        arr.resize(count, fill).unwrap();
        let cap = arr.capacity();
        let snapshot = arr.try_clone().unwrap();

        arr.resize(count, fill).unwrap();
        prop_assert_eq!(arr.capacity(), cap);
        prop_assert_eq!(&arr, &snapshot);
    }

    /// Property: erasing what was just inserted restores the sequence
    #[test]
    fn erase_undoes_insert(
        values in prop::collection::vec(any::<i32>(), 0..64),
        index in any::<prop::sample::Index>(),
        value in any::<i32>(),
    ) {
        let mut arr = DynamicArray::from_slice(&values).unwrap();
        let i = index.index(values.len() + 1);

        let at = arr.insert(i, value).unwrap();
        prop_assert_eq!(arr[at], value);
        arr.erase(at).unwrap();
        prop_assert_eq!(arr.as_slice(), values.as_slice());
    }

    /// Property: equality is reflexive and symmetric, and lengths must match
    #[test]
    fn equality_laws(
        a in prop::collection::vec(0..4i32, 0..8),
        b in prop::collection::vec(0..4i32, 0..8),
    ) {
        let x = DynamicArray::from_slice(&a).unwrap();
        let y = DynamicArray::from_slice(&b).unwrap();

        let same = &x;
        prop_assert!(x == *same);
        prop_assert_eq!(x == y, y == x);
        prop_assert_eq!(x == y, a == b);
        if a.len() != b.len() {
            prop_assert!(x != y);
        }
    }

    /// Property: rendering emits every element followed by one space
    #[test]
    fn render_matches_elements(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let arr = DynamicArray::from_slice(&values).unwrap();
        let expected: String = values.iter().map(|v| format!("{v} ")).collect();
        prop_assert_eq!(arr.to_string(), expected);
    }
}
