//! Property tests for stack push/pop invariants.
//!
//! The bounded stack is checked against an unbounded `Vec` model: for any
//! operation sequence that stays within capacity the two agree exactly, and
//! `len <= capacity` holds after every step regardless of the sequence.

use cairn_stack::{FixedStack, StackError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(u64),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![any::<u64>().prop_map(Op::Push), Just(Op::Pop)]
}

proptest! {
    #[test]
    fn agrees_with_vec_model_within_capacity(
        capacity in 1usize..64,
        ops in proptest::collection::vec(op_strategy(), 1..200),
    ) {
        let mut stack = FixedStack::new(capacity);
        let mut model: Vec<u64> = Vec::new();

        for op in ops {
            match op {
                Op::Push(n) => {
                    if model.len() < capacity {
                        prop_assert_eq!(stack.push(n), Ok(()));
                        model.push(n);
                    } else {
                        prop_assert_eq!(
                            stack.push(n),
                            Err(StackError::Overflow { capacity })
                        );
                    }
                }
                Op::Pop => {
                    prop_assert_eq!(stack.pop(), model.pop());
                }
            }
            prop_assert_eq!(stack.len(), model.len());
            prop_assert!(stack.len() <= stack.capacity());
            prop_assert_eq!(stack.peek(), model.last());
        }
    }

    #[test]
    fn pushes_within_capacity_pop_in_reverse_order(
        values in proptest::collection::vec(any::<u64>(), 0..64),
    ) {
        let mut stack = FixedStack::new(values.len());
        for &n in &values {
            stack.push(n).unwrap();
        }
        for &n in values.iter().rev() {
            assert_eq!(stack.pop(), Some(n));
        }
        prop_assert!(stack.is_empty());
    }
}
