use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use treap_bimap::{BiMap, Error};

const NUM_OF_OPERATIONS: usize = 20_000;
const KEY_RANGE: u32 = 1_000;

fn check_against(
    map: &BiMap<u32, u32>,
    by_left: &BTreeMap<u32, u32>,
    by_right: &BTreeMap<u32, u32>,
) {
    assert_eq!(map.len(), by_left.len());
    assert_eq!(map.len(), by_right.len());

    let left_pairs: Vec<(u32, u32)> = map.iter_left().map(|(l, r)| (*l, *r)).collect();
    let expected: Vec<(u32, u32)> = by_left.iter().map(|(l, r)| (*l, *r)).collect();
    assert_eq!(left_pairs, expected);

    let right_pairs: Vec<(u32, u32)> = map.iter_right().map(|(r, l)| (*r, *l)).collect();
    let expected: Vec<(u32, u32)> = by_right.iter().map(|(r, l)| (*r, *l)).collect();
    assert_eq!(right_pairs, expected);

    let mut pos = map.begin_left();
    let mut count = 0;
    while !pos.is_end() {
        let left = map.left_at(pos).unwrap();
        let right = map.right_at(pos.flip()).unwrap();
        assert_eq!(pos.flip().flip(), pos);
        assert_eq!(map.find_right(right), pos.flip());
        assert_eq!(map.at_right(right), Ok(left));
        pos = map.next_left(pos);
        count += 1;
    }
    assert_eq!(count, map.len());
}

#[test]
fn int_test_random_operations() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut map = BiMap::new();
    let mut by_left = BTreeMap::new();
    let mut by_right = BTreeMap::new();

    for i in 0..NUM_OF_OPERATIONS {
        let left = rng.random_range(0..KEY_RANGE);
        let right = rng.random_range(0..KEY_RANGE);
        match rng.random_range(0..4) {
            0 | 1 => {
                let collides = by_left.contains_key(&left) || by_right.contains_key(&right);
                let pos = map.insert(left, right);
                assert_eq!(pos.is_end(), collides);
                if !collides {
                    by_left.insert(left, right);
                    by_right.insert(right, left);
                }
            }
            2 => {
                let expected = by_left.remove(&left);
                if let Some(right) = expected {
                    by_right.remove(&right);
                }
                assert_eq!(map.erase_left(&left), expected.is_some());
            }
            _ => {
                let expected = by_right.remove(&right);
                if let Some(left) = expected {
                    by_left.remove(&left);
                }
                assert_eq!(map.erase_right(&right), expected.is_some());
            }
        }
        if i % 1_000 == 0 {
            check_against(&map, &by_left, &by_right);
        }
    }
    check_against(&map, &by_left, &by_right);
}

#[test]
fn int_test_random_bounds() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut map = BiMap::new();
    let mut by_left = BTreeMap::new();
    for _ in 0..500 {
        let left = rng.random_range(0..KEY_RANGE) * 2;
        if map.insert(left, u64::from(left) * 3).is_end() {
            continue;
        }
        by_left.insert(left, u64::from(left) * 3);
    }

    for key in 0..KEY_RANGE * 2 + 2 {
        let lower = by_left.range(key..).next().map(|(l, _)| l);
        let upper = by_left.range(key + 1..).next().map(|(l, _)| l);
        assert_eq!(map.left_at(map.lower_bound_left(&key)), lower);
        assert_eq!(map.left_at(map.upper_bound_left(&key)), upper);

        let right = u64::from(key) * 3;
        let lower = by_left.range(key..).next().map(|(_, r)| r);
        assert_eq!(map.right_at(map.lower_bound_right(&right)), lower);
    }
}

#[test]
fn int_test_erase_while_walking() {
    let mut map: BiMap<u32, u32> = (0..100).map(|i| (i, 1_000 - i)).collect();
    let mut pos = map.begin_left();
    while !pos.is_end() {
        let left = *map.left_at(pos).unwrap();
        pos = if left % 3 == 0 {
            map.erase_left_at(pos).unwrap()
        } else {
            map.next_left(pos)
        };
    }
    assert_eq!(map.len(), 66);
    assert!(map.left_values().all(|left| left % 3 != 0));
    assert!(map.right_values().all(|right| (1_000 - right) % 3 != 0));
}

#[test]
fn int_test_scenario_strings() {
    let mut map = BiMap::new();
    map.insert(1, "a".to_string());
    map.insert(2, "b".to_string());
    map.insert(3, "c".to_string());

    assert_eq!(map.left_values().cloned().collect::<Vec<u32>>(), vec![1, 2, 3]);
    assert_eq!(map.right_values().cloned().collect::<Vec<String>>(), vec!["a", "b", "c"]);

    assert!(map.erase_left(&2));
    assert_eq!(map.len(), 2);
    assert!(map.find_right(&"b".to_string()).is_end());
    assert_eq!(map.at_left(&1), Ok(&"a".to_string()));
    assert_eq!(map.at_left(&3), Ok(&"c".to_string()));
}

#[test]
fn int_test_scenario_default() {
    let mut map = BiMap::new();
    map.insert(1, "a".to_string());
    assert_eq!(map.at_left_or_default(&5), "");
    assert_eq!(map.at_right(&String::new()), Ok(&5));

    map.insert(7, "q".to_string());
    assert_eq!(map.at_left_or_default(&9), "");
    assert_eq!(map.at_left(&5), Err(Error::MissingKey));
    assert_eq!(map.at_right(&String::new()), Ok(&9));
    assert_eq!(map.len(), 3);
}

#[test]
fn int_test_round_trip() {
    let mut map = BiMap::new();
    map.insert('x', 42);
    assert_eq!(map.at_left(&'x'), Ok(&42));
    assert_eq!(map.at_right(&42), Ok(&'x'));
    assert!(map.erase_left(&'x'));
    assert_eq!(map.at_left(&'x'), Err(Error::MissingKey));
    assert_eq!(map.at_right(&42), Err(Error::MissingKey));
}

#[test]
fn int_test_clone_is_independent() {
    let map: BiMap<u32, u32> = (0..50).map(|i| (i, i + 50)).collect();
    let pos = map.find_left(&10);
    let mut copy = map.clone();
    copy.erase_left_range(copy.begin_left(), copy.end_left());
    assert!(copy.is_empty());
    assert_eq!(map.len(), 50);
    assert_eq!(map.right_at(pos.flip()), Some(&60));
}

#[test]
fn int_test_seed_does_not_change_contents() {
    let pairs: Vec<(u32, u32)> = (0..200).map(|i| (i * 7 % 200, i)).collect();
    let mut a = BiMap::new().with_seed(1);
    let mut b = BiMap::new().with_seed(2);
    a.extend(pairs.iter().cloned());
    b.extend(pairs.iter().rev().cloned());
    assert_eq!(a, b);
}
