use crate::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let min = match tree {
        Some(ref mut node) if node.left.is_some() => remove_min(&mut node.left),
        _ => {
            return match tree.take() {
                Some(mut node) => {
                    *tree = node.right.take();
                    node
                },
                None => unreachable!(),
            };
        },
    };
    balance(tree);
    min
}

pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Greater => insert(&mut node.right, value),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match value.cmp(&node.value) {
            Ordering::Less => {
                let ret = remove(&mut node.left, value);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, value);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    let successor = remove_min(&mut node.right);
                    let removed = mem::replace(&mut node.value, successor.value);
                    *tree = Some(node);
                    Some(removed)
                } else {
                    let Node { value, left, right, .. } = *node;
                    *tree = left.or(right);
                    Some(value)
                }
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match value.cmp(&node.value) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

#[cfg(test)]
mod tests {
    use super::{contains, height, insert, max, min, remove, Tree};
    use rand::Rng;
    use std::cmp;
    use std::collections::BTreeSet;

    // returns the verified height of the subtree
    fn assert_invariants<T: Ord>(tree: &Tree<T>) -> usize {
        match tree {
            None => 0,
            Some(ref node) => {
                let left_height = assert_invariants(&node.left);
                let right_height = assert_invariants(&node.right);
                assert_eq!(node.height, cmp::max(left_height, right_height) + 1);
                assert!((left_height as i32 - right_height as i32).abs() <= 1);
                node.height
            },
        }
    }

    fn in_order<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
        if let Some(ref node) = tree {
            in_order(&node.left, values);
            values.push(&node.value);
            in_order(&node.right, values);
        }
    }

    fn collect<T: Clone>(tree: &Tree<T>) -> Vec<T> {
        let mut values = Vec::new();
        in_order(tree, &mut values);
        values.into_iter().cloned().collect()
    }

    fn build(values: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for &value in values {
            assert!(insert(&mut tree, value));
        }
        tree
    }

    #[test]
    fn test_insert_left_left() {
        let tree = build(&[3, 2, 1]);
        assert_eq!(tree.as_ref().map(|node| node.value), Some(2));
        assert_eq!(height(&tree), 2);
        assert_invariants(&tree);
    }

    #[test]
    fn test_insert_right_right() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(tree.as_ref().map(|node| node.value), Some(2));
        assert_eq!(height(&tree), 2);
        assert_invariants(&tree);
    }

    #[test]
    fn test_insert_left_right() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(tree.as_ref().map(|node| node.value), Some(2));
        assert_eq!(height(&tree), 2);
        assert_invariants(&tree);
    }

    #[test]
    fn test_insert_right_left() {
        let tree = build(&[1, 3, 2]);
        assert_eq!(tree.as_ref().map(|node| node.value), Some(2));
        assert_eq!(height(&tree), 2);
        assert_invariants(&tree);
    }

    #[test]
    fn test_insert_duplicate_is_noop() {
        let mut tree = build(&[2, 1, 3]);
        assert!(!insert(&mut tree, 2));
        assert!(!insert(&mut tree, 1));
        assert_eq!(collect(&tree), vec![1, 2, 3]);
        assert_eq!(height(&tree), 2);
        assert_invariants(&tree);
    }

    #[test]
    fn test_remove_empty() {
        let mut tree: Tree<u32> = None;
        assert_eq!(remove(&mut tree, &1), None);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(remove(&mut tree, &4), None);
        assert_eq!(collect(&tree), vec![1, 2, 3]);
        assert_invariants(&tree);
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert_eq!(collect(&tree), vec![2, 3]);
        assert_invariants(&tree);
    }

    #[test]
    fn test_remove_single_child() {
        let mut tree = build(&[2, 1, 4, 3]);
        assert_eq!(remove(&mut tree, &4), Some(4));
        assert_eq!(collect(&tree), vec![1, 2, 3]);
        assert_invariants(&tree);
    }

    #[test]
    fn test_remove_two_children_replaces_with_successor() {
        let mut tree = build(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(remove(&mut tree, &50), Some(50));
        assert_eq!(tree.as_ref().map(|node| node.value), Some(60));
        assert_eq!(collect(&tree), vec![20, 30, 40, 60, 70, 80]);
        assert_invariants(&tree);
    }

    #[test]
    fn test_remove_last_node() {
        let mut tree = build(&[1]);
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert!(tree.is_none());
        assert_eq!(height(&tree), 0);
    }

    #[test]
    fn test_remove_rebalances() {
        let mut tree = build(&[2, 1, 3, 4]);
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert_eq!(tree.as_ref().map(|node| node.value), Some(3));
        assert_eq!(collect(&tree), vec![2, 3, 4]);
        assert_invariants(&tree);
    }

    #[test]
    fn test_contains() {
        let tree = build(&[2, 1, 3]);
        assert!(contains(&tree, &1));
        assert!(contains(&tree, &2));
        assert!(contains(&tree, &3));
        assert!(!contains(&tree, &0));
        assert!(!contains(&tree, &4));
    }

    #[test]
    fn test_min_max() {
        let tree = build(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(min(&tree), Some(&20));
        assert_eq!(max(&tree), Some(&80));

        let empty: Tree<u32> = None;
        assert_eq!(min(&empty), None);
        assert_eq!(max(&empty), None);
    }

    #[test]
    fn test_ascending_inserts_stay_balanced() {
        let mut tree = None;
        for value in 1..=7u32 {
            insert(&mut tree, value);
        }
        assert_eq!(height(&tree), 3);
        assert_invariants(&tree);
    }

    #[test]
    fn test_logarithmic_height_bound() {
        let mut tree = None;
        for value in 0..1000u32 {
            insert(&mut tree, value);
            let n = f64::from(value + 1);
            assert!(height(&tree) as f64 <= 1.44 * (n + 2.0).log2());
        }
        assert_invariants(&tree);
    }

    #[test]
    fn test_stress() {
        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
        let mut tree: Tree<u32> = None;
        let mut expected = BTreeSet::new();

        for _ in 0..2000 {
            let value = rng.gen_range(0, 500);
            if rng.gen::<bool>() {
                assert_eq!(insert(&mut tree, value), expected.insert(value));
            } else {
                assert_eq!(remove(&mut tree, &value), expected.take(&value));
            }
            assert_invariants(&tree);
        }

        assert_eq!(collect(&tree), expected.iter().cloned().collect::<Vec<u32>>());
        for value in 0..500 {
            assert_eq!(contains(&tree, &value), expected.contains(&value));
        }
    }
}
