extern crate avl_tree;

use avl_tree::AvlSet;

fn main() {
    let mut set = AvlSet::new();
    for value in &[50, 30, 70, 20, 40, 60, 80] {
        set.insert(*value);
    }

    let values = set.iter().collect::<Vec<&i32>>();
    println!("In-order traversal: {:?}", values);

    set.remove(&30);

    let values = set.iter().collect::<Vec<&i32>>();
    println!("In-order traversal after removing 30: {:?}", values);

    let found = |present| if present { "Found" } else { "Not found" };
    println!("Searching for 60: {}", found(set.contains(&60)));
    println!("Searching for 30: {}", found(set.contains(&30)));
}
