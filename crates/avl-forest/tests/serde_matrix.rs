#![cfg(feature = "serde")]

use avl_forest::AvlTree;

#[test]
fn serializes_in_pre_order() {
    let tree = AvlTree::from_values([41, 20, 65, 11, 50, 29, 26, 23, 55]);
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, "[41,20,11,26,23,29,55,50,65]");
    assert_eq!(serde_json::to_string(&AvlTree::<i32>::new()).unwrap(), "[]");
}

#[test]
fn deserializes_by_reinsertion() {
    let tree: AvlTree<i32> = serde_json::from_str("[3, 1, 2, 2]").unwrap();
    tree.assert_valid().unwrap();
    assert_eq!(tree.to_pre_order_vec(), vec![2, 1, 3]);

    let original = AvlTree::from_values(["m", "c", "x", "a"].map(String::from));
    let json = serde_json::to_string(&original).unwrap();
    let restored: AvlTree<String> = serde_json::from_str(&json).unwrap();
    assert!(restored.iter().eq(original.iter()));
    restored.assert_valid().unwrap();
}

#[test]
fn rejects_non_sequence() {
    assert!(serde_json::from_str::<AvlTree<i32>>("{\"a\": 1}").is_err());
}
