use iterbst::Tree;

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut HashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::Remove(k) => {
                assert_eq!(bst.delete(k), map.remove(k));
            }
        }
    }
}

fn preorder_keys<K: Copy, V>(tree: &Tree<K, V>) -> Vec<K> {
    tree.iter_preorder().map(|(key, _)| *key).collect()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
        let mut tree = Tree::new();
        let mut map = HashMap::new();

        do_ops(&ops, &mut tree, &mut map);
        tree.len() == map.len() && map.keys().all(|key| tree.search(key) == map.get(key))
    }

    fn inorder_is_strictly_ascending(ops: Vec<Op<i8, i8>>) -> bool {
        let mut tree = Tree::new();
        let mut map = HashMap::new();

        do_ops(&ops, &mut tree, &mut map);
        let keys: Vec<_> = tree.iter().map(|(key, _)| *key).collect();
        keys.windows(2).all(|pair| pair[0] < pair[1]) && tree.validate().is_ok()
    }

    fn every_order_visits_every_node_once(ops: Vec<Op<i8, i8>>) -> bool {
        let mut tree = Tree::new();
        let mut map = HashMap::new();
        do_ops(&ops, &mut tree, &mut map);

        let expected: BTreeSet<i8> = map.keys().copied().collect();
        let preorder = preorder_keys(&tree);
        let postorder: Vec<i8> = tree.iter_postorder().map(|(key, _)| *key).collect();

        preorder.len() == expected.len()
            && postorder.len() == expected.len()
            && preorder.iter().copied().collect::<BTreeSet<_>>() == expected
            && postorder.iter().copied().collect::<BTreeSet<_>>() == expected
            && preorder.first() == postorder.last()
    }

    // A BST is determined by its preorder, so re-inserting in preorder rebuilds the same shape.
    fn preorder_rebuilds_same_tree(ops: Vec<Op<i8, i8>>) -> bool {
        let mut tree = Tree::new();
        let mut map = HashMap::new();
        do_ops(&ops, &mut tree, &mut map);

        let preorder = preorder_keys(&tree);
        let rebuilt: Tree<i8, ()> = preorder.iter().map(|key| (*key, ())).collect();
        preorder_keys(&rebuilt) == preorder
    }

    // Reversed postorder also puts every parent before its children.
    fn reversed_postorder_rebuilds_same_tree(ops: Vec<Op<i8, i8>>) -> bool {
        let mut tree = Tree::new();
        let mut map = HashMap::new();
        do_ops(&ops, &mut tree, &mut map);

        let rebuilt: Tree<i8, ()> = tree
            .iter_postorder()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .map(|(key, _)| (*key, ()))
            .collect();
        preorder_keys(&rebuilt) == preorder_keys(&tree)
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x, *x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x, *x);
        }
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x).is_some())
    }

    fn dispose_empties_everything(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8, i8> = xs.iter().map(|x| (*x, *x)).collect();
        tree.dispose();

        tree.is_empty()
            && tree.len() == 0
            && tree.height() == 0
            && xs.iter().all(|x| tree.search(x).is_none())
    }
}
