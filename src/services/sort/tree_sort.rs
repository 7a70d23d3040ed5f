//! 二叉搜索树排序
//!
//! 节点存放在 arena 中，用下标代替指针；树在一次中序遍历后即丢弃。
//! 插入规则：小于走左，大于等于走右，因此相等元素保持输入顺序（稳定）。

struct Node<T> {
    key: T,
    left: Option<usize>,
    right: Option<usize>,
}

struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T: Ord + Copy> Tree<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    fn insert(&mut self, key: T) {
        let new_index = self.nodes.len();
        self.nodes.push(Node {
            key,
            left: None,
            right: None,
        });

        if new_index == 0 {
            return;
        }

        // 根节点固定为 0
        let mut current = 0;
        loop {
            let node = &mut self.nodes[current];
            let slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(new_index);
                    return;
                }
            }
        }
    }

    /// 中序遍历（左、根、右），依次写入 `out`
    fn write_in_order(&self, out: &mut [T]) {
        let mut stack = Vec::new();
        let mut current = if self.nodes.is_empty() { None } else { Some(0) };
        let mut index = 0;

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = self.nodes[node].left;
            }
            if let Some(node) = stack.pop() {
                out[index] = self.nodes[node].key;
                index += 1;
                current = self.nodes[node].right;
            }
        }
    }
}

/// 按原数组顺序建树，再中序遍历写回
pub fn tree_sort<T: Ord + Copy>(items: &mut [T]) {
    let mut tree = Tree::with_capacity(items.len());
    for &item in items.iter() {
        tree.insert(item);
    }
    tree.write_in_order(items);
}
