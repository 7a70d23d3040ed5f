//! 快速排序
//!
//! Lomuto 分区，枢轴取当前区间最后一个元素。
//! 只对较短的一侧递归，较长的一侧在循环里继续处理，递归深度不超过 log2(n)

/// 原地快速排序
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if items.len() > 1 {
        let high = items.len() - 1;
        sort_range(items, 0, high);
    }
}

fn sort_range<T: Ord>(items: &mut [T], mut low: usize, mut high: usize) {
    while low < high {
        let pivot_index = partition(items, low, high);

        if pivot_index - low < high - pivot_index {
            if pivot_index > low {
                sort_range(items, low, pivot_index - 1);
            }
            low = pivot_index + 1;
        } else {
            // 此分支中 pivot_index > low，不会下溢
            sort_range(items, pivot_index + 1, high);
            high = pivot_index - 1;
        }
    }
}

/// 把 `<= pivot` 的元素移到左侧，返回枢轴最终位置
fn partition<T: Ord>(items: &mut [T], low: usize, high: usize) -> usize {
    let mut store = low;

    for j in low..high {
        if items[j] <= items[high] {
            items.swap(store, j);
            store += 1;
        }
    }

    items.swap(store, high);
    store
}
