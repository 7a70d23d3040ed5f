//! 排序策略 - 业务能力层
//!
//! 两种可互换的排序算法，由请求中的 `SortAlgorithm` 选择

pub mod quick_sort;
pub mod tree_sort;

pub use quick_sort::quick_sort;
pub use tree_sort::tree_sort;

use crate::models::SortAlgorithm;

impl SortAlgorithm {
    /// 按字符编码升序原地排序
    pub fn sort(self, chars: &mut [char]) {
        match self {
            SortAlgorithm::QuickSort => quick_sort(chars),
            SortAlgorithm::TreeSort => tree_sort(chars),
        }
    }

    /// 排序字符串中的字符
    pub fn sort_str(self, input: &str) -> String {
        let mut chars: Vec<char> = input.chars().collect();
        self.sort(&mut chars);
        chars.into_iter().collect()
    }
}
