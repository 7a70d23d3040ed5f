//! 字符串变换 - 业务能力层
//!
//! 纯函数，无失败路径

/// 对输入做确定性变换
///
/// - 偶数长度：按 `len / 2` 切成两半，各自反转后拼接
/// - 奇数长度：整体反转后再接上原串
/// - 空串返回空串
pub fn process(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();

    if chars.len() % 2 == 0 {
        let (first_half, second_half) = chars.split_at(chars.len() / 2);
        first_half
            .iter()
            .rev()
            .chain(second_half.iter().rev())
            .collect()
    } else {
        chars.iter().rev().chain(chars.iter()).collect()
    }
}
