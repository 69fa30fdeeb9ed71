use crate::error::BemifyError;
use crate::token::is_element;

/// 找出唯一的 element 并拼到 block 后面
///
/// 没有 element 时返回 block 本身；超过一个时报错，
/// 一个 BEM 节点不可能同时是两个 element。
pub fn resolve_element(block: &str, tokens: &[String]) -> Result<String, BemifyError> {
    let elements: Vec<&String> = tokens
        .iter()
        .filter(|token| is_element(token))
        .collect();

    match elements.as_slice() {
        [] => Ok(block.to_string()),
        [element] => Ok(format!("{}{}", block, element)),
        _ => Err(BemifyError::MultipleElements {
            count: elements.len(),
            elements: elements.iter().map(|element| element.to_string()).collect(),
        }),
    }
}
