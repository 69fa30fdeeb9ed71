pub const ELEMENT_PREFIX: &str = "__";
pub const MODIFIER_PREFIX: &str = "--";

/// 后缀 token 的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `__icon`，并入 block 成为新的前缀
    Element,
    /// `--active`，拼接在前缀后面
    Modifier,
    /// 非 BEM 后缀，原样输出
    Utility,
}

pub fn classify(token: &str) -> TokenKind {
    if token.starts_with(ELEMENT_PREFIX) {
        TokenKind::Element
    } else if token.starts_with(MODIFIER_PREFIX) {
        TokenKind::Modifier
    } else {
        TokenKind::Utility
    }
}

pub fn is_element(token: &str) -> bool {
    classify(token) == TokenKind::Element
}
