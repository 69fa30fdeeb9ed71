use crate::token::{classify, TokenKind};

/// 拼接最终的 class 字符串
///
/// 顺序：`base`、`base + modifier`（每个 modifier）、工具类（原样）。
/// element token 已经并入 `base`，这里直接跳过。
pub fn assemble(base: &str, tokens: &[String]) -> String {
    let mut modifiers = Vec::new();
    let mut utilities = Vec::new();

    for token in tokens {
        match classify(token) {
            TokenKind::Element => {}
            TokenKind::Modifier => modifiers.push(format!("{}{}", base, token)),
            TokenKind::Utility => utilities.push(token.as_str()),
        }
    }

    let mut classes = Vec::with_capacity(1 + modifiers.len() + utilities.len());
    classes.push(base);
    classes.extend(modifiers.iter().map(String::as_str));
    classes.extend(utilities);
    classes.join(" ")
}
