use crate::assemble::assemble;
use crate::element::resolve_element;
use crate::error::BemifyError;
use crate::normalize::normalize_suffixes;
use crate::types::SuffixDescription;

/// 生成 BEM class 字符串（立即调用形式）
///
/// # 示例
///
/// ```
/// use bemify_core::{bemify, SuffixDescription};
///
/// let class = bemify("block", &[SuffixDescription::from("--mod util")]).unwrap();
/// assert_eq!(class, "block block--mod util");
///
/// let class = bemify("block", &[vec!["--a", "__el", "--b"].into()]).unwrap();
/// assert_eq!(class, "block__el block__el--a block__el--b");
///
/// assert!(bemify("block", &["__a __b".into()]).is_err());
/// ```
pub fn bemify(block: &str, suffixes: &[SuffixDescription]) -> Result<String, BemifyError> {
    let tokens = normalize_suffixes(suffixes);
    let base = resolve_element(block, &tokens)?;
    Ok(assemble(&base, &tokens))
}

/// 延迟调用形式：先给出 block，之后再提供后缀描述
pub fn with_block(block: impl Into<String>) -> Bemifier {
    Bemifier::new(block)
}

/// 绑定了 block 的 class 生成器，可重复使用
#[derive(Debug, Clone, PartialEq)]
pub struct Bemifier {
    block: String,
}

impl Bemifier {
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
        }
    }

    pub fn block(&self) -> &str {
        &self.block
    }

    /// 不传任何描述时返回 block 本身
    pub fn build(&self, suffixes: &[SuffixDescription]) -> Result<String, BemifyError> {
        bemify(&self.block, suffixes)
    }

    /// 转成普通闭包，方便传给只接受函数的调用方
    pub fn into_fn(self) -> impl Fn(&[SuffixDescription]) -> Result<String, BemifyError> {
        move |suffixes: &[SuffixDescription]| self.build(suffixes)
    }
}

/// 可变参数形式：`bemify!("block", "--a", vec!["__el"], map)`
///
/// 每个参数都通过 `SuffixDescription::from` 转换。
#[macro_export]
macro_rules! bemify {
    ($block:expr $(, $suffix:expr)* $(,)?) => {
        $crate::bemify($block, &[$($crate::SuffixDescription::from($suffix)),*])
    };
}
