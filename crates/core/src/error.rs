/// bemify 错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BemifyError {
    /// 一次调用里出现了多个 BEM element（一个节点不可能同时是两个 element）
    MultipleElements { count: usize, elements: Vec<String> },
}

impl std::fmt::Display for BemifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BemifyError::MultipleElements { count, elements } => write!(
                f,
                "bemify - Only a single element is allowed, but got {} ({}).",
                count,
                elements.join(", ")
            ),
        }
    }
}

impl std::error::Error for BemifyError {}
