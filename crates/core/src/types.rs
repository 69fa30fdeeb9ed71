use indexmap::IndexMap;

/// 输入：后缀描述
///
/// 描述当前节点需要哪些 modifier / element / 工具类，支持以下形式：
/// - 空：不产生任何 token
/// - 字符串：`"--active __icon u-hidden"`，按空白拆分
/// - 列表：任意嵌套，依次展开
/// - 映射：`{ "--active": true, "--disabled": false }`，只取值为真的 key
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SuffixDescription {
    #[default]
    Empty,
    Classes(String),
    List(Vec<SuffixDescription>),
    /// key 同样可以包含多个空白分隔的 token
    Map(IndexMap<String, Flag>),
}

impl SuffixDescription {
    /// 从任意可迭代对象构造列表形式
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SuffixDescription>,
    {
        SuffixDescription::List(items.into_iter().map(Into::into).collect())
    }

    /// 从 (key, flag) 对构造映射形式，保持插入顺序
    ///
    /// ```
    /// use bemify_core::SuffixDescription;
    ///
    /// let desc = SuffixDescription::map([("--active", true), ("--disabled", false)]);
    /// assert_eq!(bemify_core::bemify("button", &[desc]).unwrap(), "button button--active");
    /// ```
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Flag>,
    {
        SuffixDescription::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<&str> for SuffixDescription {
    fn from(classes: &str) -> Self {
        SuffixDescription::Classes(classes.to_string())
    }
}

impl From<String> for SuffixDescription {
    fn from(classes: String) -> Self {
        SuffixDescription::Classes(classes)
    }
}

impl From<&String> for SuffixDescription {
    fn from(classes: &String) -> Self {
        SuffixDescription::Classes(classes.clone())
    }
}

impl<T: Into<SuffixDescription>> From<Option<T>> for SuffixDescription {
    fn from(value: Option<T>) -> Self {
        value.map_or(SuffixDescription::Empty, Into::into)
    }
}

impl<T: Into<SuffixDescription>> From<Vec<T>> for SuffixDescription {
    fn from(items: Vec<T>) -> Self {
        SuffixDescription::list(items)
    }
}

impl<K: Into<String>, V: Into<Flag>> From<IndexMap<K, V>> for SuffixDescription {
    fn from(map: IndexMap<K, V>) -> Self {
        SuffixDescription::map(map)
    }
}

/// 映射形式中的值（松散类型）
#[derive(Debug, Clone, PartialEq)]
pub enum Flag {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// 数组 / 对象，永远为真
    Object,
}

impl Flag {
    /// 真值判断
    ///
    /// 以下视为假：`Null`、`false`、`0`、`NaN`、空字符串，其余均为真。
    pub fn is_truthy(&self) -> bool {
        match self {
            Flag::Null => false,
            Flag::Bool(b) => *b,
            Flag::Number(n) => *n != 0.0 && !n.is_nan(),
            Flag::Text(s) => !s.is_empty(),
            Flag::Object => true,
        }
    }
}

impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        Flag::Bool(b)
    }
}

impl From<i32> for Flag {
    fn from(n: i32) -> Self {
        Flag::Number(n as f64)
    }
}

impl From<i64> for Flag {
    fn from(n: i64) -> Self {
        Flag::Number(n as f64)
    }
}

impl From<f64> for Flag {
    fn from(n: f64) -> Self {
        Flag::Number(n)
    }
}

impl From<&str> for Flag {
    fn from(s: &str) -> Self {
        Flag::Text(s.to_string())
    }
}

impl From<String> for Flag {
    fn from(s: String) -> Self {
        Flag::Text(s)
    }
}

impl<T: Into<Flag>> From<Option<T>> for Flag {
    fn from(value: Option<T>) -> Self {
        value.map_or(Flag::Null, Into::into)
    }
}
