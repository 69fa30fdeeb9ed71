use crate::types::SuffixDescription;

/// 规范化后缀描述
///
/// 功能：
/// 1. 依次展开所有描述（列表递归展开，映射只取真值 key）
/// 2. 按空白拆分
/// 3. 去除空字符串
/// 4. 排序（字典序，保证确定性）
///
/// 注意：不去重，重复的 token 会原样保留。
pub fn normalize_suffixes(descriptions: &[SuffixDescription]) -> Vec<String> {
    let mut tokens = Vec::new();

    for description in descriptions {
        collect_tokens(description, &mut tokens);
    }

    tokens.sort();
    tokens
}

fn collect_tokens(description: &SuffixDescription, out: &mut Vec<String>) {
    match description {
        SuffixDescription::Empty => {}
        SuffixDescription::Classes(classes) => split_classes(classes, out),
        SuffixDescription::List(items) => {
            for item in items {
                collect_tokens(item, out);
            }
        }
        SuffixDescription::Map(map) => {
            for (key, flag) in map {
                if flag.is_truthy() {
                    split_classes(key, out);
                }
            }
        }
    }
}

fn split_classes(classes: &str, out: &mut Vec<String>) {
    // split_whitespace 不会产生空字符串
    out.extend(classes.split_whitespace().map(str::to_string));
}
