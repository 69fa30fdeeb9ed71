use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use bemify_core::{Bemifier, Flag, SuffixDescription};

// ── JS 值 → 后缀描述 ──────────────────────────────────────────

/// 直接遍历 JS 值
///
/// - 字符串 → 按空白拆分
/// - 数组 → 逐项递归，无法识别的项只贡献 0 个 token，不影响兄弟项
/// - 普通对象 → 自有可枚举 key，按 JS 真值判断选取
/// - 其他（`undefined`、`null`、数字、布尔、函数、Symbol 等）→ 空
fn to_description(value: &JsValue) -> SuffixDescription {
    if let Some(classes) = value.as_string() {
        return SuffixDescription::Classes(classes);
    }

    if Array::is_array(value) {
        let items: &Array = value.unchecked_ref();
        return SuffixDescription::List(items.iter().map(|item| to_description(&item)).collect());
    }

    // 函数的 typeof 是 "function"，is_object 为 false
    if value.is_object() {
        let object: &Object = value.unchecked_ref();
        let entries = Object::keys(object)
            .iter()
            .filter_map(|key| {
                let flag = Reflect::get(object, &key).ok()?;
                Some((key.as_string()?, Flag::Bool(flag.is_truthy())))
            })
            .collect();
        return SuffixDescription::Map(entries);
    }

    SuffixDescription::Empty
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 生成 BEM class 字符串
///
/// 只接收一个后缀描述参数，多余的参数会被忽略。
/// 需要传多个描述时放进数组：`bemify("b", ["--a", { "__el": on }])`。
///
/// @param block    - block 名，原样使用
/// @param suffixes - 字符串 / 数组 / `{ [classes]: truthy }` 对象，可嵌套
/// @returns class 字符串，出现多个 element 时抛出异常
#[wasm_bindgen(js_name = "bemify")]
pub fn bemify(block: &str, suffixes: JsValue) -> Result<String, JsError> {
    Ok(bemify_core::bemify(block, &[to_description(&suffixes)])?)
}

/// 延迟调用形式：`new Bemifier("card").build({ "--active": on })`
#[wasm_bindgen(js_name = "Bemifier")]
pub struct JsBemifier {
    inner: Bemifier,
}

#[wasm_bindgen(js_class = "Bemifier")]
impl JsBemifier {
    #[wasm_bindgen(constructor)]
    pub fn new(block: String) -> JsBemifier {
        JsBemifier {
            inner: Bemifier::new(block),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn block(&self) -> String {
        self.inner.block().to_string()
    }

    /// 不传参数时返回 block 本身；多个描述同样放进数组
    pub fn build(&self, suffixes: JsValue) -> Result<String, JsError> {
        Ok(self.inner.build(&[to_description(&suffixes)])?)
    }
}
