//! 터미널 출력 렌더링 모듈
//!
//! head의 첫 레코드를 들여쓰기/컬러 형식으로 렌더링합니다.
//! 변환 로직과 분리된 표현 계층이며, 컬러는 colored의 전역
//! 설정(터미널 감지, NO_COLOR)을 따릅니다.

use colored::Colorize;
use serde_json::Value;

/// 들여쓰기 단위 (공백 수)
const INDENT: usize = 2;

/// JSON 값을 들여쓰기된 컬러 문자열로 렌더링
pub fn pretty(value: &Value) -> String {
    let mut out = String::new();
    render_value(value, 0, &mut out);
    out
}

fn render_value(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str(&"null".magenta().to_string()),
        Value::Bool(b) => out.push_str(&b.to_string().magenta().to_string()),
        Value::Number(n) => out.push_str(&n.to_string().yellow().to_string()),
        Value::String(s) => out.push_str(&quote(s).green().to_string()),
        Value::Array(items) => render_array(items, depth, out),
        Value::Object(map) => render_object(map, depth, out),
    }
}

fn render_array(items: &[Value], depth: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }

    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('\n');
        out.push_str(&indent(depth + 1));
        render_value(item, depth + 1, out);
    }
    out.push('\n');
    out.push_str(&indent(depth));
    out.push(']');
}

fn render_object(map: &serde_json::Map<String, Value>, depth: usize, out: &mut String) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('\n');
        out.push_str(&indent(depth + 1));
        out.push_str(&quote(key).bright_cyan().to_string());
        out.push_str(": ");
        render_value(value, depth + 1, out);
    }
    out.push('\n');
    out.push_str(&indent(depth));
    out.push('}');
}

fn indent(depth: usize) -> String {
    " ".repeat(depth * INDENT)
}

/// 문자열을 JSON 이스케이프 규칙대로 따옴표로 감싸기
fn quote(s: &str) -> String {
    // 직렬화는 문자열에 대해 실패하지 않음
    serde_json::to_string(&Value::String(s.to_string())).unwrap_or_else(|_| format!("\"{}\"", s))
}
