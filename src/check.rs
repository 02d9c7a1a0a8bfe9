//! 키 일관성 검사 모듈
//!
//! 레코드 컬렉션의 최상위 키 집합이 모두 동일한지 확인합니다.

use serde_json::Value;
use std::collections::BTreeSet;

/// 레코드의 최상위 키 집합 추출 (객체가 아니면 None)
fn key_set(record: &Value) -> Option<BTreeSet<&str>> {
    record
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
}

/// 모든 레코드의 최상위 키 집합이 첫 레코드와 동일한지 확인
///
/// 키의 존재 여부만 비교하며 값 타입이나 중첩 구조는 무시합니다.
/// 길이 0 또는 1의 시퀀스는 자명하게 일관됩니다. 객체가 아닌
/// 레코드는 키 집합이 없는 것으로 취급하므로, 객체가 아닌 레코드는
/// 객체가 아닌 레코드끼리만 일관됩니다.
pub fn keys_consistent(records: &[Value]) -> bool {
    let Some(first) = records.first() else {
        return true;
    };
    let keys = key_set(first);
    records[1..].iter().all(|record| key_set(record) == keys)
}
