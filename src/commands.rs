//! 서브커맨드 실행 모듈
//!
//! combine / head / clean 세 작업의 실제 처리 로직을 담당합니다.
//! 상태 메시지(경고)는 항상 표준 에러로, 데이터는 표준 출력 또는
//! 대상 파일로만 나갑니다.

use colored::Colorize;
use serde_json::Value;
use std::path::PathBuf;

use crate::check::keys_consistent;
use crate::error::{JlinesError, Result};
use crate::jsonl::{self, InputSource, OutputTarget};
use crate::render;

/// 여러 JSON 파일을 하나의 JSONL 스트림으로 병합
///
/// 각 입력 파일은 단일 JSON 문서 전체로 읽습니다 (JSONL 아님 —
/// 출력 형식과의 의도적 비대칭). 파싱에 실패한 파일은 경고 후
/// 건너뛰고 배치를 계속하며, I/O 실패는 치명적입니다.
///
/// # Errors
///
/// 존재하지 않는 입력 경로는 처리 시작 전에 `InputNotFound`로
/// 실패합니다.
pub fn combine(output: &OutputTarget, files: &[PathBuf]) -> Result<()> {
    // 사용 오류는 어떤 파일 I/O보다 먼저 보고
    for file in files {
        if !file.exists() {
            return Err(JlinesError::InputNotFound { path: file.clone() });
        }
    }

    let mut documents: Vec<Value> = Vec::with_capacity(files.len());
    for file in files {
        match jsonl::read_document(file) {
            Ok(value) => documents.push(value),
            Err(e) if e.is_recoverable_parse() => {
                eprintln!(
                    "{}",
                    format!(
                        "warning: {} 은(는) 유효한 JSON 파일이 아니므로 건너뜁니다",
                        file.display()
                    )
                    .yellow()
                );
            }
            Err(e) => return Err(e),
        }
    }

    jsonl::write_records(&documents, output)
}

/// JSONL 파일의 첫 레코드를 들여쓰기/컬러 형식으로 출력
///
/// 출력 전에 전체 레코드의 키 일관성을 검사합니다. 일관되지 않으면
/// 표준 에러로 경고만 출력하고 데이터 없이 정상 종료합니다.
///
/// # Errors
///
/// 레코드가 하나도 없으면 `EmptyInput`으로 실패합니다.
pub fn head(source: &InputSource) -> Result<()> {
    source.ensure_exists()?;
    let records = jsonl::read_records(source)?;

    let Some(first) = records.first() else {
        return Err(JlinesError::EmptyInput);
    };

    if !keys_consistent(&records) {
        eprintln!("{}", "warning: 레코드 키가 일관되지 않습니다".red());
        return Ok(());
    }

    println!("{}", render::pretty(first));
    Ok(())
}

/// JSONL 파일을 압축된 한 줄당 한 레코드 형식으로 재직렬화
///
/// 레코드를 읽은 그대로 다시 쓰며 내용 변경, 중복 제거, 필터링은
/// 하지 않습니다. 출력 인자의 "-"는 combine과 달리 특별 취급하지
/// 않고 문자 그대로의 경로로 사용합니다.
pub fn clean(source: &InputSource, output: &PathBuf) -> Result<()> {
    source.ensure_exists()?;
    let records = jsonl::read_records(source)?;
    jsonl::write_records(&records, &OutputTarget::Path(output.clone()))
}
