//! 에러 타입 정의 모듈
//!
//! jlines에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// jlines에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum JlinesError {
    /// 입력 파일이 존재하지 않음
    #[error("입력 파일을 찾을 수 없습니다: {path}")]
    InputNotFound { path: PathBuf },

    /// 파일 열기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpen { file: PathBuf, reason: String },

    /// 단일 JSON 문서 파싱 실패 (combine 입력 파일)
    #[error("JSON 파싱 실패 ({file}): {reason}")]
    Parse { file: PathBuf, reason: String },

    /// JSONL 라인 파싱 실패 (라인 번호는 1부터)
    #[error("JSONL 파싱 실패 ({file}:{line}): {reason}")]
    LineParse {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// 표준 입력 스트림 파싱 실패
    #[error("표준 입력 JSON 파싱 실패: {reason}")]
    StdinParse { reason: String },

    /// 입력에 레코드가 없음 (head)
    #[error("입력에 레코드가 없습니다")]
    EmptyInput,

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패: {reason}")]
    Serialize { reason: String },

    /// 그 외 I/O 실패
    #[error("I/O 실패: {0}")]
    Io(#[from] std::io::Error),
}

/// jlines 결과 타입 별칭
pub type Result<T> = std::result::Result<T, JlinesError>;

impl JlinesError {
    /// combine에서 건너뛰기로 복구 가능한 에러인지 확인
    ///
    /// 파싱 에러만 복구 대상이며, I/O 에러는 항상 치명적입니다.
    pub fn is_recoverable_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
