//! JSONL 입출력 모듈
//!
//! 레코드 시퀀스의 읽기/쓰기와 단일 JSON 문서 파싱을 담당합니다.

use memmap2::Mmap;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{JlinesError, Result};

/// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
const MMAP_THRESHOLD: u64 = 10 * 1024 * 1024; // 10MB

/// 읽기 소스: 파일 경로 또는 표준 입력
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// 표준 입력 스트림
    Stdin,
    /// 디스크 상의 파일 경로
    Path(PathBuf),
}

impl InputSource {
    /// CLI 인자 문자열을 소스로 변환 ("-"는 표준 입력)
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }

    /// 경로 소스인 경우 파일 존재 여부 확인
    ///
    /// # Errors
    ///
    /// 경로가 존재하지 않으면 `InputNotFound`를 반환합니다.
    pub fn ensure_exists(&self) -> Result<()> {
        if let Self::Path(path) = self {
            if !path.exists() {
                return Err(JlinesError::InputNotFound { path: path.clone() });
            }
        }
        Ok(())
    }
}

/// 쓰기 대상: 파일 경로 또는 표준 출력
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// 표준 출력 스트림
    Stdout,
    /// 디스크 상의 파일 경로 (생성 또는 덮어쓰기)
    Path(PathBuf),
}

impl OutputTarget {
    /// CLI 인자 문자열을 대상으로 변환 ("-"는 표준 출력)
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }
}

/// 소스에서 레코드 시퀀스 읽기
///
/// 파일 경로면 한 줄씩 읽어 비어 있지 않은 각 줄을 독립된 JSON 값으로
/// 파싱하고, 표준 입력이면 스트림 전체를 하나의 JSON 값으로 파싱하여
/// 단일 레코드 컬렉션으로 감쌉니다 (원래 계약의 의도적 비대칭).
///
/// # Errors
///
/// 유효하지 않은 줄이 하나라도 있으면 `LineParse`로 전체 읽기가 실패합니다.
pub fn read_records(source: &InputSource) -> Result<Vec<Value>> {
    match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut buf)?;
            let value: Value = serde_json::from_str(&buf).map_err(|e| {
                JlinesError::StdinParse {
                    reason: e.to_string(),
                }
            })?;
            Ok(vec![value])
        }
        InputSource::Path(path) => read_lines(path),
    }
}

/// 파일을 줄 단위로 읽어 레코드 시퀀스로 파싱
fn read_lines(path: &Path) -> Result<Vec<Value>> {
    let file = File::open(path).map_err(|e| JlinesError::FileOpen {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(trimmed).map_err(|e| {
            JlinesError::LineParse {
                file: path.to_path_buf(),
                line: line_num + 1,
                reason: e.to_string(),
            }
        })?;
        records.push(value);
    }

    Ok(records)
}

/// 파일 전체를 단일 JSON 문서로 파싱 (combine 입력용)
///
/// 대용량 파일은 메모리 매핑으로, 일반 파일은 버퍼 리더로 파싱합니다.
///
/// # Errors
///
/// 열기 실패는 `FileOpen`, 파싱 실패는 `Parse`를 반환합니다.
pub fn read_document(path: &Path) -> Result<Value> {
    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    if file_size >= MMAP_THRESHOLD {
        parse_with_mmap(path)
    } else {
        parse_with_reader(path)
    }
}

/// 버퍼 리더를 사용한 JSON 파싱
fn parse_with_reader(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| JlinesError::FileOpen {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| JlinesError::Parse {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 메모리 매핑을 사용한 JSON 파싱 (대용량 파일용)
fn parse_with_mmap(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| JlinesError::FileOpen {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mmap = unsafe {
        Mmap::map(&file).map_err(|e| JlinesError::FileOpen {
            file: path.to_path_buf(),
            reason: format!("메모리 매핑 실패: {}", e),
        })?
    };

    serde_json::from_slice(&mmap).map_err(|e| JlinesError::Parse {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 레코드 시퀀스를 JSONL로 쓰기
///
/// 각 레코드를 압축된 한 줄 JSON으로 직렬화하여 입력 순서 그대로
/// 개행으로 끝나는 줄로 씁니다. 파일 대상이면 생성/덮어쓰기 후
/// 모든 종료 경로에서 핸들이 닫힙니다. 임시 파일/원자적 교체는
/// 사용하지 않으므로 중간 실패 시 부분 파일이 남습니다.
///
/// # Errors
///
/// 직렬화 실패는 `Serialize`, 쓰기 실패는 `Io`를 반환합니다.
pub fn write_records(records: &[Value], target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_all(records, &mut handle)
        }
        OutputTarget::Path(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            write_all(records, &mut writer)?;
            writer.flush()?;
            Ok(())
        }
    }
}

/// 레코드들을 순서대로 한 줄씩 직렬화
fn write_all<W: Write>(records: &[Value], writer: &mut W) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(record).map_err(|e| JlinesError::Serialize {
            reason: e.to_string(),
        })?;
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
