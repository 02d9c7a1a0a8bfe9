//! jlines - JSONL TRANSFORM TOOL
//!
//! JSONL (JSON Lines) 파일을 다루는 경량 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔗 **combine**: 개별 JSON 파일들을 하나의 JSONL 스트림으로 병합
//! - 👀 **head**: JSONL 파일의 첫 레코드를 키 일관성 검사 후 보기 좋게 출력
//! - 🧹 **clean**: JSONL 파일을 한 줄당 한 레코드의 압축 형식으로 재직렬화
//! - 🎨 **컬러 출력**: 경고와 미리보기를 가독성 높은 컬러로 표시
//! - 📦 **대용량 파일**: 임계값 이상의 combine 입력은 메모리 매핑으로 파싱
//!
//! # 예제
//!
//! ```bash
//! # JSON 파일들을 JSONL로 병합
//! jlines combine result.jsonl a.json b.json
//!
//! # 첫 레코드 미리보기
//! jlines head result.jsonl
//!
//! # 포맷 정리
//! jlines clean messy.jsonl clean.jsonl
//! ```

pub mod check;
pub mod cli;
pub mod commands;
pub mod error;
pub mod jsonl;
pub mod render;

// Re-exports for convenient access
pub use check::keys_consistent;
pub use cli::{Cli, Command};
pub use error::{JlinesError, Result};
pub use jsonl::{read_document, read_records, write_records, InputSource, OutputTarget};
