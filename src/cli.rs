//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 서브커맨드 파싱을 담당합니다.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// jlines CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "jlines",
    author = "YourName <your@email.com>",
    version,
    about = "JSONL TRANSFORM TOOL - JSON 파일 병합, 미리보기, 재직렬화를 위한 JSONL CLI 도구",
    long_about = r#"
JSONL TRANSFORM TOOL
====================

JSONL (JSON Lines) 파일을 다루는 세 가지 작업을 제공합니다.

  combine  개별 JSON 파일들을 하나의 JSONL 스트림으로 병합
  head     JSONL 파일의 첫 레코드를 보기 좋게 출력
  clean    JSONL 파일을 한 줄당 한 레코드의 압축 형식으로 재직렬화

예제:
  jlines combine result.jsonl a.json b.json c.json
  jlines combine - a.json b.json
  jlines head data.jsonl
  cat doc.json | jlines head -
  jlines clean messy.jsonl clean.jsonl
"#
)]
pub struct Cli {
    /// 실행할 서브커맨드
    #[command(subcommand)]
    pub command: Command,
}

/// 사용 가능한 서브커맨드
#[derive(Subcommand, Debug)]
pub enum Command {
    /// 여러 JSON 파일을 하나의 JSONL 파일로 병합
    ///
    /// 각 입력 파일은 JSONL이 아닌 단일 JSON 문서(객체/배열)로 읽습니다.
    /// 파싱에 실패한 파일은 경고 후 건너뛰고 나머지를 계속 처리합니다.
    Combine {
        /// 생성될 JSONL 파일 경로 ("-"는 표준 출력)
        output: String,

        /// 병합할 JSON 파일 경로들 (존재해야 함)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// JSONL 파일의 첫 레코드를 들여쓰기/컬러 형식으로 출력
    ///
    /// 출력 전에 전체 레코드의 키 일관성을 검사하며, 일관되지 않으면
    /// 경고만 출력하고 데이터는 출력하지 않습니다.
    Head {
        /// 읽을 JSONL 파일 경로 ("-"는 표준 입력)
        file: String,
    },

    /// JSONL 파일을 압축된 한 줄당 한 레코드 형식으로 재직렬화
    ///
    /// 레코드 내용은 변경하지 않고 공백/포맷 차이만 정규화합니다.
    Clean {
        /// 읽을 JSONL 파일 경로 ("-"는 표준 입력)
        file: String,

        /// 생성될 JSONL 파일 경로 ("-"는 특별 취급하지 않음)
        output: PathBuf,
    },
}
