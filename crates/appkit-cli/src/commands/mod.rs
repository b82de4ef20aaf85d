//! CLI 명령어 구현 모듈.

pub mod breakpoint;
pub mod errors;
pub mod storage;
