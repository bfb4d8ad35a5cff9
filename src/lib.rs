//! 길이 단위 변환 로직을 라이브러리로 분리하여 CLI 바이너리와 테스트가 함께 쓴다.

pub mod app;
pub mod conversion;
pub mod ui_cli;
pub mod units;
