//! 핵심 사이징 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 호스트 모델 연동도 쉽게 한다.

pub mod app;
pub mod config;
pub mod model;
pub mod network;
pub mod sizing;
pub mod ui_cli;
pub mod units;
