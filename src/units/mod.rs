//! 단위 정의 및 변환 모듈 모음.

pub mod length;

pub use length::{convert_length, unit_label, LengthUnit};
