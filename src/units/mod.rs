//! 단위 정의 모듈 모음.

pub mod length;

pub use length::LengthUnit;
