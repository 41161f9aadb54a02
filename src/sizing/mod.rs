//! 사이징 규칙 엔진 모듈 모음.

pub mod capacity;
pub mod enforcer;
pub mod engine;

pub use capacity::{branch_diameter_in, stack_diameter_in, MIN_SLOPE};
pub use engine::{run_pass, PassResult, SegmentResult, MIN_ACTIVE_LOAD};
