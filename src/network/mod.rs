//! 배수 계통 구간 모델과 위상 관련 모듈 모음.

pub mod order;
pub mod orientation;
pub mod segment;
pub mod selector;

pub use order::flow_order;
pub use orientation::{classify, neighbor_endpoints, Orientation};
pub use segment::{Point3, Segment, POINT_TOLERANCE};
pub use selector::select;
