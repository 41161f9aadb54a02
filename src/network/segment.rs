use serde::{Deserialize, Serialize};

/// 끝점 일치 판정에 쓰는 좌표 허용 오차 (모델 길이 단위 기준).
pub const POINT_TOLERANCE: f64 = 1e-3;

/// 3차원 좌표. 모델이 선언한 길이 단위를 그대로 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// 두 좌표가 허용 오차 내에서 일치하는지 판정한다.
    pub fn coincides(&self, other: &Point3) -> bool {
        (self.x - other.x).abs() <= POINT_TOLERANCE
            && (self.y - other.y).abs() <= POINT_TOLERANCE
            && (self.z - other.z).abs() <= POINT_TOLERANCE
    }
}

/// 배수 배관 한 구간을 표현한다. 사이징 패스는 `diameter`만 변경한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// 고유 식별자. 동일 고도 정렬의 타이브레이크에도 쓰인다.
    pub id: String,
    pub start: Point3,
    pub end: Point3,
    /// 배수 부하 [DFU]. 0이면 미사용 구간으로 간주해 건너뛴다.
    pub load_units: f64,
    /// 구배 (수평 구간만 의미). 없으면 코드 최소 구배를 대입한다.
    #[serde(default)]
    pub slope: Option<f64>,
    /// 결과 직경 (모델 길이 단위). 패스가 기록한다.
    #[serde(default)]
    pub diameter: Option<f64>,
    /// true면 호스트 측에서 직경 필드를 쓸 수 없는 구간.
    /// 계산에는 참여하되 기록과 집계에서 빠진다.
    #[serde(default)]
    pub locked: bool,
    /// 논리적 배수 계통 태그. 셀렉터 필터링에 쓰인다.
    #[serde(default)]
    pub system: Option<String>,
}

impl Segment {
    /// 상단 고도 = 두 끝점 z의 최대값. 상류→하류 근사 정렬의 키가 된다.
    pub fn top_elevation(&self) -> f64 {
        self.start.z.max(self.end.z)
    }

    /// 두 구간이 끝점을 공유하는지(연결되어 있는지) 판정한다.
    pub fn touches(&self, other: &Segment) -> bool {
        self.start.coincides(&other.start)
            || self.start.coincides(&other.end)
            || self.end.coincides(&other.start)
            || self.end.coincides(&other.end)
    }
}
