//! DFU 부하 → 최소 직경 용량 테이블과 조회 규칙.
//! 값은 참고용 배수 코드 근사치이며 설계 적용 전 관할 코드로 검증해야 한다.

/// 누적 부하 상한과 그 상한까지 허용되는 최소 직경 한 줄.
#[derive(Debug, Clone, Copy)]
pub struct LoadStep {
    /// 이 줄이 커버하는 누적 부하 상한 [DFU]
    pub max_load: f64,
    /// 해당 부하까지의 최소 직경 [in]
    pub diameter_in: f64,
}

impl LoadStep {
    pub const fn new(max_load: f64, diameter_in: f64) -> Self {
        Self {
            max_load,
            diameter_in,
        }
    }
}

/// 수평 분기관의 직경별 허용 부하 상한 한 줄.
#[derive(Debug, Clone, Copy)]
pub struct BranchLimit {
    /// 직경 [in]
    pub diameter_in: f64,
    /// 해당 직경이 수용하는 부하 상한 [DFU]
    pub max_load: f64,
}

/// 코드 최소 구배 (1/8 in/ft ≈ 0.0104). 미달 시 구배 규칙이 테이블보다 우선한다.
pub const MIN_SLOPE: f64 = 0.0104;

/// 최소 구배 미달 시 테이블을 우회하고 적용하는 고정 직경 [in].
pub const FLAT_SLOPE_DIAMETER_IN: f64 = 4.0;

/// 수직 테이블 상한(840 DFU) 초과 시 기본 직경 [in].
pub const STACK_OVERFLOW_IN: f64 = 15.0;

/// 수평 테이블 상한(575 DFU) 초과 시 기본 직경 [in].
pub const BRANCH_OVERFLOW_IN: f64 = 4.0;

/// 수직 입상관 용량 테이블. 부하 오름차순이며 "상한을 넘지 않는 첫 줄"이 이긴다.
const STACK_TABLE: &[LoadStep] = &[
    ls(2.0, 1.5),
    ls(4.0, 2.0),
    ls(6.0, 2.5),
    ls(12.0, 3.0),
    ls(42.0, 4.0),
    ls(72.0, 5.0),
    ls(120.0, 6.0),
    ls(250.0, 8.0),
    ls(500.0, 10.0),
    ls(840.0, 12.0),
];

/// 수평 배수관 용량 테이블. 조회 규칙은 수직 테이블과 같다.
const BRANCH_TABLE: &[LoadStep] = &[
    ls(3.0, 1.5),
    ls(6.0, 2.0),
    ls(9.0, 2.5),
    ls(12.0, 3.0),
    ls(26.0, 4.0),
    ls(50.0, 5.0),
    ls(75.0, 6.0),
    ls(150.0, 8.0),
    ls(216.0, 10.0),
    ls(300.0, 12.0),
    ls(575.0, 15.0),
];

/// 수평 분기관 직경별 허용 부하 상한. 직경 오름차순.
const BRANCH_LIMITS: &[BranchLimit] = &[
    bl(1.5, 3.0),
    bl(2.0, 6.0),
    bl(2.5, 9.0),
    bl(3.0, 20.0),
    bl(4.0, 160.0),
    bl(5.0, 360.0),
    bl(6.0, 620.0),
    bl(8.0, 1400.0),
    bl(10.0, 2500.0),
];

pub fn stack_table() -> &'static [LoadStep] {
    STACK_TABLE
}

pub fn branch_table() -> &'static [LoadStep] {
    BRANCH_TABLE
}

pub fn branch_limits() -> &'static [BranchLimit] {
    BRANCH_LIMITS
}

/// 수직 입상관의 최소 직경을 구한다 [in].
pub fn stack_diameter_in(load_units: f64) -> f64 {
    scan(STACK_TABLE, load_units).unwrap_or(STACK_OVERFLOW_IN)
}

/// 수평 배수관의 최소 직경을 구한다 [in].
///
/// 구배가 코드 최소값 미만이면 부하와 무관하게 고정 직경을 돌려주고,
/// 그 외에는 테이블 조회 후 분기 허용 부하 상한으로 보정한다.
pub fn branch_diameter_in(load_units: f64, slope: f64) -> f64 {
    if slope < MIN_SLOPE {
        return FLAT_SLOPE_DIAMETER_IN;
    }
    let resolved = scan(BRANCH_TABLE, load_units).unwrap_or(BRANCH_OVERFLOW_IN);
    clamp_branch_limit(resolved, load_units)
}

/// 오름차순 안정 스캔: 부하가 상한 이하인 첫 줄의 직경을 돌려준다.
/// 보간이나 최근접 탐색은 쓰지 않는다.
fn scan(table: &[LoadStep], load_units: f64) -> Option<f64> {
    table
        .iter()
        .find(|step| load_units <= step.max_load)
        .map(|step| step.diameter_in)
}

/// 분기 허용 부하 상한으로 직경을 보정한다.
///
/// 부하를 수용하면서 이미 구한 직경 이상인 가장 작은 줄을 택한다.
/// 해당하는 줄이 없으면(부하 2500 초과 또는 상한 줄보다 큰 직경)
/// 테이블 결과를 그대로 둔다.
fn clamp_branch_limit(resolved_in: f64, load_units: f64) -> f64 {
    BRANCH_LIMITS
        .iter()
        .find(|entry| entry.max_load >= load_units && entry.diameter_in >= resolved_in)
        .map(|entry| entry.diameter_in)
        .unwrap_or(resolved_in)
}

const fn ls(max_load: f64, diameter_in: f64) -> LoadStep {
    LoadStep::new(max_load, diameter_in)
}

const fn bl(diameter_in: f64, max_load: f64) -> BranchLimit {
    BranchLimit {
        diameter_in,
        max_load,
    }
}

// NOTE:
// - 테이블 값은 IPC 계열 DFU 표를 근사한 참고치다. 설계 적용 전 최신 코드 표로 확인할 것.
// - 상한 초과 기본값(수직 840 초과 → 15 in, 수평 575 초과 → 4 in)은 원 시스템의
//   placeholder를 그대로 유지한 것이다. 특히 수평 쪽은 최소 단으로 되돌아가는
//   보수적 값이라 코드 표 확인 후 교정 대상이다.
