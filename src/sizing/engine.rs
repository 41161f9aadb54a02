use crate::network::{self, Orientation, Segment};
use crate::sizing::capacity;
use crate::sizing::enforcer::DownstreamGuard;
use crate::units::{convert_length, LengthUnit};

/// 부하가 이 값 미만이면 미사용 구간으로 보고 건너뛴다 [DFU].
pub const MIN_ACTIVE_LOAD: f64 = 0.01;

/// 한 구간의 사이징 결과 요약(보고용).
#[derive(Debug, Clone)]
pub struct SegmentResult {
    pub id: String,
    pub orientation: Orientation,
    /// 용량 테이블이 낸 자체 직경 [in]
    pub own_diameter_in: f64,
    /// 비축소 보정 후 최종 직경 [in]
    pub final_diameter_in: f64,
    /// 실제로 모델에 기록되었는지 (잠긴 구간은 false)
    pub assigned: bool,
}

/// 사이징 패스 전체 결과.
#[derive(Debug, Clone)]
pub struct PassResult {
    /// 직경이 실제로 기록된 구간 수
    pub assigned: usize,
    /// 순회 순서대로의 구간별 요약
    pub results: Vec<SegmentResult>,
}

/// 선택된 계통에 대해 사이징 패스를 1회 수행한다.
///
/// 구간 순회는 엄격히 순차적이며, 순서 자체가 정확성 조건이다(상류 최대
/// 직경이 반복 간에 운반된다). 패스는 각 구간의 `diameter` 외에는 아무것도
/// 변경하지 않으며, 패스 내부 상태는 호출이 끝나면 버려진다. 같은 입력에
/// 다시 수행해도 결과가 변하지 않는다.
pub fn run_pass(
    segments: &mut [Segment],
    system: Option<&str>,
    model_unit: LengthUnit,
) -> PassResult {
    let working = network::select(segments, system);
    let order = network::flow_order(segments, &working);

    let mut guard = DownstreamGuard::new();
    let mut assigned = 0usize;
    let mut results = Vec::with_capacity(order.len());

    for &idx in &order {
        let load = segments[idx].load_units;
        if load < MIN_ACTIVE_LOAD {
            continue;
        }

        // 이웃 형상과 분류는 매 패스마다 새로 유도한다.
        let neighbors = network::neighbor_endpoints(segments, &working, idx);
        let orientation = network::classify(&neighbors);
        let own_in = match orientation {
            Orientation::Vertical => capacity::stack_diameter_in(load),
            Orientation::Horizontal => {
                let slope = segments[idx].slope.unwrap_or(capacity::MIN_SLOPE);
                capacity::branch_diameter_in(load, slope)
            }
        };
        let final_in = guard.apply(own_in);

        // 잠긴 구간도 상류 최대 직경에는 반영되지만 기록과 집계에서는 빠진다.
        let writable = !segments[idx].locked;
        if writable {
            segments[idx].diameter =
                Some(convert_length(final_in, LengthUnit::Inch, model_unit));
            assigned += 1;
        }

        results.push(SegmentResult {
            id: segments[idx].id.clone(),
            orientation,
            own_diameter_in: own_in,
            final_diameter_in: final_in,
            assigned: writable,
        });
    }

    PassResult { assigned, results }
}
