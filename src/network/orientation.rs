use super::segment::{Point3, Segment};

/// 구간의 수직/수평 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// 수직 입상관(스택)으로 동작하는 구간.
    Vertical,
    /// 수평 배수관/분기관으로 동작하는 구간.
    Horizontal,
}

/// 이웃 구간들의 끝점 쌍만 보고 현재 구간의 역할을 추정한다.
///
/// 어느 한 이웃이라도 자체 끝점 간 |dz|가 |dx|, |dy| 양쪽보다 크면 수직
/// 입상관에 물린 것으로 보아 `Vertical`을 돌려준다. 만족하는 이웃이 없으면
/// (이웃이 하나도 없는 경우 포함) `Horizontal`이 기본값이다.
///
/// 구간 자신의 기하가 아니라 인접 구간의 형상에서 추정하는 휴리스틱이다.
/// 자신은 수직인데 이웃이 모두 수평이면 `Horizontal`로 오분류되며,
/// 이는 알려진 한계로 그대로 유지한다.
pub fn classify(neighbors: &[(Point3, Point3)]) -> Orientation {
    for (a, b) in neighbors {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        let dz = (a.z - b.z).abs();
        if dz > dx && dz > dy {
            return Orientation::Vertical;
        }
    }
    Orientation::Horizontal
}

/// 작업 집합 안에서 끝점을 공유하는 이웃 구간들의 끝점 쌍을 모은다.
/// 자기 자신은 제외한다. 이웃 관계는 매 패스마다 새로 유도하며 저장하지 않는다.
pub fn neighbor_endpoints(
    segments: &[Segment],
    working: &[usize],
    target: usize,
) -> Vec<(Point3, Point3)> {
    working
        .iter()
        .copied()
        .filter(|&idx| idx != target && segments[idx].touches(&segments[target]))
        .map(|idx| (segments[idx].start, segments[idx].end))
        .collect()
}
