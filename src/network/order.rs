use super::segment::Segment;

/// 작업 집합을 상류→하류 근사 순서로 정렬한 인덱스 열을 만든다.
///
/// 중력 배수 계통은 흐름 방향으로 고도가 단조 감소한다는 가정 아래,
/// 상단 고도가 높은 구간을 먼저 방문한다. 실제 그래프 연결 순서를
/// 검증하는 것이 아니라 고도를 연결성의 대리 지표로 쓰는 근사다.
/// 동일 고도는 id 오름차순으로 깨서 결과를 재현 가능하게 한다.
/// 빈 입력은 빈 열을 돌려준다.
pub fn flow_order(segments: &[Segment], working: &[usize]) -> Vec<usize> {
    let mut order = working.to_vec();
    order.sort_by(|&a, &b| {
        let elev_a = segments[a].top_elevation();
        let elev_b = segments[b].top_elevation();
        elev_b
            .total_cmp(&elev_a)
            .then_with(|| segments[a].id.cmp(&segments[b].id))
    });
    order
}
