use super::segment::Segment;

/// 한 번의 사이징 패스가 다룰 작업 집합(구간 인덱스)을 골라낸다.
///
/// `system`이 주어지면 해당 계통 태그가 붙은 구간만 남기고,
/// 없으면 전체 모델이 작업 집합이 된다. 순서는 아직 의미가 없다.
pub fn select(segments: &[Segment], system: Option<&str>) -> Vec<usize> {
    segments
        .iter()
        .enumerate()
        .filter(|(_, seg)| match system {
            Some(tag) => seg.system.as_deref() == Some(tag),
            None => true,
        })
        .map(|(idx, _)| idx)
        .collect()
}
