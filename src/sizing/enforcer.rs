//! 하류 비축소 불변식을 강제하는 누산기.

/// 순회 순서를 따라 운반되는 상류 최대 직경 누산기.
///
/// 패스 시작 시 0에서 출발해, 구간마다 자체 직경과 비교해 최종 직경을 정한 뒤
/// 누산값을 갱신한다. 용량 테이블이 구간별로 어떤 값을 내든, 이 단계만으로
/// 상류에서 하류로 가며 직경이 줄지 않음이 보장된다.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownstreamGuard {
    max_upstream_in: f64,
}

impl DownstreamGuard {
    pub fn new() -> Self {
        Self {
            max_upstream_in: 0.0,
        }
    }

    /// 자체 직경을 받아 최종 직경을 정하고 누산값을 갱신한다 [in].
    pub fn apply(&mut self, own_diameter_in: f64) -> f64 {
        let final_in = own_diameter_in.max(self.max_upstream_in);
        self.max_upstream_in = self.max_upstream_in.max(final_in);
        final_in
    }

    /// 현재까지 관측된 상류 최대 직경 [in].
    pub fn max_upstream_in(&self) -> f64 {
        self.max_upstream_in
    }
}
