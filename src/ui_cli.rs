use crate::config::Config;
use crate::model::DrainageModel;
use crate::network::Orientation;
use crate::sizing::engine::PassResult;
use crate::sizing::{capacity, MIN_ACTIVE_LOAD};
use crate::units::{convert_length, unit_label, LengthUnit};

/// 사이징 패스 요약을 출력한다.
pub fn print_sizing_summary(result: &PassResult, config: &Config) {
    println!("\n=== 사이징 결과 ===");
    let display = config.default_units.diameter_display;
    for seg in &result.results {
        let orient = match seg.orientation {
            Orientation::Vertical => "수직",
            Orientation::Horizontal => "수평",
        };
        let shown = convert_length(seg.final_diameter_in, LengthUnit::Inch, display);
        let note = if seg.assigned { "" } else { "  (잠김, 기록 생략)" };
        println!(
            "{:>12}  {}  자체 {:.1} in → 최종 {:.2} {}{}",
            seg.id,
            orient,
            seg.own_diameter_in,
            shown,
            unit_label(display),
            note,
        );
    }
    println!("직경이 기록된 구간: {}개", result.assigned);
}

/// 용량 테이블과 상수를 출력한다.
pub fn print_capacity_tables() {
    println!("\n-- 수직 입상관 테이블 (누적 DFU → in) --");
    for step in capacity::stack_table() {
        println!("{:>6} → {:>4}", step.max_load, step.diameter_in);
    }
    println!("  초과 → {:>4}", capacity::STACK_OVERFLOW_IN);

    println!("\n-- 수평 배수관 테이블 (누적 DFU → in) --");
    for step in capacity::branch_table() {
        println!("{:>6} → {:>4}", step.max_load, step.diameter_in);
    }
    println!("  초과 → {:>4}", capacity::BRANCH_OVERFLOW_IN);

    println!("\n-- 수평 분기관 허용 부하 상한 (in → DFU) --");
    for limit in capacity::branch_limits() {
        println!("{:>6} → {:>6}", limit.diameter_in, limit.max_load);
    }

    println!(
        "\n코드 최소 구배: {} (미달 시 {} in 고정)",
        capacity::MIN_SLOPE,
        capacity::FLAT_SLOPE_DIAMETER_IN
    );
}

/// 모델 파일의 구간/계통 통계를 출력한다.
pub fn print_model_report(model: &DrainageModel) {
    println!("\n=== 모델 점검 ===");
    println!("구간 수: {}", model.segments.len());

    let active = model
        .segments
        .iter()
        .filter(|s| s.load_units >= MIN_ACTIVE_LOAD)
        .count();
    let locked = model.segments.iter().filter(|s| s.locked).count();
    let sized = model
        .segments
        .iter()
        .filter(|s| s.diameter.is_some())
        .count();
    println!("부하 있는 구간: {active}  잠긴 구간: {locked}  직경 기록됨: {sized}");

    let mut systems: Vec<&str> = model
        .segments
        .iter()
        .filter_map(|s| s.system.as_deref())
        .collect();
    systems.sort_unstable();
    systems.dedup();
    if systems.is_empty() {
        println!("계통 태그 없음");
    } else {
        for tag in systems {
            let count = model
                .segments
                .iter()
                .filter(|s| s.system.as_deref() == Some(tag))
                .count();
            println!("계통 {tag}: {count}개 구간");
        }
    }
}
