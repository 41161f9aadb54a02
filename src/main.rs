use clap::Parser;

use drainage_sizing_toolbox::{app, config};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = app::Cli::parse();
    let mut cfg = config::load_or_default()?;
    app::run(cli, &mut cfg)?;
    Ok(())
}
