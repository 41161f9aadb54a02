use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{Config, UnitSystem};
use crate::model;
use crate::sizing;
use crate::ui_cli;

/// 명령행 인터페이스 정의.
#[derive(Debug, Parser)]
#[command(name = "drainage_sizing_toolbox", about = "배수 배관 DFU 사이징 도구")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 모델 파일에 사이징 패스를 1회 수행하고 결과를 저장한다
    Size {
        /// 배수 계통 모델 파일 (JSON)
        model: PathBuf,
        /// 지정한 계통 태그의 구간만 대상으로 한다
        #[arg(long)]
        system: Option<String>,
        /// 결과를 저장하지 않고 요약만 출력한다
        #[arg(long)]
        dry_run: bool,
    },
    /// 용량 테이블과 상수를 출력한다
    Tables,
    /// 모델 파일을 읽어 구간/계통 통계를 출력한다
    Check {
        /// 배수 계통 모델 파일 (JSON)
        model: PathBuf,
    },
    /// 단위 시스템 프리셋을 바꾸고 config.toml에 저장한다
    Units {
        /// 적용할 프리셋
        #[arg(value_enum)]
        system: UnitSystemArg,
    },
}

/// 명령행에서 받는 단위 시스템 프리셋.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnitSystemArg {
    Imperial,
    Si,
}

impl From<UnitSystemArg> for UnitSystem {
    fn from(value: UnitSystemArg) -> Self {
        match value {
            UnitSystemArg::Imperial => UnitSystem::Imperial,
            UnitSystemArg::Si => UnitSystem::SI,
        }
    }
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 모델 파일 입출력 오류
    Model(model::ModelError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Model(e) => write!(f, "모델 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<model::ModelError> for AppError {
    fn from(value: model::ModelError) -> Self {
        AppError::Model(value)
    }
}

/// 파싱된 명령을 실행한다.
pub fn run(cli: Cli, config: &mut Config) -> Result<(), AppError> {
    match cli.command {
        Command::Size {
            model: path,
            system,
            dry_run,
        } => {
            let mut drainage = model::load(&path)?;
            let unit = drainage
                .length_unit
                .unwrap_or(config.default_units.model_length);
            let result = sizing::run_pass(&mut drainage.segments, system.as_deref(), unit);
            ui_cli::print_sizing_summary(&result, config);
            if dry_run {
                println!("dry-run: 결과를 저장하지 않았습니다.");
            } else {
                model::save(&path, &drainage)?;
                println!("저장 완료: {}", path.display());
            }
            Ok(())
        }
        Command::Tables => {
            ui_cli::print_capacity_tables();
            Ok(())
        }
        Command::Check { model: path } => {
            let drainage = model::load(&path)?;
            ui_cli::print_model_report(&drainage);
            Ok(())
        }
        Command::Units { system } => {
            let preset = UnitSystem::from(system);
            config.unit_system = preset;
            config.default_units = preset.default_units();
            config.save()?;
            println!("설정 저장 완료: {preset:?}");
            Ok(())
        }
    }
}
