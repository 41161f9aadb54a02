use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::network::Segment;
use crate::units::LengthUnit;

/// 호스트 모델에서 내보낸 배수 계통 파일.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrainageModel {
    /// 좌표와 직경이 따르는 길이 단위. 없으면 설정의 기본 단위를 가정한다.
    #[serde(default)]
    pub length_unit: Option<LengthUnit>,
    pub segments: Vec<Segment>,
}

/// 모델 파일 입출력 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ModelError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화/역직렬화 오류
    Serde(serde_json::Error),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::Io(e) => write!(f, "모델 파일 입출력 오류: {e}"),
            ModelError::Serde(e) => write!(f, "모델 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<std::io::Error> for ModelError {
    fn from(value: std::io::Error) -> Self {
        ModelError::Io(value)
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(value: serde_json::Error) -> Self {
        ModelError::Serde(value)
    }
}

/// 모델 파일을 읽는다.
pub fn load(path: &Path) -> Result<DrainageModel, ModelError> {
    let content = fs::read_to_string(path)?;
    let model: DrainageModel = serde_json::from_str(&content)?;
    Ok(model)
}

/// 모델 파일을 원자적으로 저장한다.
///
/// 같은 디렉터리에 임시 파일을 쓴 뒤 rename하므로, 도중에 실패해도 기존
/// 파일은 그대로 남는다. 패스의 기록은 전부 반영되거나 전혀 반영되지 않는다.
pub fn save(path: &Path, model: &DrainageModel) -> Result<(), ModelError> {
    let content = serde_json::to_string_pretty(model)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
