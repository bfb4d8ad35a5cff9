use serde::{Deserialize, Serialize};

/// 지원하는 길이 단위. 이름은 CLI 입력과 직렬화 형식에서 동일하게 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meters,
    Feet,
    Kilometers,
    Miles,
}

impl LengthUnit {
    /// 선언 순서대로 나열한 전체 단위.
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Meters,
        LengthUnit::Feet,
        LengthUnit::Kilometers,
        LengthUnit::Miles,
    ];

    /// 단위명을 enum으로 변환한다. 대소문자 구분, 별칭 없음.
    pub fn parse(s: &str) -> Option<LengthUnit> {
        match s {
            "meters" => Some(LengthUnit::Meters),
            "feet" => Some(LengthUnit::Feet),
            "kilometers" => Some(LengthUnit::Kilometers),
            "miles" => Some(LengthUnit::Miles),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Feet => "feet",
            LengthUnit::Kilometers => "kilometers",
            LengthUnit::Miles => "miles",
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
