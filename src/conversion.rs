use std::collections::HashMap;
use std::sync::LazyLock;

use crate::units::LengthUnit;

/// 변환 테이블의 키. (입력 단위, 변환 단위) 순서쌍이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitPair {
    pub from: LengthUnit,
    pub to: LengthUnit,
}

impl UnitPair {
    pub const fn new(from: LengthUnit, to: LengthUnit) -> Self {
        Self { from, to }
    }
}

/// 단위쌍별 배율. 역방향 값은 서로의 역수로 유도하지 않고 각각 지정한다.
const MULTIPLIERS: [(UnitPair, f64); 12] = {
    use LengthUnit::*;
    [
        (UnitPair::new(Meters, Feet), 3.280839895),
        (UnitPair::new(Meters, Kilometers), 0.001),
        (UnitPair::new(Meters, Miles), 0.0006213689),
        (UnitPair::new(Feet, Meters), 0.3048),
        (UnitPair::new(Feet, Kilometers), 0.0003048),
        (UnitPair::new(Feet, Miles), 0.0001893932),
        (UnitPair::new(Kilometers, Meters), 1000.0),
        (UnitPair::new(Kilometers, Feet), 3280.839895),
        (UnitPair::new(Kilometers, Miles), 0.6213688756),
        (UnitPair::new(Miles, Meters), 1609.35),
        (UnitPair::new(Miles, Feet), 5280.019685),
        (UnitPair::new(Miles, Kilometers), 1.60935),
    ]
};

static TABLE: LazyLock<ConversionTable> = LazyLock::new(ConversionTable::build);

/// 프로세스 전역에서 공유하는 읽기 전용 변환 테이블.
///
/// 동일 단위쌍(from == to)은 포함하지 않는다. 따라서 같은 단위끼리의 변환은
/// 배율 1로 처리되지 않고 조회 실패가 된다.
#[derive(Debug)]
pub struct ConversionTable {
    entries: HashMap<UnitPair, f64>,
}

impl ConversionTable {
    fn build() -> Self {
        Self {
            entries: MULTIPLIERS.iter().copied().collect(),
        }
    }

    /// 최초 사용 시 한 번 생성된 테이블을 반환한다.
    pub fn global() -> &'static ConversionTable {
        &TABLE
    }

    pub fn multiplier(&self, pair: UnitPair) -> Option<f64> {
        self.entries.get(&pair).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 선언 순서대로 (단위쌍, 배율)을 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = (UnitPair, f64)> + '_ {
        MULTIPLIERS
            .iter()
            .filter_map(|(pair, _)| self.multiplier(*pair).map(|m| (*pair, m)))
    }
}

/// 길이를 다른 단위로 변환한다. 테이블에 없는 쌍이면 `None`.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> Option<f64> {
    let multiplier = ConversionTable::global().multiplier(UnitPair::new(from, to))?;
    Some(value * multiplier)
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 환산한다.
///
/// 알 수 없는 단위명과 동일 단위 요청은 구분하지 않고 모두 `None`을 반환한다.
pub fn convert(value: f64, from_unit_str: &str, to_unit_str: &str) -> Option<f64> {
    let from = LengthUnit::parse(from_unit_str)?;
    let to = LengthUnit::parse(to_unit_str)?;
    let result = convert_length(value, from, to);
    log::debug!("lookup {from}->{to}: {result:?}");
    result
}
