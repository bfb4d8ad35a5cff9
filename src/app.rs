use std::io::Write;
use std::num::ParseFloatError;

use clap::Parser;
use log::{debug, warn};
use thiserror::Error;

use crate::conversion;
use crate::ui_cli::{self, CliArgs};

/// 실행 중 발생 가능한 오류. 각 변형의 메시지가 그대로 사용자 진단문이 된다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please provide a unit to convert from.")]
    MissingFromUnit,

    #[error("Please provide a unit to convert to.")]
    MissingToUnit,

    #[error("Please provide a value to convert.")]
    MissingValue,

    #[error("Unit value fail to scanned: {source}")]
    UnparsableValue {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    /// 알 수 없는 단위와 동일 단위 요청을 모두 포함한다.
    #[error("Conversion Failed. Unit might not exist or units are the same.")]
    ConversionUnsupported { from: String, to: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// 검증을 통과한 변환 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub from: String,
    pub to: String,
    pub raw_value: String,
}

/// 입력 단위, 변환 단위, 값 순서로 누락 여부를 확인한다.
pub fn validate(args: &CliArgs) -> Result<Request, AppError> {
    if args.from.is_empty() {
        return Err(AppError::MissingFromUnit);
    }
    if args.to.is_empty() {
        return Err(AppError::MissingToUnit);
    }
    let Some((raw_value, extra)) = args.values.split_first() else {
        return Err(AppError::MissingValue);
    };
    if !extra.is_empty() {
        debug!("ignoring extra positional arguments: {extra:?}");
    }
    Ok(Request {
        from: args.from.clone(),
        to: args.to.clone(),
        raw_value: raw_value.clone(),
    })
}

pub fn parse_value(raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|source| AppError::UnparsableValue {
            input: raw.to_string(),
            source,
        })
}

/// 요청을 환산한다. 테이블에 없는 단위쌍이면 `ConversionUnsupported`.
pub fn convert_request(value: f64, request: &Request) -> Result<f64, AppError> {
    conversion::convert(value, &request.from, &request.to).ok_or_else(|| {
        AppError::ConversionUnsupported {
            from: request.from.clone(),
            to: request.to.clone(),
        }
    })
}

/// CLI 한 번의 실행을 처리한다. 모든 진단은 `out`에 기록하고 실행을 끝낸다.
///
/// 출력 기록 실패만 `Err`로 돌려준다.
pub fn run<I, S, W>(argv: I, out: &mut W) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    W: Write,
{
    writeln!(out, "{}", ui_cli::banner())?;

    let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
    let normalized = ui_cli::normalize_flags(argv.iter().cloned());
    debug!("normalized argv: {normalized:?}");
    let args = match CliArgs::try_parse_from(&normalized) {
        Ok(args) => args,
        Err(err) => {
            write!(out, "{}", err.render())?;
            return Ok(());
        }
    };

    writeln!(out, "args: {argv:?}")?;
    writeln!(out, "positional: {:?}", args.values)?;

    let request = match validate(&args) {
        Ok(request) => request,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(());
        }
    };

    // 값 파싱 실패는 보고만 하고 0으로 계속 진행한다.
    let value = match parse_value(&request.raw_value) {
        Ok(value) => value,
        Err(err) => {
            warn!("falling back to 0 for {:?}", request.raw_value);
            writeln!(out, "{err}")?;
            0.0
        }
    };

    match convert_request(value, &request) {
        Ok(result) => writeln!(
            out,
            "{}",
            ui_cli::format_result(value, &request.from, result, &request.to)
        )?,
        Err(err) => {
            if let AppError::ConversionUnsupported { from, to } = &err {
                debug!("no multiplier for {from:?} -> {to:?}");
            }
            writeln!(out, "{err}")?
        }
    }
    Ok(())
}
