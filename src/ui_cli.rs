use clap::Parser;

/// 명령행 인자 모델. `-from=<unit> -to=<unit> <value>` 형태로 호출한다.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "length_converter",
    about = "Command-line conversion utility for length units",
    args_override_self = true
)]
pub struct CliArgs {
    /// The unit we are converting from.
    #[arg(long, default_value = "meters")]
    pub from: String,

    /// The unit we are converting to.
    #[arg(long, default_value = "meters")]
    pub to: String,

    /// The value to be converted. Only the first one is used.
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// `-from=x` 같은 단일 대시 긴 플래그를 clap이 읽을 수 있도록 `--from=x`로 바꾼다.
///
/// 한 글자 플래그(`-h`)와 음수(`-5`)는 그대로 두고, `--` 이후 인자는 건드리지 않는다.
pub fn normalize_flags<I, S>(argv: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut passthrough = false;
    argv.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            if is_single_dash_long_flag(&arg) {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    let name = rest.split('=').next().unwrap_or_default();
    name.len() > 1 && name.starts_with(|c: char| c.is_ascii_alphabetic())
}

pub fn banner() -> String {
    "Unit Converter\n\
     Command-line conversion utility for length units.\n\
     It supports the units: meters, feet, kilometers and miles.\n"
        .to_string()
}

/// 변환 결과 한 줄. 입력값은 소수 둘째 자리, 결과는 소수 여섯째 자리까지 표시한다.
pub fn format_result(value: f64, from: &str, result: f64, to: &str) -> String {
    format!("{value:.2} {from} are {result:.6} {to} (true)")
}
