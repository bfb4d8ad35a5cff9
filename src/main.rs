use length_converter::app;

/// 프로그램의 엔트리 포인트. 한 번 변환하고 종료하며 종료 코드는 항상 0이다.
fn main() {
    env_logger::init();
    let stdout = std::io::stdout();
    if let Err(err) = app::run(std::env::args(), &mut stdout.lock()) {
        eprintln!("error: {err}");
    }
}
