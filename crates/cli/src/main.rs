use stockroom_cli::{Console, Session, SessionConfig};

fn main() {
    stockroom_observability::init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut session = Session::new(console, SessionConfig::default());

    // Every failure path degrades in-session; the process always exits 0.
    if let Err(e) = session.run() {
        tracing::error!(error = %e, "session ended early");
    }
}
