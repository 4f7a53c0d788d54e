use doctruth::app::{start_chat_socket, App, AppMessage};
use doctruth::storage;
use doctruth::ui;
use doctruth::upload::UploadConfig;
use doctruth::websocket::WsClientConfig;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Restore the terminal on panic so the shell is usable afterwards.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Write logs to a file in the data directory so the TUI stays clean.
fn init_logging(data_dir: &std::path::Path) {
    let Ok(log_file) = std::fs::File::create(data_dir.join("doctruth.log")) else {
        return;
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doctruth=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("doctruth {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    setup_panic_hook();

    let data_dir = storage::get_data_dir()?;
    init_logging(&data_dir);

    // Backend address; one host serves both the socket and the upload endpoint
    let host = std::env::var("DOCTRUTH_HOST").unwrap_or_else(|_| "localhost:8000".to_string());

    let mut app = App::new(data_dir);
    app.upload_config = UploadConfig::with_base_url(format!("http://{}", host));

    // Connect the chat stream before entering the alternate screen; failure
    // is non-fatal and surfaces as a notice
    if let Some(socket) =
        start_chat_socket(app.message_tx.clone(), WsClientConfig::with_host(host)).await
    {
        app.attach_socket(socket);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &app.view_state());
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(100));

        tokio::select! {
            // Animation tick and notice expiry
            _ = timeout => {
                app.tick();
            }

            // Keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key(key);
                        }
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        _ => {}
                    }
                }
            }

            // Messages from async tasks (stream frames, upload results)
            msg = recv_message(&mut message_rx) => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Receive from an optional channel without blocking select! forever when
/// the receiver was never created.
async fn recv_message(
    rx: &mut Option<mpsc::UnboundedReceiver<AppMessage>>,
) -> Option<AppMessage> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
