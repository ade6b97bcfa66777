use std::thread;

use ambiance::{app::App, config::Config, tray, util::log::initialize_logging};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::error;

#[derive(Debug)]
enum UserEvent {
    Quit,
}

fn main() -> color_eyre::Result<()> {
    setup()?;

    let config = Config::default();
    let (event_tx, event_rx) = flume::unbounded();

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    tray::forward_menu_events(event_tx);

    // rodio's output stream is not Send, so the player lives entirely on the
    // dispatch thread; the tray shell keeps the main thread.
    let worker_config = config.clone();
    thread::spawn(move || {
        let mut app = App::new(&worker_config, event_rx);
        app.run();
        let _ = proxy.send_event(UserEvent::Quit);
    });

    let mut tray_icon = None;
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            // The tray must be created once the shell loop is running,
            // required on macOS and harmless elsewhere.
            Event::NewEvents(StartCause::Init) => match tray::build_tray(&config) {
                Ok(tray) => tray_icon = Some(tray),
                Err(e) => error!("failed to create tray icon: {e}"),
            },
            Event::UserEvent(UserEvent::Quit) => *control_flow = ControlFlow::Exit,
            _ => {}
        }
    });
}

fn setup() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    initialize_logging()
}
