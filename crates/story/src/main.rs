mod editor;
mod preview;

use flexi_logger::{Logger, LoggerHandle};
use gpui::*;
use gpui_component::Root;

use crate::editor::ToolbarExample;

fn start_logger() -> Option<LoggerHandle> {
    let started = Logger::try_with_env_or_str("info, gpui=warn")
        .and_then(|logger| logger.log_to_stderr().start());
    match started {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn main() {
    let _logger = start_logger();
    log::info!("starting formatting toolbar story");

    let app = Application::new();

    app.run(move |cx| {
        gpui_component::init(cx);
        gpui_manos_toolbar::init(cx);
        cx.activate(true);

        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    titlebar: Some(TitlebarOptions {
                        title: Some("Formatting Toolbar".into()),
                        appears_transparent: false,
                        traffic_light_position: None,
                    }),
                    ..Default::default()
                },
                |window, cx| {
                    let view = ToolbarExample::view(window, cx);
                    cx.new(|cx| Root::new(view, window, cx))
                },
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
