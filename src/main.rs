fn main() {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    log::info!("Starting ablpanel");

    let channels = ablpanel_bridge::BridgeChannels::default();
    ablpanel_backend::run(channels.backend_rx, channels.backend_tx);
    ablpanel_frontend::run(channels.frontend_rx, channels.frontend_tx)
        .expect("failed to run frontend");
}
