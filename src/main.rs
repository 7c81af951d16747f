fn main() -> Result<(), eframe::Error> {
    // Logging is configured through RUST_LOG
    env_logger::init();

    grid_viewer::run_app()
}
