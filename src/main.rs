use analog_clock;

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the clock application
    analog_clock::run_app()
}
