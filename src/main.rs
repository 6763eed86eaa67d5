fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the FieldLens application
    fieldlens::run_app()
}
