mod app;
mod ui;

fn main() -> eframe::Result<()> {
    picker_reports::logging::init_tracing();
    ui::app_shell::run()
}
