use incident_ui::app::App;

fn main() {
    incident_ui::telemetry::init();
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
