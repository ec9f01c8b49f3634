pub mod app;
pub mod detail;
pub mod display;
pub mod fetch;
pub mod list;
pub mod telemetry;

pub mod components {
    pub mod incident_detail;
    pub mod incident_list;
}
