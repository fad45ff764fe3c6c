use orbit::control::ControlCommand;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Control(ControlCommand),
    ConfigReload,
}
