use crossterm::event::Event;

pub enum AppEvent {
    Input(Event),
    Tick,
}
