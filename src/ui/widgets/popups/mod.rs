use crate::app::App;
use ratatui::Frame;

pub mod help;
pub mod toast;

pub fn render(f: &mut Frame, app: &mut App) {
    // TOAST NOTIFICATION
    if app.toast.is_some() {
        toast::render(f, app);
    }

    // FOOTER / WHICHKEY POPUP
    if app.show_keyhints {
        help::render(f, app);
    }
}
