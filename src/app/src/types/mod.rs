//! Types grouped the same way as the handlers in `update/`:
//! - device: radio settings read from and written to the device
//! - wifi: scan results and credentials
//! - ui: tabs, toasts and mount options
//! - text: keys of user-facing texts
//! - view: the view model handed to shells

pub mod device;
pub mod text;
pub mod ui;
pub mod view;
pub mod wifi;

pub use device::*;
pub use text::*;
pub use ui::*;
pub use view::*;
pub use wifi::*;
