//! Pomodoro timer.
//!
//! Provides the focus/break session cycle:
//! - Session kinds and timer settings
//! - The countdown state machine
//! - Clock, notification and sound capabilities it runs against

pub mod alert;
pub mod clock;
pub mod session;
pub mod timer;

pub use alert::{DesktopNotifier, Notifier, NullNotifier, Silent, SoundPlayer, SystemSound, TerminalBell};
pub use clock::{Clock, ManualClock, SystemClock};
pub use session::{Completion, SessionKind, SessionState, Settings};
pub use timer::{format_minutes, format_mmss, render_progress_bar, Capabilities, SessionTimer};
