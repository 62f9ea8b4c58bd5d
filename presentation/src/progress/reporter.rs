//! Loading spinner for a running search

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use medinfo_application::StateListener;
use medinfo_domain::AppState;
use std::sync::Mutex;
use std::time::Duration;

pub const LOADING_MESSAGE: &str = "กำลังดึงข้อมูลที่ถูกต้อง...";
pub const LOADING_DETAIL: &str = "ระบบ AI กำลังวิเคราะห์และสรุปขั้นตอนการรักษาเบื้องต้นให้คุณ";

/// Shows a spinner while the state is `Loading`, clears it otherwise
pub struct SpinnerReporter {
    target: fn() -> ProgressDrawTarget,
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self {
            target: ProgressDrawTarget::stderr,
            spinner: Mutex::new(None),
        }
    }

    /// Reporter that tracks state but draws nothing
    pub fn hidden() -> Self {
        Self {
            target: ProgressDrawTarget::hidden,
            spinner: Mutex::new(None),
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spinner
            .lock()
            .map(|spinner| spinner.is_some())
            .unwrap_or(false)
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg:.bold}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self) -> ProgressBar {
        let pb = ProgressBar::with_draw_target(None, (self.target)());
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{}  {}", LOADING_MESSAGE, LOADING_DETAIL));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StateListener for SpinnerReporter {
    fn on_transition(&self, state: &AppState) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };

        if state.is_loading() {
            // A resubmit while loading keeps the running spinner
            if spinner.is_none() {
                *spinner = Some(self.start());
            }
        } else if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
    }
}
