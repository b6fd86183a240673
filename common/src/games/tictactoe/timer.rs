use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy)]
pub struct GameTimer {
    started_at: DateTime<Local>,
    stopped_at: Option<DateTime<Local>>,
}

impl GameTimer {
    pub fn start() -> Self {
        Self::start_at(Local::now())
    }

    pub fn start_at(started_at: DateTime<Local>) -> Self {
        Self {
            started_at,
            stopped_at: None,
        }
    }

    pub fn stop(&mut self) {
        self.stop_at(Local::now());
    }

    /// Keeps the first stop time.
    pub fn stop_at(&mut self, stopped_at: DateTime<Local>) {
        self.stopped_at.get_or_insert(stopped_at);
    }

    pub fn resume(&mut self) {
        self.stopped_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.stopped_at.is_none()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds_at(Local::now())
    }

    pub fn elapsed_seconds_at(&self, now: DateTime<Local>) -> u64 {
        let end = self.stopped_at.unwrap_or(now);
        (end - self.started_at).num_seconds().max(0) as u64
    }
}

/// `m:ss`, minutes unpadded.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
