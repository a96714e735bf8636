//! Cosmetic per-URL progress shown while a brief is generated.
//!
//! DESIGN
//! ======
//! The backend handles all URLs in one atomic request, so per-row status is
//! simulated: a fixed-interval ticker reveals rows one at a time, and the
//! final outcome flips every row at once.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Interval between simulated progress steps.
pub const TICK_MS: u32 = 600;

/// Delay between a successful submit and navigating to the new brief.
pub const NAVIGATE_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressStatus {
    #[default]
    Waiting,
    Loading,
    Done,
    Error,
}

impl ProgressStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Loading => "Fetching & cleaning",
            Self::Done => "Done",
            Self::Error => "Failed",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Waiting => "progress-item waiting",
            Self::Loading => "progress-item loading",
            Self::Done => "progress-item done",
            Self::Error => "progress-item error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlProgress {
    pub url: String,
    pub status: ProgressStatus,
}

/// Row list behind the progress indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    rows: Vec<UrlProgress>,
}

impl ProgressTracker {
    /// All rows waiting.
    pub fn start(urls: &[String]) -> Self {
        Self {
            rows: urls
                .iter()
                .map(|url| UrlProgress {
                    url: url.clone(),
                    status: ProgressStatus::Waiting,
                })
                .collect(),
        }
    }

    pub fn rows(&self) -> &[UrlProgress] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Advance one step: the first waiting row whose predecessor has left
    /// the waiting state starts loading. At most one row moves per tick.
    ///
    /// Returns whether a row changed.
    pub fn tick(&mut self) -> bool {
        let Some(next) = self.rows.iter().position(|row| row.status == ProgressStatus::Waiting) else {
            return false;
        };
        if next > 0 && self.rows[next - 1].status == ProgressStatus::Waiting {
            return false;
        }
        self.rows[next].status = ProgressStatus::Loading;
        true
    }

    pub fn finish_ok(&mut self) {
        self.set_all(ProgressStatus::Done);
    }

    pub fn finish_err(&mut self) {
        self.set_all(ProgressStatus::Error);
    }

    fn set_all(&mut self, status: ProgressStatus) {
        for row in &mut self.rows {
            row.status = status;
        }
    }
}
