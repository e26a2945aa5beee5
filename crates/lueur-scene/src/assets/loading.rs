/// Which half of the loading bar a callback belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// The primary model: 0–50% of overall progress.
    Primary,
    /// The companion asset: 50–100% of overall progress.
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhaseStatus {
    Loading,
    Complete,
    Failed,
}

/// Tracks overall loading progress across the model and companion assets.
///
/// The primary asset spans 0–50% and the secondary 50–100%; with no
/// secondary configured the primary spans the whole bar. A failed phase
/// stays failed — there is no retry, the dependent feature simply never
/// activates.
pub struct LoadTracker {
    has_secondary: bool,
    // Fractions stay f64 until the final percent so byte ratios like 30/100
    // come out as exactly 30.0.
    primary_fraction: f64,
    secondary_fraction: f64,
    primary: PhaseStatus,
    secondary: PhaseStatus,
}

impl LoadTracker {
    pub fn new(has_secondary: bool) -> Self {
        Self {
            has_secondary,
            primary_fraction: 0.0,
            secondary_fraction: 0.0,
            primary: PhaseStatus::Loading,
            secondary: PhaseStatus::Loading,
        }
    }

    /// Record a byte-level progress callback. Returns the overall percent.
    pub fn progress(&mut self, phase: LoadPhase, loaded: u64, total: u64) -> f32 {
        let fraction = if total == 0 {
            0.0
        } else {
            (loaded as f64 / total as f64).clamp(0.0, 1.0)
        };
        match phase {
            LoadPhase::Primary => {
                if self.primary == PhaseStatus::Loading {
                    self.primary_fraction = fraction.max(self.primary_fraction);
                }
            }
            LoadPhase::Secondary => {
                if self.secondary == PhaseStatus::Loading {
                    self.secondary_fraction = fraction.max(self.secondary_fraction);
                }
            }
        }
        self.overall_percent()
    }

    /// Mark a phase complete (its span of the bar reads full).
    pub fn complete(&mut self, phase: LoadPhase) {
        match phase {
            LoadPhase::Primary => {
                self.primary = PhaseStatus::Complete;
                self.primary_fraction = 1.0;
            }
            LoadPhase::Secondary => {
                self.secondary = PhaseStatus::Complete;
                self.secondary_fraction = 1.0;
            }
        }
    }

    /// Mark a phase permanently failed.
    pub fn fail(&mut self, phase: LoadPhase) {
        match phase {
            LoadPhase::Primary => self.primary = PhaseStatus::Failed,
            LoadPhase::Secondary => self.secondary = PhaseStatus::Failed,
        }
    }

    /// Overall progress in percent, weighting each phase by its span.
    pub fn overall_percent(&self) -> f32 {
        let percent = if self.has_secondary {
            (self.primary_fraction * 0.5 + self.secondary_fraction * 0.5) * 100.0
        } else {
            self.primary_fraction * 100.0
        };
        percent as f32
    }

    /// Whether every non-failed phase has completed.
    pub fn is_settled(&self) -> bool {
        let primary_done = self.primary != PhaseStatus::Loading;
        let secondary_done = !self.has_secondary || self.secondary != PhaseStatus::Loading;
        primary_done && secondary_done
    }

    pub fn primary_failed(&self) -> bool {
        self.primary == PhaseStatus::Failed
    }

    pub fn secondary_failed(&self) -> bool {
        self.secondary == PhaseStatus::Failed
    }
}
