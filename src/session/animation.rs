//! Animation driver
//!
//! Advances a frame counter on the event loop's timer. The counter animates
//! the status label and, in the circles variant, progressively scales the
//! decision surface toward its converged shape.

/// Playback state, toggled by the Play/Pause controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Running,
    Paused,
}

/// Frames per animation cycle (0..=50 then wrap, as in the demo)
pub const CYCLE_FRAMES: usize = 51;

/// Timer-driven frame counter with Running/Paused state
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    frame: usize,
    playback: Playback,
    cycle: usize,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::with_cycle(CYCLE_FRAMES)
    }

    /// Driver with a custom cycle length (frames 0..cycle)
    pub fn with_cycle(cycle: usize) -> Self {
        assert!(cycle >= 2, "cycle needs at least two frames");
        Self {
            frame: 0,
            playback: Playback::Running,
            cycle,
        }
    }

    /// Timer tick; advances the frame only while running. Returns whether
    /// the frame moved (the caller redraws on true).
    pub fn tick(&mut self) -> bool {
        match self.playback {
            Playback::Running => {
                self.frame = (self.frame + 1) % self.cycle;
                true
            }
            Playback::Paused => false,
        }
    }

    pub fn play(&mut self) {
        self.playback = Playback::Running;
    }

    pub fn pause(&mut self) {
        self.playback = Playback::Paused;
    }

    /// Back to frame 0 and Running
    pub fn reset(&mut self) {
        self.frame = 0;
        self.playback = Playback::Running;
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_running(&self) -> bool {
        self.playback == Playback::Running
    }

    /// Contour scale factor in [0, 1] for the progressive-surface variant
    pub fn alpha(&self) -> f64 {
        (self.frame as f64 / (self.cycle - 1) as f64).clamp(0.0, 1.0)
    }

    /// The status label text for the current state
    pub fn status_line(&self) -> String {
        match self.playback {
            Playback::Running => format!("Running | Frame {}", self.frame),
            Playback::Paused => format!("Paused | Frame {}", self.frame),
        }
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}
