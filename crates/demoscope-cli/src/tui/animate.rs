/// Two-phase "commit, then animate" driver for the detail-view score bars.
///
/// Bars render at zero width for a fixed number of ticks after the modal
/// opens (the commit phase), then ease toward their target width. Without
/// the commit phase the transition from zero is never visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarAnimation {
    Committing { ticks_left: u8 },
    Animating { progress: f64 },
    Settled,
}

/// Render ticks to hold at zero width before animating.
pub const COMMIT_TICKS: u8 = 2;

/// Fraction of the target width gained per tick once animating.
const STEP: f64 = 0.2;

impl BarAnimation {
    pub fn start() -> Self {
        Self::Committing {
            ticks_left: COMMIT_TICKS,
        }
    }

    /// Advance one render tick.
    pub fn tick(&mut self) {
        *self = match *self {
            Self::Committing { ticks_left: 0 } => Self::Animating { progress: STEP },
            Self::Committing { ticks_left } => Self::Committing {
                ticks_left: ticks_left - 1,
            },
            Self::Animating { progress } => {
                let next = progress + STEP;
                if next >= 1.0 {
                    Self::Settled
                } else {
                    Self::Animating { progress: next }
                }
            }
            Self::Settled => Self::Settled,
        }
    }

    /// Multiplier applied to every bar's target width this frame.
    pub fn fraction(&self) -> f64 {
        match *self {
            Self::Committing { .. } => 0.0,
            Self::Animating { progress } => progress,
            Self::Settled => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_hold_zero_width_through_the_commit_phase() {
        let mut animation = BarAnimation::start();
        assert_eq!(animation.fraction(), 0.0);

        // Two whole ticks elapse before any width appears.
        animation.tick();
        assert_eq!(animation.fraction(), 0.0);
        animation.tick();
        assert_eq!(animation.fraction(), 0.0);

        animation.tick();
        assert!(animation.fraction() > 0.0);
    }

    #[test]
    fn test_progress_is_monotonic_and_settles_at_full_width() {
        let mut animation = BarAnimation::start();
        let mut last = 0.0;
        for _ in 0..32 {
            animation.tick();
            let fraction = animation.fraction();
            assert!(fraction >= last);
            last = fraction;
        }
        assert_eq!(animation, BarAnimation::Settled);
        assert_eq!(animation.fraction(), 1.0);
    }
}
