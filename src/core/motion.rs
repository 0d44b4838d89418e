//! Reduced-motion handling
//!
//! When the environment asks for reduced motion and the section honors it,
//! every entrance animation collapses to [`Entrance::None`].

use crate::core::spec::{Entrance, Motion};

/// Entrance style a section should actually use
pub fn effective_entrance(motion: &Motion, prefers_reduced_motion: bool) -> Entrance {
    if prefers_reduced_motion && motion.respect_reduced_motion {
        Entrance::None
    } else {
        motion.entrance
    }
}

/// Whether scroll-linked or autoplaying effects may run
pub fn allows_ambient_motion(motion: &Motion, prefers_reduced_motion: bool) -> bool {
    !(prefers_reduced_motion && motion.respect_reduced_motion)
}

/// CSS class carrying the entrance animation
pub fn entrance_class(entrance: Entrance) -> &'static str {
    match entrance {
        Entrance::Fade => "lp-motion-fade",
        Entrance::Slide => "lp-motion-slide",
        Entrance::Scale => "lp-motion-scale",
        Entrance::Bounce => "lp-motion-bounce",
        Entrance::None => "lp-motion-none",
    }
}
