//! Card for one free Salat video on the videos page.

#[cfg(test)]
#[path = "video_card_test.rs"]
mod video_card_test;

use leptos::prelude::*;

/// A free instructional video. Hard-coded demo data; there is no real
/// video transport behind the play button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SalatVideo {
    pub title: &'static str,
    pub duration: &'static str,
    pub difficulty: Difficulty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// CSS modifier for the difficulty badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Beginner => "video-card__badge--beginner",
            Self::Intermediate => "video-card__badge--intermediate",
            Self::Advanced => "video-card__badge--advanced",
        }
    }
}

/// The six free videos from the original marketing site.
#[must_use]
pub fn free_videos() -> Vec<SalatVideo> {
    vec![
        SalatVideo { title: "How to Perform Fajr Prayer", duration: "8:45", difficulty: Difficulty::Beginner },
        SalatVideo { title: "Dhuhr Prayer Step by Step", duration: "12:30", difficulty: Difficulty::Beginner },
        SalatVideo { title: "Asr Prayer with Tajweed", duration: "10:15", difficulty: Difficulty::Intermediate },
        SalatVideo { title: "Maghrib Prayer Guide", duration: "9:20", difficulty: Difficulty::Beginner },
        SalatVideo { title: "Isha Prayer Complete", duration: "14:10", difficulty: Difficulty::Intermediate },
        SalatVideo { title: "Friday Jummah Prayer", duration: "18:45", difficulty: Difficulty::Advanced },
    ]
}

/// Video preview card with duration and difficulty badge.
#[component]
pub fn VideoCard(video: SalatVideo) -> impl IntoView {
    view! {
        <div class="video-card">
            <div class="video-card__thumb">"▶"</div>
            <div class="video-card__body">
                <h3 class="video-card__title">{video.title}</h3>
                <div class="video-card__meta">
                    <span class="video-card__duration">{video.duration}</span>
                    <span class=format!("video-card__badge {}", video.difficulty.badge_class())>
                        {video.difficulty.label()}
                    </span>
                </div>
                <button class="video-card__watch">"Watch Now"</button>
            </div>
        </div>
    }
}
