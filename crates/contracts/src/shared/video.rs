use serde::{Deserialize, Serialize};

/// Videos advertised on the features page. Playback is a placeholder card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    Process,
    Experience,
    Tour,
}

impl VideoKind {
    pub fn code(&self) -> &'static str {
        match self {
            VideoKind::Process => "process",
            VideoKind::Experience => "experience",
            VideoKind::Tour => "tour",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            VideoKind::Process => "The Art of Tea Making",
            VideoKind::Experience => "Customer Experience",
            VideoKind::Tour => "Virtual Store Tour",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VideoKind::Process => {
                "Watch our expert baristas craft the perfect milk tea using traditional brewing methods."
            }
            VideoKind::Experience => {
                "See why customers love their experience at Taste From The Greens."
            }
            VideoKind::Tour => "Take a virtual walk through our welcoming tea shop.",
        }
    }

    pub fn duration(&self) -> &'static str {
        match self {
            VideoKind::Process => "2:15",
            VideoKind::Experience => "1:45",
            VideoKind::Tour => "3:20",
        }
    }

    pub fn all() -> [VideoKind; 3] {
        [VideoKind::Process, VideoKind::Experience, VideoKind::Tour]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "process" => Some(VideoKind::Process),
            "experience" => Some(VideoKind::Experience),
            "tour" => Some(VideoKind::Tour),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code() {
        for kind in VideoKind::all() {
            assert_eq!(VideoKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(VideoKind::from_code("bloopers"), None);
    }

    #[test]
    fn test_tour_metadata() {
        let tour = VideoKind::Tour;
        assert_eq!(tour.title(), "Virtual Store Tour");
        assert_eq!(tour.duration(), "3:20");
    }
}
