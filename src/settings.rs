//! Internal settings
//!
//! Parsed once at boot from the page URL query string (e.g.
//! `?quality=low&reduced_motion=1`). Nothing here is exposed as in-page
//! configuration and nothing is persisted - a reload starts fresh.

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Particle pool cap for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 200,
            QualityPreset::Medium => 800,
            QualityPreset::High => 2000,
        }
    }
}

/// Card settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Confetti density preset
    pub quality: QualityPreset,
    /// Particle effects master switch
    pub particles: bool,
    /// Reduced motion - keeps the celebration but tones the pool down
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse from a URL query string ("?a=b&c=d", leading '?' optional).
    /// Unknown keys and unparsable values fall back to defaults.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "quality" => {
                    if let Some(preset) = QualityPreset::from_str(value) {
                        settings.quality = preset;
                    }
                }
                "particles" => {
                    if let Some(flag) = parse_flag(value) {
                        settings.particles = flag;
                    }
                }
                "reduced_motion" | "reduced-motion" => {
                    if let Some(flag) = parse_flag(value) {
                        settings.reduced_motion = flag;
                    }
                }
                _ => {}
            }
        }

        settings
    }

    /// Effective particle pool cap (respects the master switch and
    /// reduced motion)
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else if self.reduced_motion {
            QualityPreset::Low.max_particles()
        } else {
            self.quality.max_particles()
        }
    }

    /// Load from the live page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let settings = Self::from_query(&query);
        log::info!(
            "settings: quality={} particles={} reduced_motion={}",
            settings.quality.as_str(),
            settings.particles,
            settings.reduced_motion
        );
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(Settings::from_query(""), Settings::default());
        assert_eq!(Settings::from_query("?"), Settings::default());
    }

    #[test]
    fn test_parses_known_keys() {
        let s = Settings::from_query("?quality=low&reduced_motion=1&particles=true");
        assert_eq!(s.quality, QualityPreset::Low);
        assert!(s.reduced_motion);
        assert!(s.particles);
    }

    #[test]
    fn test_ignores_unknown_and_malformed() {
        let s = Settings::from_query("?volume=11&quality=ultra&reduced_motion&particles=maybe");
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_effective_particle_cap() {
        let mut s = Settings::default();
        assert_eq!(s.max_particles(), 800);

        s.quality = QualityPreset::High;
        assert_eq!(s.max_particles(), 2000);

        s.reduced_motion = true;
        assert_eq!(s.max_particles(), 200);

        s.particles = false;
        assert_eq!(s.max_particles(), 0);
    }
}
