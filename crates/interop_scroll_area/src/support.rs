//! Feature detection and native fallback

use interop_core::{Feature, Platform};
use smallvec::SmallVec;

/// Features the custom scrollbars depend on
pub const REQUIRED_FEATURES: [Feature; 3] = [
    Feature::ResizeObserver,
    Feature::IntersectionObserver,
    Feature::ScrollbarHiding,
];

/// Required features the platform lacks
pub fn missing_features(platform: &dyn Platform) -> SmallVec<[Feature; 3]> {
    REQUIRED_FEATURES
        .into_iter()
        .filter(|feature| !platform.supports(*feature))
        .collect()
}

/// Decide whether to render native scrolling instead of custom scrollbars
pub fn should_fallback_to_native(platform: &dyn Platform, force_native: bool) -> bool {
    if force_native {
        tracing::debug!("native scrolling forced");
        return true;
    }
    let missing = missing_features(platform);
    if !missing.is_empty() {
        tracing::debug!(?missing, "falling back to native scrolling");
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_core::HeadlessPlatform;

    #[test]
    fn test_full_support_uses_custom() {
        assert!(!should_fallback_to_native(&HeadlessPlatform::new(), false));
    }

    #[test]
    fn test_any_missing_feature_falls_back() {
        for feature in REQUIRED_FEATURES {
            let platform = HeadlessPlatform::new().without(feature);
            assert!(should_fallback_to_native(&platform, false));
            assert_eq!(missing_features(&platform).as_slice(), &[feature]);
        }
    }

    #[test]
    fn test_force_native() {
        assert!(should_fallback_to_native(&HeadlessPlatform::new(), true));
    }
}
